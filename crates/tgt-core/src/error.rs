use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("method not found in schema: {0}")]
    MissingMethod(String),

    #[error("object not found in schema: {0}")]
    MissingObject(String),

    #[error("parameter `{parameter}` not found on method `{method}`")]
    MissingParameter { method: String, parameter: String },

    #[error("expected pattern not found in {location}: {pattern}")]
    PatternNotFound {
        location: String,
        pattern: &'static str,
    },

    #[error("currency list is empty")]
    NoCurrencies,

    #[error("patch `{patch}` failed: {source}")]
    Step {
        patch: &'static str,
        #[source]
        source: Box<PatchError>,
    },
}

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("failed to parse currency list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported currency list shape: expected an array of codes or an object keyed by code")]
    UnsupportedShape,
}
