pub mod config;
pub mod error;
pub mod naming;
pub mod parse;
pub mod schema;
pub mod transform;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a patched schema.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        schema: &schema::Schema,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
