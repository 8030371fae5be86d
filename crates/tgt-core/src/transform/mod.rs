pub mod currencies;
pub mod envelopes;
pub mod icon_color;
pub mod input_file;
pub mod return_types;

use log::debug;

use crate::error::PatchError;
use crate::schema::Schema;

pub use currencies::parse_currency_list;

/// Inputs patches need beyond the schema itself.
#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// Supported payment currency codes, in upstream order.
    pub currencies: Vec<String>,
}

/// A single schema patch. Every patch must be idempotent.
pub type PatchFn = fn(&mut Schema, &PatchOptions) -> Result<(), PatchError>;

/// Patches applied after load and before emission, in this order.
pub const PATCHES: &[(&str, PatchFn)] = &[
    ("currencies", currencies::apply),
    ("response_envelopes", envelopes::apply),
    ("input_file", input_file::apply),
    ("icon_color", icon_color::apply),
    ("return_types", return_types::apply),
];

/// Run every patch in [`PATCHES`] over `schema` and return the frozen result.
pub fn apply(mut schema: Schema, options: &PatchOptions) -> Result<Schema, PatchError> {
    for (name, patch) in PATCHES {
        debug!("applying patch `{name}`");
        patch(&mut schema, options).map_err(|source| PatchError::Step {
            patch: *name,
            source: Box::new(source),
        })?;
    }
    Ok(schema)
}
