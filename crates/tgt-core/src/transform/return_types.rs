use crate::error::PatchError;
use crate::schema::{FieldType, Schema};

use super::PatchOptions;

/// Methods whose documented return type is missing or wrong upstream.
const RETURN_TYPE_FIXES: &[(&str, &str)] = &[("getChatMenuButton", "MenuButton")];

pub fn apply(schema: &mut Schema, _options: &PatchOptions) -> Result<(), PatchError> {
    for (method_name, reference) in RETURN_TYPE_FIXES {
        let method = schema
            .method_mut(method_name)
            .ok_or_else(|| PatchError::MissingMethod(method_name.to_string()))?;
        method.returns = FieldType::reference(*reference);
    }
    Ok(())
}
