use crate::error::PatchError;
use crate::schema::{FieldType, ObjectKind, Schema};

use super::PatchOptions;

pub const INPUT_FILE_OBJECT: &str = "InputFile";

/// Turn the `InputFile` placeholder into `Blob | Promise<Blob>`.
pub fn apply(schema: &mut Schema, _options: &PatchOptions) -> Result<(), PatchError> {
    let object = schema
        .object_mut(INPUT_FILE_OBJECT)
        .ok_or_else(|| PatchError::MissingObject(INPUT_FILE_OBJECT.to_string()))?;

    object.kind = ObjectKind::AnyOf {
        any_of: vec![
            FieldType::expression("Blob"),
            FieldType::expression("Promise<Blob>"),
        ],
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Object, ReleaseDate, Version};

    fn schema(objects: Vec<Object>) -> Schema {
        Schema {
            version: Version {
                major: 7,
                minor: 10,
                patch: 0,
            },
            recent_changes: ReleaseDate {
                year: 2024,
                month: 9,
                day: 6,
            },
            methods: vec![],
            objects,
        }
    }

    #[test]
    fn test_rewrites_placeholder() {
        let mut schema = schema(vec![Object::new(INPUT_FILE_OBJECT, ObjectKind::Unknown)]);
        apply(&mut schema, &PatchOptions::default()).unwrap();
        match &schema.objects[0].kind {
            ObjectKind::AnyOf { any_of } => assert_eq!(any_of.len(), 2),
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_object_is_fatal() {
        let mut schema = schema(vec![]);
        let err = apply(&mut schema, &PatchOptions::default()).unwrap_err();
        assert!(matches!(err, PatchError::MissingObject(ref name) if name == "InputFile"));
    }
}
