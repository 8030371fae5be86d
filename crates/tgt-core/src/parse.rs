use std::collections::HashSet;

use crate::error::ParseError;
use crate::schema::Schema;

/// Parse a Bot API schema from JSON.
pub fn from_json(input: &str) -> Result<Schema, ParseError> {
    let schema: Schema = serde_json::from_str(input)?;
    validate_unique_names(&schema)?;
    Ok(schema)
}

/// Method and object names become identifier fragments, so each must be unique.
fn validate_unique_names(schema: &Schema) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for method in &schema.methods {
        if !seen.insert(method.name.as_str()) {
            return Err(ParseError::DuplicateName {
                kind: "method",
                name: method.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for object in &schema.objects {
        if !seen.insert(object.name.as_str()) {
            return Err(ParseError::DuplicateName {
                kind: "object",
                name: object.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#""version": {"major": 7, "minor": 10, "patch": 0},
        "recent_changes": {"year": 2024, "month": 9, "day": 6}"#;

    #[test]
    fn test_minimal_schema() {
        let json = format!("{{ {HEADER}, \"methods\": [], \"objects\": [] }}");
        let schema = from_json(&json).unwrap();
        assert!(schema.methods.is_empty());
        assert!(schema.objects.is_empty());
    }

    #[test]
    fn test_duplicate_object_rejected() {
        let json = format!(
            r#"{{ {HEADER}, "objects": [
                {{"name": "User", "type": "unknown"}},
                {{"name": "User", "type": "unknown"}}
            ] }}"#
        );
        let err = from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateName { kind: "object", ref name } if name == "User"
        ));
    }

    #[test]
    fn test_duplicate_method_rejected() {
        let json = format!(
            r#"{{ {HEADER}, "methods": [
                {{"name": "getMe", "return_type": {{"type": "reference", "reference": "User"}}}},
                {{"name": "getMe", "return_type": {{"type": "reference", "reference": "User"}}}}
            ] }}"#
        );
        assert!(matches!(
            from_json(&json).unwrap_err(),
            ParseError::DuplicateName { kind: "method", .. }
        ));
    }

    #[test]
    fn test_same_name_across_lists_allowed() {
        let json = format!(
            r#"{{ {HEADER},
                "methods": [{{"name": "Foo", "return_type": {{"type": "bool"}}}}],
                "objects": [{{"name": "Foo", "type": "unknown"}}] }}"#
        );
        assert!(from_json(&json).is_ok());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            from_json("{not json").unwrap_err(),
            ParseError::Json(_)
        ));
    }
}
