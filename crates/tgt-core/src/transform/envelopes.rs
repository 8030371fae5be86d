use crate::error::PatchError;
use crate::schema::{FieldType, Object, ObjectKind, Property, Schema};

use super::PatchOptions;

pub const RESPONSE_OK_OBJECT: &str = "APIResponseOk";
pub const RESPONSE_ERROR_OBJECT: &str = "APIResponseError";
pub const RESPONSE_OBJECT: &str = "APIResponse";

const METHOD_TYPE_PARAMETER: &str = "Method extends keyof APIMethods = keyof APIMethods";
const RESPONSE_LINK: &str = "https://core.telegram.org/bots/api#making-requests";

/// Add the success envelope, the error envelope and their union.
///
/// The success envelope is generic over the method name so the payload type
/// of `result` can be recovered from the envelope alone.
pub fn apply(schema: &mut Schema, _options: &PatchOptions) -> Result<(), PatchError> {
    for object in envelope_objects() {
        schema.upsert_object(object);
    }
    Ok(())
}

fn envelope_objects() -> [Object; 3] {
    let ok = Object::new(
        RESPONSE_OK_OBJECT,
        ObjectKind::Properties {
            properties: vec![
                Property::new("ok", true, FieldType::bool_literal(true))
                    .with_description("The request was successful"),
                Property::new("result", true, FieldType::expression("APIMethodReturn<Method>"))
                    .with_description("The result of the query"),
            ],
        },
    )
    .with_description("Successful response of the Bot API for the given method")
    .with_documentation_link(RESPONSE_LINK)
    .with_type_parameters(METHOD_TYPE_PARAMETER);

    let error = Object::new(
        RESPONSE_ERROR_OBJECT,
        ObjectKind::Properties {
            properties: vec![
                Property::new("ok", true, FieldType::bool_literal(false))
                    .with_description("The request was unsuccessful"),
                Property::new("description", true, FieldType::string())
                    .with_description("A human-readable description of the error"),
                Property::new("error_code", true, FieldType::integer())
                    .with_description("Error code. Its meaning is subject to change in the future"),
                Property::new("parameters", false, FieldType::reference("ResponseParameters"))
                    .with_description("Helps to automatically handle the error"),
            ],
        },
    )
    .with_description("Unsuccessful response of the Bot API")
    .with_documentation_link(RESPONSE_LINK);

    // Type arguments ride along in the reference name; the mapper only prefixes it.
    let response = Object::new(
        RESPONSE_OBJECT,
        ObjectKind::AnyOf {
            any_of: vec![
                FieldType::reference(format!("{RESPONSE_OK_OBJECT}<Method>")),
                FieldType::reference(RESPONSE_ERROR_OBJECT),
            ],
        },
    )
    .with_description("Response of the Bot API for the given method, successful or not")
    .with_documentation_link(RESPONSE_LINK)
    .with_type_parameters(METHOD_TYPE_PARAMETER);

    [ok, error, response]
}
