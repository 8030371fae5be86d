use minijinja::{Value, context};
use tgt_core::naming::capitalize;
use tgt_core::schema::Method;

use crate::emitters::properties::{alias_contexts, property_contexts};
use crate::jsdoc;
use crate::type_mapper::{Owner, TypeMapper};

/// `sendMessage` → `SendMessageParams`.
pub fn params_name(method_name: &str) -> String {
    format!("{}Params", capitalize(method_name))
}

/// Body of `params.d.ts`: one params interface per method that takes parameters.
pub fn emit_all_params(mapper: &TypeMapper, methods: &[Method]) -> Result<String, minijinja::Error> {
    let methods: Vec<Value> = methods
        .iter()
        .filter(|method| !method.parameters.is_empty())
        .map(|method| params_to_ctx(mapper, method))
        .collect();
    super::render("params.d.ts.j2", context! { methods => methods })
}

/// Enumeration aliases and the params interface of `method`, or `None` without parameters.
pub fn emit_params(mapper: &TypeMapper, method: &Method) -> Result<Option<String>, minijinja::Error> {
    if method.parameters.is_empty() {
        return Ok(None);
    }
    emit_all_params(mapper, std::slice::from_ref(method)).map(Some)
}

fn params_to_ctx(mapper: &TypeMapper, method: &Method) -> Value {
    let owner = Owner::method(&method.name);
    let summary = if method.documentation_link.is_empty() {
        format!("Params object for the `{}` method", method.name)
    } else {
        format!(
            "Params object for the [{}]({}) method",
            method.name, method.documentation_link
        )
    };

    context! {
        name => params_name(&method.name),
        doc => jsdoc::lines(&summary),
        aliases => alias_contexts(mapper, owner, &method.parameters),
        properties => property_contexts(mapper, owner, &method.parameters),
    }
}

#[cfg(test)]
mod tests {
    use tgt_core::schema::{FieldType, Property};

    use super::*;

    #[test]
    fn test_no_parameters_emits_nothing() {
        let mapper = TypeMapper::default();
        let method = Method::new("getMe", vec![], FieldType::reference("User"));
        assert!(emit_params(&mapper, &method).unwrap().is_none());
        assert_eq!(emit_all_params(&mapper, &[method]).unwrap(), "");
    }

    #[test]
    fn test_params_interface() {
        let mapper = TypeMapper::default();
        let method = Method::new(
            "sendDice",
            vec![
                Property::new(
                    "chat_id",
                    true,
                    FieldType::any_of(vec![FieldType::integer(), FieldType::string()]),
                ),
                Property::new("emoji", false, FieldType::string_enum(["🎲", "🎯"])),
                Property::new("reply_parameters", false, FieldType::reference("ReplyParameters")),
            ],
            FieldType::reference("Message"),
        );
        let out = emit_params(&mapper, &method).unwrap().unwrap();
        assert_eq!(
            out,
            "export type SendDiceEmoji = \"🎲\" | \"🎯\"\n\
             \n\
             /**\n * Params object for the `sendDice` method\n */\n\
             export interface SendDiceParams {\n\
             \tchat_id: number | string\n\
             \temoji?: SendDiceEmoji\n\
             \treply_parameters?: Objects.TelegramReplyParameters\n\
             }\n"
        );
    }

    #[test]
    fn test_enumeration_names_do_not_collide_across_methods() {
        let mapper = TypeMapper::default();
        let emoji = || Property::new("emoji", false, FieldType::string_enum(["🎲"]));
        let methods = vec![
            Method::new("sendDice", vec![emoji()], FieldType::reference("Message")),
            Method::new("setStickerEmoji", vec![emoji()], FieldType::bool()),
        ];
        let out = emit_all_params(&mapper, &methods).unwrap();
        assert!(out.contains("export type SendDiceEmoji ="));
        assert!(out.contains("export type SetStickerEmojiEmoji ="));
    }

    #[test]
    fn test_params_name() {
        assert_eq!(params_name("sendMessage"), "SendMessageParams");
    }

    #[test]
    fn test_interfaces_separated_by_blank_line() {
        let mapper = TypeMapper::default();
        let chat_id = || Property::new("chat_id", true, FieldType::integer());
        let methods = vec![
            Method::new("leaveChat", vec![chat_id()], FieldType::bool()),
            Method::new("getMe", vec![], FieldType::reference("User")),
            Method::new("getChat", vec![chat_id()], FieldType::reference("ChatFullInfo")),
        ];
        assert_eq!(
            emit_all_params(&mapper, &methods).unwrap(),
            "/**\n * Params object for the `leaveChat` method\n */\n\
             export interface LeaveChatParams {\n\tchat_id: number\n}\n\
             \n\
             /**\n * Params object for the `getChat` method\n */\n\
             export interface GetChatParams {\n\tchat_id: number\n}\n"
        );
    }
}
