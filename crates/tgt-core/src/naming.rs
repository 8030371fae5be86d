use heck::{ToLowerCamelCase, ToPascalCase};

/// `parse_mode` → `parseMode`.
pub fn camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// `parse_mode` → `ParseMode`.
pub fn pascal_case(name: &str) -> String {
    name.to_pascal_case()
}

/// Upper-case the first character and leave the rest untouched.
///
/// Unlike [`pascal_case`] this keeps acronyms intact, so `APIResponse` stays
/// `APIResponse` and `sendMessage` becomes `SendMessage`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
