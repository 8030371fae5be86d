use tgt_core::naming::{capitalize, pascal_case};
use tgt_core::schema::{Enumeration, FieldType, Property};

/// Prefix for every declared object name, so `User` or `File` never collide with globals.
pub const DEFAULT_PREFIX: &str = "Telegram";

/// Namespace the `params` and `methods` modules import `objects` under.
pub const OBJECTS_NAMESPACE: &str = "Objects";

const PARSE_MODE: &str = r#""HTML" | "MarkdownV2" | "Markdown""#;

/// Text that may also be a formatted value serialized through `toString()`.
const FORMATTABLE_STRING: &str = "string | { toString(): string }";

/// Markup objects that may also be passed as a builder exposing `toJSON()`.
const MARKUP_OBJECTS: &[&str] = &[
    "InlineKeyboardMarkup",
    "ReplyKeyboardMarkup",
    "ReplyKeyboardRemove",
    "ForceReply",
];

const INPUT_FILE_OBJECT: &str = "InputFile";

/// Field that also accepts an uploaded file.
const MEDIA_FIELD: &str = "media";

/// Which output module a type expression is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Inside `objects`: references are bare.
    Object,
    /// Inside `params` or `methods`: references go through the objects namespace.
    Method,
}

/// The entity a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner<'a> {
    pub name: &'a str,
    pub context: Context,
}

impl<'a> Owner<'a> {
    pub fn object(name: &'a str) -> Self {
        Self {
            name,
            context: Context::Object,
        }
    }

    pub fn method(name: &'a str) -> Self {
        Self {
            name,
            context: Context::Method,
        }
    }
}

/// The named position a type expression fills. Anonymous for unions and return types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub required: bool,
}

impl<'a> From<&'a Property> for Slot<'a> {
    fn from(property: &'a Property) -> Self {
        Self {
            name: &property.name,
            description: &property.description,
            required: property.required,
        }
    }
}

/// A standalone literal union declared for a field with an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationAlias {
    pub name: String,
    pub literals: Vec<String>,
}

/// Converts schema field types into TypeScript type expressions.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    prefix: String,
    objects_namespace: String,
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, OBJECTS_NAMESPACE)
    }
}

impl TypeMapper {
    pub fn new(prefix: impl Into<String>, objects_namespace: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            objects_namespace: objects_namespace.into(),
        }
    }

    /// Declared name of a schema object: `Message` → `TelegramMessage`.
    pub fn object_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, capitalize(name))
    }

    /// A reference to an object, qualified when written outside `objects`.
    pub fn reference(&self, target: &str, context: Context) -> String {
        let name = self.object_name(target);
        match context {
            Context::Object => name,
            Context::Method => format!("{}.{}", self.objects_namespace, name),
        }
    }

    /// Name of the literal union declared for `field` of `owner`.
    pub fn enumeration_alias_name(&self, owner: Owner<'_>, field: &str) -> String {
        match owner.context {
            Context::Object => format!("{}{}", self.object_name(owner.name), pascal_case(field)),
            Context::Method => format!("{}{}", capitalize(owner.name), pascal_case(field)),
        }
    }

    /// The literal union a property needs declared, if any.
    ///
    /// Every enumeration reachable through the property's type contributes
    /// its literals, in schema order, to the one alias.
    pub fn enumeration_alias(
        &self,
        owner: Owner<'_>,
        property: &Property,
    ) -> Option<EnumerationAlias> {
        let overridden = self
            .string_override(owner.context, Slot::from(property))
            .is_some();
        let literals: Vec<String> = property
            .kind
            .enumerations()
            .into_iter()
            .flat_map(|enumeration| match enumeration {
                Enumeration::Strings(_) if overridden => Vec::new(),
                Enumeration::Strings(values) => values.iter().map(|v| string_literal(v)).collect(),
                Enumeration::Integers(values) => values.iter().map(i64::to_string).collect(),
            })
            .collect();
        if literals.is_empty() {
            return None;
        }
        Some(EnumerationAlias {
            name: self.enumeration_alias_name(owner, &property.name),
            literals,
        })
    }

    /// Type expression for `field_type` filling `slot` of `owner`.
    pub fn remap(&self, owner: Owner<'_>, slot: Slot<'_>, field_type: &FieldType) -> String {
        match field_type {
            FieldType::Integer { enumeration, .. } if !enumeration.is_empty() => {
                self.enumeration_alias_name(owner, slot.name)
            }
            FieldType::Integer { .. } | FieldType::Float { .. } => "number".to_string(),
            FieldType::Bool {
                default: Some(value),
            } if slot.required => value.to_string(),
            FieldType::Bool { .. } => "boolean".to_string(),
            FieldType::String {
                enumeration,
                default,
                ..
            } => {
                if let Some(special) = self.string_override(owner.context, slot) {
                    special
                } else if !enumeration.is_empty() {
                    self.enumeration_alias_name(owner, slot.name)
                } else if let Some(value) = default {
                    string_literal(value)
                } else {
                    "string".to_string()
                }
            }
            FieldType::Reference { reference } => {
                let name = self.reference(reference, owner.context);
                if MARKUP_OBJECTS.contains(&reference.as_str()) {
                    format!("{name} | {{ toJSON(): {name} }}")
                } else {
                    name
                }
            }
            FieldType::AnyOf { any_of } => self.union(owner, slot, any_of),
            FieldType::Array { array } => {
                let inner = self.remap(owner, slot, array);
                if inner.contains('|') {
                    format!("({inner})[]")
                } else {
                    format!("{inner}[]")
                }
            }
            FieldType::Expression { expression } => expression.clone(),
        }
    }

    /// Variants joined in schema order. Plain duplicates are kept.
    ///
    /// Enumerated variants share the field's single alias, so only the first
    /// one is written. A `media` string already names the input file, which
    /// drops a separate input file variant.
    pub fn union(&self, owner: Owner<'_>, slot: Slot<'_>, variants: &[FieldType]) -> String {
        let mut parts = Vec::with_capacity(variants.len());
        let mut enumerated = false;
        for variant in variants {
            if variant.is_enumerated() {
                if enumerated {
                    continue;
                }
                enumerated = true;
            }
            parts.push(self.remap(owner, slot, variant));
        }

        if slot.name == MEDIA_FIELD {
            let input_file = self.reference(INPUT_FILE_OBJECT, owner.context);
            if parts.contains(&format!("{input_file} | string")) {
                parts.retain(|part| *part != input_file);
            }
        }
        parts.join(" | ")
    }

    /// Hand-widened string fields that bypass the generic string rules.
    fn string_override(&self, context: Context, slot: Slot<'_>) -> Option<String> {
        match slot.name {
            MEDIA_FIELD => Some(format!(
                "{} | string",
                self.reference(INPUT_FILE_OBJECT, context)
            )),
            "parse_mode" => Some(PARSE_MODE.to_string()),
            "message_text" => Some(FORMATTABLE_STRING.to_string()),
            _ if slot.description.contains("after entities parsing") => {
                Some(FORMATTABLE_STRING.to_string())
            }
            _ => None,
        }
    }
}

/// Double-quoted TypeScript string literal.
fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
