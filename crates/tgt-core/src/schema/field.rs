use serde::{Deserialize, Serialize};

/// A named field shared by object properties and method parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// snake_case wire name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldType,
}

impl Property {
    pub fn new(name: impl Into<String>, required: bool, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The shape of a field, tagged by the schema's `type` key.
///
/// The set is closed: a tag outside it fails deserialization, so an
/// unexpected upstream shape stops generation instead of degrading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    Integer {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        enumeration: Vec<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Float {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    String {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        enumeration: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_len: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_len: Option<u64>,
    },
    Bool {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    Reference {
        reference: String,
    },
    Array {
        array: Box<FieldType>,
    },
    AnyOf {
        any_of: Vec<FieldType>,
    },
    /// Verbatim type text. Only produced by patches, never read from a schema.
    #[serde(skip)]
    Expression {
        expression: String,
    },
}

/// A closed set of allowed literal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enumeration<'a> {
    Strings(&'a [String]),
    Integers(&'a [i64]),
}

impl Enumeration<'_> {
    pub fn len(&self) -> usize {
        match self {
            Enumeration::Strings(values) => values.len(),
            Enumeration::Integers(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FieldType {
    pub fn integer() -> Self {
        FieldType::Integer {
            enumeration: Vec::new(),
            default: None,
            min: None,
            max: None,
        }
    }

    pub fn float() -> Self {
        FieldType::Float {
            default: None,
            min: None,
            max: None,
        }
    }

    pub fn string() -> Self {
        FieldType::String {
            enumeration: Vec::new(),
            default: None,
            min_len: None,
            max_len: None,
        }
    }

    /// A string fixed to a single value, emitted as a literal type.
    pub fn string_literal(value: impl Into<String>) -> Self {
        FieldType::String {
            enumeration: Vec::new(),
            default: Some(value.into()),
            min_len: None,
            max_len: None,
        }
    }

    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::String {
            enumeration: values.into_iter().map(Into::into).collect(),
            default: None,
            min_len: None,
            max_len: None,
        }
    }

    pub fn bool() -> Self {
        FieldType::Bool { default: None }
    }

    pub fn bool_literal(value: bool) -> Self {
        FieldType::Bool {
            default: Some(value),
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        FieldType::Reference {
            reference: name.into(),
        }
    }

    pub fn array(inner: FieldType) -> Self {
        FieldType::Array {
            array: Box::new(inner),
        }
    }

    pub fn any_of(variants: Vec<FieldType>) -> Self {
        FieldType::AnyOf { any_of: variants }
    }

    pub fn expression(text: impl Into<String>) -> Self {
        FieldType::Expression {
            expression: text.into(),
        }
    }

    /// The schema tag this type was read from.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Integer { .. } => "integer",
            FieldType::Float { .. } => "float",
            FieldType::String { .. } => "string",
            FieldType::Bool { .. } => "bool",
            FieldType::Reference { .. } => "reference",
            FieldType::Array { .. } => "array",
            FieldType::AnyOf { .. } => "any_of",
            FieldType::Expression { .. } => "expression",
        }
    }

    /// Every non-empty enumeration reachable through arrays and unions, in schema order.
    pub fn enumerations(&self) -> Vec<Enumeration<'_>> {
        match self {
            FieldType::String { enumeration, .. } if !enumeration.is_empty() => {
                vec![Enumeration::Strings(enumeration)]
            }
            FieldType::Integer { enumeration, .. } if !enumeration.is_empty() => {
                vec![Enumeration::Integers(enumeration)]
            }
            FieldType::Array { array } => array.enumerations(),
            FieldType::AnyOf { any_of } => any_of.iter().flat_map(FieldType::enumerations).collect(),
            _ => Vec::new(),
        }
    }

    /// A string or integer restricted to listed values.
    pub fn is_enumerated(&self) -> bool {
        match self {
            FieldType::String { enumeration, .. } => !enumeration.is_empty(),
            FieldType::Integer { enumeration, .. } => !enumeration.is_empty(),
            _ => false,
        }
    }
}
