use serde::{Deserialize, Serialize};

use super::field::{FieldType, Property};

/// A named API entity (`Message`, `Chat`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation_link: String,
    #[serde(flatten)]
    pub kind: ObjectKind,
    /// Generic parameter list (without angle brackets) for synthetic objects.
    #[serde(skip)]
    pub type_parameters: Option<String>,
}

/// How an object is represented, tagged by the schema's `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    Properties {
        #[serde(default)]
        properties: Vec<Property>,
    },
    #[serde(alias = "one_of", alias = "oneOf")]
    AnyOf {
        #[serde(alias = "one_of", alias = "oneOf")]
        any_of: Vec<FieldType>,
    },
    /// Placeholder that holds no information.
    Unknown,
}

impl Object {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            documentation_link: String::new(),
            kind,
            type_parameters: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_documentation_link(mut self, link: impl Into<String>) -> Self {
        self.documentation_link = link.into();
        self
    }

    pub fn with_type_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.type_parameters = Some(parameters.into());
        self
    }

    /// Properties in schema order; empty for unions and placeholders.
    pub fn properties(&self) -> &[Property] {
        match &self.kind {
            ObjectKind::Properties { properties } => properties,
            ObjectKind::AnyOf { .. } | ObjectKind::Unknown => &[],
        }
    }
}
