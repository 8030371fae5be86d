use serde::{Deserialize, Serialize};

use super::field::{FieldType, Property};

/// A callable Bot API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation_link: String,
    /// Parameters in schema order; absent means the method takes none.
    #[serde(default, alias = "arguments")]
    pub parameters: Vec<Property>,
    #[serde(alias = "return_type")]
    pub returns: FieldType,
}

impl Method {
    pub fn new(name: impl Into<String>, parameters: Vec<Property>, returns: FieldType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            documentation_link: String::new(),
            parameters,
            returns,
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&Property> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.parameters.iter_mut().find(|p| p.name == name)
    }
}
