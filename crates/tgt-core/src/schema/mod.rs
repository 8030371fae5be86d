pub mod field;
pub mod method;
pub mod object;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use field::{Enumeration, FieldType, Property};
pub use method::Method;
pub use object::{Object, ObjectKind};

/// The root of a Bot API description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub version: Version,
    pub recent_changes: ReleaseDate,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub objects: Vec<Object>,
}

/// Bot API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Date of the Bot API release the schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Schema {
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.iter_mut().find(|m| m.name == name)
    }

    /// Replace the object with the same name in place, or append it.
    pub fn upsert_object(&mut self, object: Object) {
        match self.object_mut(&object.name) {
            Some(existing) => *existing = object,
            None => self.objects.push(object),
        }
    }
}
