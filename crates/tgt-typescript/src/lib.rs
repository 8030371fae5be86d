pub mod emitters;
pub mod generator;
pub mod jsdoc;
pub mod type_mapper;

pub use generator::{GeneratorError, Module, TypeScriptConfig, TypeScriptGenerator};
pub use type_mapper::{Context, Owner, Slot, TypeMapper};
