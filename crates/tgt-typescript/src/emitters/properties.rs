use minijinja::{Value, context};
use tgt_core::schema::Property;

use crate::jsdoc;
use crate::type_mapper::{Owner, Slot, TypeMapper};

/// Interface member contexts for `properties`, in schema order.
pub fn property_contexts(
    mapper: &TypeMapper,
    owner: Owner<'_>,
    properties: &[Property],
) -> Vec<Value> {
    properties
        .iter()
        .map(|property| {
            context! {
                name => property.name.clone(),
                optional => !property.required,
                type => mapper.remap(owner, Slot::from(property), &property.kind),
                doc => jsdoc::lines(&property.description),
            }
        })
        .collect()
}

/// Literal union aliases the members of `owner` refer to.
pub fn alias_contexts(mapper: &TypeMapper, owner: Owner<'_>, properties: &[Property]) -> Vec<Value> {
    properties
        .iter()
        .filter_map(|property| mapper.enumeration_alias(owner, property))
        .map(|alias| {
            context! {
                name => alias.name,
                literals => alias.literals,
            }
        })
        .collect()
}
