use minijinja::{Value, context};
use tgt_core::schema::{Object, ObjectKind};

use crate::emitters::properties::{alias_contexts, property_contexts};
use crate::jsdoc;
use crate::type_mapper::{Owner, Slot, TypeMapper};

/// Body of `objects.d.ts`: every object in schema order.
pub fn emit_objects(mapper: &TypeMapper, objects: &[Object]) -> Result<String, minijinja::Error> {
    let objects: Vec<Value> = objects.iter().map(|o| object_to_ctx(mapper, o)).collect();
    super::render("objects.d.ts.j2", context! { objects => objects })
}

/// Enumeration aliases of `object` followed by its own declaration.
pub fn emit_object(mapper: &TypeMapper, object: &Object) -> Result<String, minijinja::Error> {
    emit_objects(mapper, std::slice::from_ref(object))
}

fn object_to_ctx(mapper: &TypeMapper, object: &Object) -> Value {
    let owner = Owner::object(&object.name);
    let generics = object
        .type_parameters
        .as_ref()
        .map(|params| format!("<{params}>"))
        .unwrap_or_default();

    let (kind, union, properties) = match &object.kind {
        ObjectKind::AnyOf { any_of } => (
            "union",
            Some(mapper.union(owner, Slot::default(), any_of)),
            Vec::new(),
        ),
        ObjectKind::Properties { properties } if !properties.is_empty() => (
            "interface",
            None,
            property_contexts(mapper, owner, properties),
        ),
        // Upstream placeholders that currently hold no information.
        ObjectKind::Properties { .. } | ObjectKind::Unknown => ("empty", None, Vec::new()),
    };

    context! {
        kind => kind,
        name => mapper.object_name(&object.name),
        generics => generics,
        doc => jsdoc::lines(&jsdoc::describe(&object.description, &object.documentation_link)),
        aliases => alias_contexts(mapper, owner, object.properties()),
        union => union,
        properties => properties,
    }
}
