use minijinja::{Value, context};
use tgt_core::schema::Method;

use crate::emitters::params::params_name;
use crate::jsdoc;
use crate::type_mapper::{Owner, Slot, TypeMapper};

/// Name of the interface mapping every method to its call signature.
pub const METHODS_INTERFACE: &str = "APIMethods";

/// Namespace the `methods` module imports `params` under.
pub const PARAMS_NAMESPACE: &str = "Params";

/// How a method's params object is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsShape {
    /// No parameters: called with no arguments.
    None,
    /// Every parameter optional: the params object may be omitted.
    Optional,
    /// At least one required parameter.
    Required,
}

impl ParamsShape {
    pub fn of(method: &Method) -> Self {
        if method.parameters.is_empty() {
            ParamsShape::None
        } else if method.parameters.iter().any(|p| p.required) {
            ParamsShape::Required
        } else {
            ParamsShape::Optional
        }
    }
}

/// Body of `methods.d.ts`: the `APIMethods` interface with one member per method.
pub fn emit_methods(mapper: &TypeMapper, methods: &[Method]) -> Result<String, minijinja::Error> {
    let methods: Vec<Value> = methods
        .iter()
        .map(|method| {
            context! {
                name => method.name.clone(),
                signature => signature(mapper, method),
                doc => jsdoc::lines(&jsdoc::describe(&method.description, &method.documentation_link)),
            }
        })
        .collect();
    super::render(
        "methods.d.ts.j2",
        context! {
            interface => METHODS_INTERFACE,
            methods => methods,
        },
    )
}

/// Call signature of the `APIMethods` member for `method`.
pub fn signature(mapper: &TypeMapper, method: &Method) -> String {
    let owner = Owner::method(&method.name);
    let returns = mapper.remap(owner, Slot::default(), &method.returns);
    let params = format!("{PARAMS_NAMESPACE}.{}", params_name(&method.name));

    match ParamsShape::of(method) {
        ParamsShape::None => format!("CallAPIWithoutParams<{returns}>"),
        ParamsShape::Optional => format!("CallAPIWithOptionalParams<{params}, {returns}>"),
        ParamsShape::Required => format!("CallAPI<{params}, {returns}>"),
    }
}
