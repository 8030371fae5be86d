use minijinja::context;

use crate::type_mapper::DEFAULT_PREFIX;

/// Modules re-exported by `index.d.ts`, in order.
pub const MODULES: &[&str] = &["methods", "objects", "params", "utils"];

/// Body of `index.d.ts`: flat re-exports plus the objects and params namespaces.
pub fn emit_index() -> Result<String, minijinja::Error> {
    super::render(
        "index.d.ts.j2",
        context! {
            modules => MODULES,
            prefix => DEFAULT_PREFIX,
        },
    )
}
