use minijinja::context;

use crate::emitters::methods::METHODS_INTERFACE;
use crate::type_mapper::DEFAULT_PREFIX;

/// Body of `utils.d.ts`: call signature helpers and per-method lookups.
pub fn emit_utils() -> Result<String, minijinja::Error> {
    super::render(
        "utils.d.ts.j2",
        context! {
            methods_interface => METHODS_INTERFACE,
            prefix => DEFAULT_PREFIX,
        },
    )
}
