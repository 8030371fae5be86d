pub mod index;
pub mod methods;
pub mod objects;
pub mod params;
pub mod properties;
pub mod utils;

use minijinja::{Environment, Value};

const TEMPLATES: &[(&str, &str)] = &[
    ("macros.d.ts.j2", include_str!("../../templates/macros.d.ts.j2")),
    ("objects.d.ts.j2", include_str!("../../templates/objects.d.ts.j2")),
    ("params.d.ts.j2", include_str!("../../templates/params.d.ts.j2")),
    ("methods.d.ts.j2", include_str!("../../templates/methods.d.ts.j2")),
    ("utils.d.ts.j2", include_str!("../../templates/utils.d.ts.j2")),
    ("index.d.ts.j2", include_str!("../../templates/index.d.ts.j2")),
    ("module.d.ts.j2", include_str!("../../templates/module.d.ts.j2")),
];

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks.
fn escape_jsdoc(value: String) -> String {
    value.replace("*/", "*\\/")
}

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_jsdoc", escape_jsdoc);
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Render one of the embedded templates.
pub(crate) fn render(name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let template = env.get_template(name)?;
    template.render(ctx)
}
