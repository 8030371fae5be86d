use log::{debug, info};
use minijinja::context;
use thiserror::Error;
use tgt_core::schema::Schema;
use tgt_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::type_mapper::TypeMapper;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the TypeScript generator.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptConfig {
    /// Timestamp stamped into each module header. Omitted when `None`.
    pub generated_at: Option<String>,
}

/// The five declaration modules, in the order they are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Objects,
    Params,
    Methods,
    Utils,
    Index,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::Objects,
        Module::Params,
        Module::Methods,
        Module::Utils,
        Module::Index,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Module::Objects => "objects.d.ts",
            Module::Params => "params.d.ts",
            Module::Methods => "methods.d.ts",
            Module::Utils => "utils.d.ts",
            Module::Index => "index.d.ts",
        }
    }

    fn purpose(self) -> &'static [&'static str] {
        match self {
            Module::Objects => &["Objects the Telegram Bot API accepts and returns"],
            Module::Params => &["Params objects of the Telegram Bot API methods"],
            Module::Methods => &[
                "The `APIMethods` interface: every Telegram Bot API method",
                "mapped to its call signature",
            ],
            Module::Utils => &["Helper types for calling Telegram Bot API methods"],
            Module::Index => &["Entry point re-exporting every generated module"],
        }
    }

    fn example(self) -> &'static [&'static str] {
        match self {
            Module::Objects => &[
                "import type { TelegramUser } from \"./objects\"",
                "",
                "const bot: TelegramUser = { id: 1, is_bot: true, first_name: \"Bot\" }",
            ],
            Module::Params => &[
                "import type { SendMessageParams } from \"./params\"",
                "",
                "const params: SendMessageParams = { chat_id: 1, text: \"Hello\" }",
            ],
            Module::Methods => &[
                "import type { APIMethods } from \"./methods\"",
                "",
                "declare const api: APIMethods",
                "const message = await api.sendMessage({ chat_id: 1, text: \"Hello\" })",
            ],
            Module::Utils => &[
                "import type { APIMethodParams, APIMethodReturn } from \"./utils\"",
                "",
                "type Params = APIMethodParams<\"getUpdates\">",
                "type Updates = APIMethodReturn<\"getUpdates\">",
            ],
            Module::Index => &[
                "import type { APIMethods, TelegramObjects, TelegramParams } from \"./index\"",
                "",
                "type Chat = TelegramObjects.TelegramChat",
            ],
        }
    }

    fn imports(self) -> &'static [&'static str] {
        match self {
            Module::Objects => &[
                "import type { APIMethods } from \"./methods\"",
                "import type { APIMethodReturn } from \"./utils\"",
            ],
            Module::Params => &["import type * as Objects from \"./objects\""],
            Module::Methods => &[
                "import type * as Objects from \"./objects\"",
                "import type * as Params from \"./params\"",
                "import type { CallAPI, CallAPIWithOptionalParams, CallAPIWithoutParams } from \"./utils\"",
            ],
            Module::Utils => &["import type { APIMethods } from \"./methods\""],
            Module::Index => &[],
        }
    }

    /// The module body, which depends only on the schema.
    pub fn body(self, mapper: &TypeMapper, schema: &Schema) -> Result<String, GeneratorError> {
        Ok(match self {
            Module::Objects => emitters::objects::emit_objects(mapper, &schema.objects)?,
            Module::Params => emitters::params::emit_all_params(mapper, &schema.methods)?,
            Module::Methods => emitters::methods::emit_methods(mapper, &schema.methods)?,
            Module::Utils => emitters::utils::emit_utils()?,
            Module::Index => emitters::index::emit_index()?,
        })
    }
}

/// Header, imports and body of one module.
pub fn render_module(
    module: Module,
    mapper: &TypeMapper,
    schema: &Schema,
    config: &TypeScriptConfig,
) -> Result<String, GeneratorError> {
    let body = module.body(mapper, schema)?;
    debug!("rendered {} ({} bytes)", module.file_name(), body.len());

    let content = emitters::render(
        "module.d.ts.j2",
        context! {
            purpose => module.purpose(),
            example => module.example(),
            version => schema.version.to_string(),
            release_date => schema.recent_changes.to_string(),
            generated_at => config.generated_at,
            imports => module.imports(),
            body => body,
        },
    )?;
    Ok(content)
}

/// TypeScript declaration generator.
pub struct TypeScriptGenerator;

impl CodeGenerator for TypeScriptGenerator {
    type Config = TypeScriptConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        schema: &Schema,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let mapper = TypeMapper::default();
        let files = Module::ALL
            .iter()
            .map(|&module| -> Result<GeneratedFile, GeneratorError> {
                Ok(GeneratedFile {
                    path: module.file_name().to_string(),
                    content: render_module(module, &mapper, schema, config)?,
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        info!(
            "generated {} modules from Bot API v{} ({} objects, {} methods)",
            files.len(),
            schema.version,
            schema.objects.len(),
            schema.methods.len()
        );
        Ok(files)
    }
}
