use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.tgt.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TgtConfig {
    /// Path to the Bot API schema JSON.
    pub input: String,
    /// Directory the declaration modules are written to.
    pub output: String,
    pub currencies: CurrencyConfig,
    /// Run Biome over the output directory after writing.
    pub format: bool,
}

impl Default for TgtConfig {
    fn default() -> Self {
        Self {
            input: "bot-api.json".to_string(),
            output: "out".to_string(),
            currencies: CurrencyConfig::default(),
            format: true,
        }
    }
}

/// Where the supported currency codes come from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub url: String,
    /// Local JSON file used instead of fetching `url`.
    pub file: Option<String>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CURRENCIES_URL.to_string(),
            file: None,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".tgt.yaml";

pub const DEFAULT_CURRENCIES_URL: &str = "https://core.telegram.org/bots/payments/currencies.json";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<TgtConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: TgtConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# tgt configuration
input: bot-api.json   # Bot API schema (custom.json layout)
output: out           # directory for the generated .d.ts modules

currencies:
  url: https://core.telegram.org/bots/payments/currencies.json
  # file: currencies.json   # use a local copy instead of fetching

format: true          # run `npx @biomejs/biome format --write` on the output
"#
}
