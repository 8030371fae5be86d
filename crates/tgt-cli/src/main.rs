use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::{debug, info};

use tgt_core::config::{self, CONFIG_FILE_NAME, TgtConfig};
use tgt_core::parse;
use tgt_core::schema::{ObjectKind, Schema};
use tgt_core::transform::{self, PatchOptions, currencies::STARS_CURRENCY, parse_currency_list};
use tgt_core::{CodeGenerator, GeneratedFile};
use tgt_typescript::emitters::methods::ParamsShape;
use tgt_typescript::{TypeScriptConfig, TypeScriptGenerator};

#[derive(Parser)]
#[command(
    name = "tgt",
    about = "TypeScript declarations generator for the Telegram Bot API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration modules from a Bot API schema
    Generate {
        /// Path to the Bot API schema JSON
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Local currencies JSON used instead of fetching the published list
        #[arg(long)]
        currencies: Option<PathBuf>,

        /// Skip running the formatter on the output
        #[arg(long)]
        no_format: bool,
    },

    /// Validate a Bot API schema
    Validate {
        /// Path to the Bot API schema JSON
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the patched schema
    Inspect {
        /// Path to the Bot API schema JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new tgt configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            currencies,
            no_format,
        } => cmd_generate(input, output, currencies, no_format),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "tgt", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<TgtConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_schema(path: &Path) -> Result<Schema> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let schema = parse::from_json(&content)
        .with_context(|| format!("failed to parse schema {}", path.display()))?;
    Ok(schema)
}

/// Currency codes from a local file when one is given, otherwise from `cfg.currencies.url`.
fn load_currencies(file: Option<PathBuf>, cfg: &TgtConfig) -> Result<Vec<String>> {
    let file = file.or_else(|| cfg.currencies.file.as_ref().map(PathBuf::from));
    let content = match file {
        Some(path) => {
            debug!("reading currencies from {}", path.display());
            fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => fetch_url(&cfg.currencies.url)?,
    };
    let codes = parse_currency_list(&content).context("invalid currency list")?;
    info!("loaded {} currency codes", codes.len());
    Ok(codes)
}

fn fetch_url(url: &str) -> Result<String> {
    debug!("fetching {url}");
    let body = ureq::get(url)
        .call()
        .with_context(|| format!("HTTP request to '{url}' failed"))?
        .into_body()
        .read_to_string()
        .with_context(|| format!("failed to read response body from '{url}'"))?;
    Ok(body)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Try to run the Biome formatter on the output directory.
fn try_run_biome(output_dir: &Path) {
    match Command::new("npx")
        .args(["@biomejs/biome", "format", "--write", "."])
        .current_dir(output_dir)
        .output()
    {
        Ok(result) if result.status.success() => {
            eprintln!("  formatted with biome");
        }
        Ok(_result) => {
            eprintln!(
                "  warning: biome formatting had issues (non-zero exit), output may need manual formatting"
            );
        }
        Err(_) => {
            eprintln!(
                "  note: biome not found, run `npx @biomejs/biome format --write .` in {} to format",
                output_dir.display()
            );
        }
    }
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    currencies: Option<PathBuf>,
    no_format: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let schema = load_schema(&input)?;
    let options = PatchOptions {
        currencies: load_currencies(currencies, &cfg)?,
    };
    let schema = transform::apply(schema, &options)?;

    eprintln!(
        "Generating Bot API v{} types → {}",
        schema.version,
        output_dir.display()
    );
    let ts_config = TypeScriptConfig {
        generated_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    };
    let files = TypeScriptGenerator.generate(&schema, &ts_config)?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    if cfg.format && !no_format {
        try_run_biome(&output_dir);
    }

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let schema = load_schema(&input)?;

    eprintln!(
        "Valid Bot API schema v{} ({})",
        schema.version, schema.recent_changes
    );
    eprintln!("  Methods: {}", schema.methods.len());
    eprintln!("  Objects: {}", schema.objects.len());

    // The published currency list is not needed to check that every patch target exists.
    let options = PatchOptions {
        currencies: vec![STARS_CURRENCY.to_string()],
    };
    let patched = transform::apply(schema, &options)?;
    eprintln!("  Objects after patches: {}", patched.objects.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let schema = load_schema(&input)?;
    let options = PatchOptions {
        currencies: vec![STARS_CURRENCY.to_string()],
    };
    let schema = transform::apply(schema, &options)?;

    let summary = build_inspect_summary(&schema);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(schema: &Schema) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = schema
        .objects
        .iter()
        .map(|o| {
            let (kind, members) = match &o.kind {
                ObjectKind::Properties { properties } => ("properties", properties.len()),
                ObjectKind::AnyOf { any_of } => ("any_of", any_of.len()),
                ObjectKind::Unknown => ("unknown", 0),
            };
            serde_json::json!({
                "name": o.name,
                "kind": kind,
                "members": members,
            })
        })
        .collect();

    let methods: Vec<serde_json::Value> = schema
        .methods
        .iter()
        .map(|m| {
            let params = match ParamsShape::of(m) {
                ParamsShape::None => "none",
                ParamsShape::Optional => "optional",
                ParamsShape::Required => "required",
            };
            serde_json::json!({
                "name": m.name,
                "params": params,
                "parameters": m.parameters.len(),
                "returns": m.returns.tag(),
            })
        })
        .collect();

    serde_json::json!({
        "version": schema.version.to_string(),
        "release_date": schema.recent_changes.to_string(),
        "objects": objects,
        "methods": methods,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
