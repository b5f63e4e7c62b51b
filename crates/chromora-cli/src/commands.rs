//! Subcommand execution. Each command produces one JSON document or one
//! block of text for stdout.

use std::path::Path;

use chrono::{DateTime, Utc};
use chromora_color::{
    css_variables, generate_palette_with, get_color_info, get_contrast_color, parse_color,
    resize_palette, CompactExport, PaletteExport, PaletteKind, PaletteResponse,
};
use chromora_common::{ChromoraError, ConfigError, Result};
use chromora_config::{set_value, ChromoraConfig, ConfigStore, InitOutcome};
use serde_json::{json, Value};
use tracing::info;

use crate::cli::{Command, ConfigAction, ExportFormat};

#[derive(Debug)]
pub enum Output {
    Json(Value),
    Text(String),
}

impl Output {
    /// Pretty-printed JSON, or the text as is.
    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            Output::Json(value) => serde_json::to_string_pretty(value),
            Output::Text(text) => Ok(text.clone()),
        }
    }
}

/// Everything a command may read besides its own arguments.
pub struct Context<'a> {
    /// Effective settings; defaults when no file could be loaded.
    pub config: &'a ChromoraConfig,
    /// `None` when no config path could be determined.
    pub store: Option<&'a ConfigStore>,
    pub now: DateTime<Utc>,
}

/// What a command printed and whether it should exit successfully.
#[derive(Debug)]
pub struct Outcome {
    pub output: Output,
    pub success: bool,
}

impl Outcome {
    fn ok(output: Output) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

pub fn run(command: Command, ctx: &Context) -> Result<Outcome> {
    let config = ctx.config;
    let defaults = &config.defaults;
    let or_base = |color: Option<String>| color.unwrap_or_else(|| defaults.base_color.clone());
    let or_count = |count: Option<usize>| count.unwrap_or(defaults.count as usize);

    match command {
        Command::Parse { input } => {
            let hex = parse_color(&input);
            let success = hex.is_some();
            Ok(Outcome {
                output: Output::Json(json!({ "input": input, "hex": hex })),
                success,
            })
        }

        Command::Info { color } => {
            let info = get_color_info(&or_base(color))?;
            Ok(Outcome::ok(Output::Json(serde_json::to_value(info)?)))
        }

        Command::Generate { color, count } => {
            let set = generate_palette_with(&or_base(color), Some(or_count(count)), &config.harmony)?;
            Ok(Outcome::ok(Output::Json(serde_json::to_value(
                PaletteResponse::new(&set),
            )?)))
        }

        Command::Resize {
            colors,
            count,
            format,
        } => {
            let format = format.unwrap_or(defaults.format);
            let rendered = resize_palette(&colors, count)?
                .iter()
                .map(|c| get_color_info(c).map(|info| info.get(format).to_string()))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(Outcome::ok(Output::Json(json!(rendered))))
        }

        Command::Export {
            color,
            kind,
            count,
            format,
            out_dir,
        } => {
            let set = generate_palette_with(&or_base(color), Some(or_count(count)), &config.harmony)?;
            let colors = set.get(kind);
            let output = match format {
                ExportFormat::Json => Output::Json(serde_json::to_value(PaletteExport::new(
                    set.base,
                    Some(kind),
                    colors,
                    ctx.now,
                ))?),
                ExportFormat::Compact => Output::Json(serde_json::to_value(CompactExport::new(
                    set.base,
                    Some(kind),
                    colors,
                ))?),
                ExportFormat::Css => Output::Text(css_variables(kind.as_str(), colors)),
            };
            match out_dir {
                Some(dir) => write_export(&dir, &output, ctx.now),
                None => Ok(Outcome::ok(output)),
            }
        }

        Command::Contrast { color } => {
            let contrast = get_contrast_color(&color)?;
            Ok(Outcome::ok(Output::Json(
                json!({ "color": color, "contrast": contrast }),
            )))
        }

        Command::Kinds => {
            let kinds: Vec<Value> = PaletteKind::ALL
                .iter()
                .map(|k| {
                    json!({
                        "name": k.as_str(),
                        "label": k.label(),
                        "description": k.description(),
                    })
                })
                .collect();
            Ok(Outcome::ok(Output::Json(Value::Array(kinds))))
        }

        Command::Config { action } => run_config(action, ctx),
    }
}

/// Save an export as `chromora-palette-<millis>.json` (`.css` for CSS).
fn write_export(dir: &Path, output: &Output, now: DateTime<Utc>) -> Result<Outcome> {
    let extension = match output {
        Output::Json(_) => "json",
        Output::Text(_) => "css",
    };
    let path = dir.join(PaletteExport::file_name(now)).with_extension(extension);

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, output.render()?)?;
    info!(path = %path.display(), "palette exported");

    Ok(Outcome::ok(Output::Json(
        json!({ "path": path.display().to_string() }),
    )))
}

// =============================================================================
// CONFIG
// =============================================================================

fn run_config(action: ConfigAction, ctx: &Context) -> Result<Outcome> {
    let path = ctx.store.map(|store| store.path().display().to_string());

    let store = || {
        ctx.store.ok_or_else(|| {
            ChromoraError::Other("no config directory on this platform; pass --config <path>".into())
        })
    };

    match action {
        ConfigAction::Show => Ok(Outcome::ok(Output::Json(json!({
            "path": path,
            "exists": ctx.store.is_some_and(ConfigStore::exists),
            "config": ctx.config,
        })))),

        ConfigAction::Init { force } => {
            let outcome = store()?.init(force)?;
            Ok(Outcome {
                output: Output::Json(json!({ "path": path, "status": outcome.as_str() })),
                success: outcome != InitOutcome::Kept,
            })
        }

        ConfigAction::Set { key, value } => {
            let store = store()?;
            // Re-read the file so a malformed one is reported, not overwritten.
            let current = match store.load() {
                Ok(config) => config,
                Err(ConfigError::FileNotFound(_)) => ChromoraConfig::default(),
                Err(e) => return Err(e.into()),
            };
            let updated = set_value(&current, &key, &value)?;
            store.save(&updated)?;
            info!(key = %key, path = %store.path().display(), "config updated");

            let pointer = format!("/{}", key.replace('.', "/"));
            let saved = serde_json::to_value(&updated)?
                .pointer(&pointer)
                .cloned()
                .unwrap_or(Value::Null);
            Ok(Outcome::ok(Output::Json(
                json!({ "path": path, "key": key, "value": saved }),
            )))
        }
    }
}
