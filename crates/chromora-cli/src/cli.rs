use chromora_color::{ColorFormat, PaletteKind};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Chromora: color parsing, harmonic palettes and palette resizing.
#[derive(Parser, Debug)]
#[command(name = "chromora", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `chromora_color=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a color to `#rrggbb`. Exits 1 when the input is not a color.
    Parse { input: String },

    /// Describe a color in every encoding.
    Info {
        /// Color to describe (defaults to the configured base color).
        color: Option<String>,
    },

    /// Generate all six harmonic palettes from a base color.
    Generate {
        /// Base color (defaults to the configured base color).
        color: Option<String>,

        /// Colors per palette (defaults to the configured count).
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Resample a list of colors along an LCh scale.
    Resize {
        #[arg(required = true)]
        colors: Vec<String>,

        #[arg(short = 'n', long)]
        count: usize,

        /// Encoding of the output colors (defaults to the configured format).
        #[arg(long, value_parser = parse_format)]
        format: Option<ColorFormat>,
    },

    /// Export a single palette.
    Export {
        /// Base color (defaults to the configured base color).
        color: Option<String>,

        #[arg(short, long, default_value = "monochromatic", value_parser = parse_kind)]
        kind: PaletteKind,

        #[arg(short = 'n', long)]
        count: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write the export into this directory instead of stdout.
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Pick black or white text for a background color.
    Contrast { color: String },

    /// List the palette kinds with their labels and descriptions.
    Kinds,

    /// Inspect or change the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config path and the effective settings.
    Show,

    /// Write a commented starter config.
    Init {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Change one value, e.g. `config set defaults.count 8`.
    Set { key: String, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full palette document with per-color details.
    Json,
    /// Hex strings only.
    Compact,
    /// CSS custom properties.
    Css,
}

fn parse_kind(s: &str) -> Result<PaletteKind, String> {
    s.parse().map_err(|_| {
        let known: Vec<&str> = PaletteKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown palette kind '{s}' (expected one of: {})", known.join(", "))
    })
}

fn parse_format(s: &str) -> Result<ColorFormat, String> {
    s.parse().map_err(|_| format!("unknown color format '{s}' (expected hex, rgb, rgba or hsl)"))
}

pub fn parse() -> Args {
    Args::parse()
}
