//! chromora: command-line front end for the Chromora color engine.
//!
//! Every command prints JSON (or CSS for `export --format css`) on stdout.
//! Logs go to stderr.

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use chromora_common::{ChromoraError, ConfigError};
use chromora_config::{ChromoraConfig, ConfigStore};
use tracing::{debug, warn};

use crate::cli::{Args, Command};
use crate::commands::{Context, Output};

/// Load the config.
///
/// An explicit `--config` path must load, except under `config`
/// subcommands, which read the file without creating it and tolerate its
/// absence. Any other failure only produces a warning.
fn load_config(args: &Args, store: Option<&ConfigStore>) -> Result<ChromoraConfig, ConfigError> {
    let managing = matches!(args.command, Command::Config { .. });
    let loaded = match store {
        Some(store) if managing => store.load(),
        _ => chromora_config::load_config_from(args.config.as_deref()),
    };

    match loaded {
        Ok(config) => Ok(config),
        Err(e) if args.config.is_some() && !managing => Err(e),
        Err(ConfigError::FileNotFound(path)) if managing => {
            debug!(path = %path.display(), "no config file yet");
            Ok(ChromoraConfig::default())
        }
        Err(e) => {
            warn!("could not load config ({e}), using built-in defaults");
            Ok(ChromoraConfig::default())
        }
    }
}

fn print(output: &Output) -> Result<(), ChromoraError> {
    println!("{}", output.render()?);
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (store, loaded) = tracing::subscriber::with_default(
        logging::bootstrap_subscriber(args.log_level.as_deref()),
        || {
            let store = ConfigStore::resolve(args.config.as_deref())
                .inspect_err(|e| warn!("{e}"))
                .ok();
            let loaded = load_config(&args, store.as_ref());
            (store, loaded)
        },
    );
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.log_level.as_deref(), config.logging.level);
    debug!(command = ?args.command, "running");

    let ctx = Context {
        config: &config,
        store: store.as_ref(),
        now: chrono::Utc::now(),
    };
    let result = commands::run(args.command, &ctx)
        .and_then(|outcome| print(&outcome.output).map(|()| outcome.success));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
