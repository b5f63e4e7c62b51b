//! Log filter selection and subscriber setup. Logs always go to stderr so
//! stdout carries only command output.

use chromora_config::LogLevel;
use tracing_subscriber::EnvFilter;

/// `--log-level`, then `RUST_LOG`, then the configured level.
pub fn directive(cli: Option<&str>, env: Option<&str>, level: LogLevel) -> String {
    cli.or(env)
        .map(str::to_string)
        .unwrap_or_else(|| format!("chromora={}", level.as_filter()))
}

fn env_filter(cli: Option<&str>, level: LogLevel) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = directive(cli, env.as_deref(), level);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        EnvFilter::new(format!("chromora={}", level.as_filter()))
    })
}

/// Subscriber used while the config file is being read, before the
/// configured level is known.
pub fn bootstrap_subscriber(cli: Option<&str>) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli, LogLevel::default()))
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the global subscriber.
pub fn init(cli: Option<&str>, level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli, level))
        .with_writer(std::io::stderr)
        .init();
}
