use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_TARGET: &str = "gitignore_builder";

/// `RUST_LOG` wins; otherwise this crate logs at info (debug when verbose)
/// and dependencies only at warn.
fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={},warn", LOG_TARGET, level)))
}

// stdout 可能是輸出目標，日誌一律寫到 stderr
pub fn init_cli_logger(verbose: bool) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init()
        .context("failed to install the CLI logger")
}

pub fn init_json_logger() -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .json()
        .flatten_event(true)
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(layer)
        .try_init()
        .context("failed to install the JSON logger")
}
