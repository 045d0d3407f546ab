use clap::{error::ErrorKind, CommandFactory, Parser};
use gitignore_builder::app::{run, RunOutcome};
use gitignore_builder::utils::logger;
use gitignore_builder::{CliConfig, ConfigError, HttpTextSource, REQUEST_TIMEOUT};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger()?;
    } else {
        logger::init_cli_logger(config.verbose)?;
    }
    tracing::debug!("CLI config: {:?}", config);

    if !config.files && config.recipe.is_none() {
        CliConfig::command()
            .error(ErrorKind::MissingRequiredArgument, "a RECIPE is required")
            .exit();
    }

    let source = HttpTextSource::new(REQUEST_TIMEOUT)
        .map_err(ConfigError::from)
        .unwrap_or_else(|e| fail(&e));

    let mut stdout = std::io::stdout().lock();
    match run(&config, source, &mut stdout).await {
        Ok(RunOutcome::ShowedFiles) | Ok(RunOutcome::Built(_)) => Ok(()),
        // 無效的 recipe 名稱
        Err(ConfigError::UnknownRecipe { name, available }) => CliConfig::command()
            .error(
                ErrorKind::InvalidValue,
                format!(
                    "invalid value '{}' for '<RECIPE>'\n  [possible values: {}]",
                    name,
                    available.join(", ")
                ),
            )
            .exit(),
        Err(e) => fail(&e),
    }
}

fn fail(e: &ConfigError) -> ! {
    tracing::error!("❌ {} (Kind: {:?})", e, e.kind());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
