use crate::config::store::{ConfigPaths, ConfigStore};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gitignore-builder", version)]
#[command(about = "Build .gitignore contents from recipe URLs and write the result to OUTPUT")]
#[command(arg_required_else_help = true)]
pub struct CliConfig {
    /// Recipe to build, one of the names in recipes.json
    #[arg(required_unless_present = "files")]
    pub recipe: Option<String>,

    /// Output file, or "-" for stdout
    #[arg(default_value = "-")]
    pub output: String,

    #[arg(long, help = "Show paths to app data-files and exit")]
    pub files: bool,

    #[arg(long, value_name = "DIR", help = "Use DIR instead of the platform config directory")]
    pub config_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn config_paths(&self) -> ConfigPaths {
        self.config_dir
            .clone()
            .map_or_else(ConfigPaths::user_default, ConfigPaths::new)
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.config_paths())
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }
}
