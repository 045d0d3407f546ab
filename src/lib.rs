#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::store::find_recipe;
pub use config::{ConfigPaths, ConfigStore};
pub use core::{
    builder::{BuildOutput, GitignoreBuilder},
    fetch::{read_url_as_text, HttpTextSource, REQUEST_TIMEOUT},
};
pub use domain::{Recipe, Recipes, Template, Templates};
pub use utils::error::{ConfigError, ErrorKind, Result};
