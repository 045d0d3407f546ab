#[cfg(feature = "cli")]
pub mod cli;
pub mod store;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use store::{ConfigPaths, ConfigStore};
