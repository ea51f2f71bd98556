#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat, PageCommand};
pub use toml_config::DashboardConfig;
