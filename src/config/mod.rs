#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, ExportFormat};
pub use settings::AppSettings;
pub use toml_config::TomlConfig;
