//! Configuration for the starfolio portfolio.
//!
//! Settings live in a TOML file in the platform config directory. Missing
//! fields fall back to defaults and command-line flags override the file.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, Config, LogConfig, TextureConfig, default_config_path, default_data_dir,
};
pub use error::ConfigError;
