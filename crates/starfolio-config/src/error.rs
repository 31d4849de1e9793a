//! Configuration error types.

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    /// Failed to serialize config to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),
}
