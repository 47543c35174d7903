use std::path::PathBuf;

/// Error that occurs when loading or resolving an [`crate::AnvilConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        /// The path of the file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
    /// The TOML configuration is malformed.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    /// No free local TCP port could be found.
    #[error("Could not find free port: {0}")]
    FreePort(#[source] std::io::Error),
    /// A URL of the configuration is invalid.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// The parse error
        #[source]
        source: url::ParseError,
    },
}
