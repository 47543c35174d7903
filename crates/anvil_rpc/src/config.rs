use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    AnvilMethod, FormatError, Param, Response, format_request, format_response,
    try_format_request, try_format_response,
};

/// Environment variable that selects the [`Strictness`] of
/// [`FormatterConfig::from_env`].
pub const STRICTNESS_ENV_VAR: &str = "ANVIL_RPC_STRICTNESS";

/// How malformed params and responses are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Malformed input takes a default value or is passed through.
    #[default]
    Lenient,
    /// Malformed input is rejected.
    Strict,
}

impl FromStr for Strictness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "strict" => Ok(Strictness::Strict),
            _ => Err(ConfigError::InvalidStrictness {
                value: s.to_string(),
            }),
        }
    }
}

/// Error that occurs when loading a [`FormatterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The strictness is neither `lenient` nor `strict`.
    #[error("Invalid strictness '{value}'. Expected 'lenient' or 'strict'.")]
    InvalidStrictness {
        /// The rejected value
        value: String,
    },
    /// The environment variable is not valid unicode.
    #[error("The value of {STRICTNESS_ENV_VAR} is not valid unicode")]
    NotUnicode,
}

/// Configuration of a [`Formatter`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    /// How malformed input is handled
    #[serde(default)]
    pub strictness: Strictness,
}

impl FormatterConfig {
    /// Reads the configuration from the environment. When
    /// [`STRICTNESS_ENV_VAR`] is unset, the default configuration is used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(STRICTNESS_ENV_VAR))
    }

    fn from_env_value(value: Result<String, std::env::VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(value) => Ok(Self {
                strictness: value.parse()?,
            }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }
}

/// Formats requests and responses with a configured [`Strictness`].
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    /// Constructs a new instance.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Returns the formatter's configuration.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats the params of a request. Never fails in lenient mode.
    pub fn request(
        &self,
        method: AnvilMethod,
        params: Vec<Param>,
    ) -> Result<Vec<Param>, FormatError> {
        match self.config.strictness {
            Strictness::Lenient => Ok(format_request(method, params)),
            Strictness::Strict => try_format_request(method, params),
        }
    }

    /// Formats a decoded response. Never fails in lenient mode.
    pub fn response(
        &self,
        method: AnvilMethod,
        response: serde_json::Value,
    ) -> Result<Response, FormatError> {
        match self.config.strictness {
            Strictness::Lenient => Ok(format_response(method, response)),
            Strictness::Strict => try_format_response(method, response),
        }
    }
}
