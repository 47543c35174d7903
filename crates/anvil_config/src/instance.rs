use std::net::{Ipv4Addr, TcpListener};

use url::Url;

use crate::{AnvilConfig, ConfigError};

/// The interface a node listens on when no host is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Finds a free local TCP port by binding to port zero.
///
/// The port is released before returning, so another process may claim it
/// before the node binds to it.
pub fn find_free_port() -> Result<u16, ConfigError> {
    let listener =
        TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).map_err(ConfigError::FreePort)?;
    let address = listener.local_addr().map_err(ConfigError::FreePort)?;
    Ok(address.port())
}

/// The configuration of a node instance, with its endpoint resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnvilInstanceConfig {
    /// The remaining launch options
    pub config: AnvilConfig,
    /// The interface the node listens on
    pub host: String,
    /// The port the node listens on
    pub port: u16,
}

impl AnvilInstanceConfig {
    /// Returns `host:port`.
    pub fn url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the HTTP endpoint of the node.
    pub fn http_url(&self) -> Result<Url, ConfigError> {
        parse_url(format!("http://{}", self.url()))
    }

    /// Returns the WebSocket endpoint of the node.
    pub fn ws_url(&self) -> Result<Url, ConfigError> {
        parse_url(format!("ws://{}", self.url()))
    }

    /// Converts the configuration into `anvil` command-line arguments,
    /// including the resolved host and port.
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = self.config.to_cli_args();
        args.extend([
            String::from("--host"),
            self.host.clone(),
            String::from("--port"),
            self.port.to_string(),
        ]);
        args
    }
}

impl AnvilConfig {
    /// Fills in the endpoint of the node. The host defaults to
    /// [`DEFAULT_HOST`] and the port to a free local port.
    ///
    /// Fails if the fork URL is set but malformed.
    pub fn resolve(mut self) -> Result<AnvilInstanceConfig, ConfigError> {
        if let Some(fork_url) = &self.fork_url {
            parse_url(fork_url.clone())?;
        }

        let host = self.host.take().unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match self.port.take() {
            Some(port) => port,
            None => {
                let port = find_free_port()?;
                log::debug!("Using free port {port}");
                port
            }
        };

        Ok(AnvilInstanceConfig {
            config: self,
            host,
            port,
        })
    }
}

fn parse_url(url: String) -> Result<Url, ConfigError> {
    Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
}
