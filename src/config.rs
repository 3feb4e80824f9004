use std::{env, net::SocketAddr};

use thiserror::Error;

pub const BIND_ADDR: &str = "0.0.0.0";
pub const BIND_PORT: u16 = 8000;
pub const MCP_PATH: &str = "/mcp";
pub const STDIO_FLAG: &str = "--stdio";
pub const RANDOM_SEED_VAR: &str = "JOKE_RANDOM_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub bind_addr: String,
    pub bind_port: u16,
    pub random_seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JOKE_RANDOM_SEED must be a valid u64")]
    InvalidRandomSeed,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    /// Reads the transport flag from the process arguments and the optional
    /// random seed from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_parts(env::args().skip(1), env::var(RANDOM_SEED_VAR).ok())
    }

    pub fn from_parts<I>(args: I, random_seed: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let transport = match args.into_iter().next().as_deref() {
            Some(STDIO_FLAG) => Transport::Stdio,
            _ => Transport::Http,
        };

        let random_seed = random_seed
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidRandomSeed)
            })
            .transpose()?;

        let config = Self {
            transport,
            bind_addr: BIND_ADDR.to_string(),
            bind_port: BIND_PORT,
            random_seed,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }

    /// URL a co-located client uses to reach the HTTP transport.
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}{}", self.bind_port, MCP_PATH)
    }

    /// Banner written to stderr before serving, independent of the log filter.
    pub fn startup_lines(&self) -> [String; 2] {
        match self.transport {
            Transport::Stdio => [
                "Starting Joke MCP Server with STDIO transport...".to_string(),
                "Reading JSON-RPC messages from stdin, one per line".to_string(),
            ],
            Transport::Http => [
                format!(
                    "Starting Joke MCP Server with HTTP transport on {}",
                    self.public_url()
                ),
                format!("Use {STDIO_FLAG} flag for STDIO transport"),
            ],
        }
    }
}
