use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON, one event per line.
    Json,
    Pretty,
}

/// Runtime settings, read once from the environment at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Set when running inside AWS Lambda; requests then arrive through the
    /// Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let raw_addr =
            lookup("THRIVE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid THRIVE_BIND_ADDR '{raw_addr}': {e}"))?;

        let log_format = match lookup("THRIVE_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => eyre::bail!("invalid THRIVE_LOG_FORMAT '{other}': expected json or pretty"),
        };

        Ok(Self {
            bind_addr,
            log_format,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
