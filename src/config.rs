use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_SERVICE_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVICE_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: DEFAULT_SERVICE_PORT,
            service_host: DEFAULT_SERVICE_HOST.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = match lookup("SERVICE_PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => DEFAULT_SERVICE_PORT,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| DEFAULT_SERVICE_HOST.to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
