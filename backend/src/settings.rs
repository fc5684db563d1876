//! Server settings.
//!
//! Layered: built-in defaults, then an optional `roster.toml` in the
//! working directory, then `ROSTER__*` environment variables
//! (for example `ROSTER__SERVER__PORT=8000`).

use std::net::SocketAddr;

use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendSettings {
    /// Directory holding the built frontend (trunk `dist/`)
    pub static_dir: String,
    /// Origin allowed by CORS; `*` allows any
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default filter when RUST_LOG is not set
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub frontend: FrontendSettings,
    pub log: LogSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(
                File::with_name("roster.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("ROSTER").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000_i64)?
            .set_default("database.url", "sqlite:roster.db")?
            .set_default("frontend.static_dir", "../frontend/dist")?
            .set_default("frontend.allowed_origin", "http://localhost:8080")?
            .set_default("log.level", "info")
    }
}
