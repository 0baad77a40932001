//! Server settings: built-in defaults, then `luach-server.toml` in the
//! working directory, then `LUACH_*` environment variables.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use luach_core::hebcal::DEFAULT_BASE_URL;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4097;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    /// Base URL of the Hebcal API.
    pub hebcal_url: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("hebcal_url", DEFAULT_BASE_URL)?
            .add_source(config::File::with_name("luach-server").required(false))
            .add_source(config::Environment::with_prefix("LUACH"))
            .build()
            .context("Failed to read server settings")?
            .try_deserialize()
            .context("Invalid server settings")
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
