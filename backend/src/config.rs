//! Backend configuration managed by Figment.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `tracker.toml` in the working directory, then `TRACKER_*` environment
//! variables (e.g. `TRACKER_LISTEN_PORT=3100`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tracker.toml";
pub const ENV_PREFIX: &str = "TRACKER_";

/// A publication inserted into the reference table at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewspaperSeed {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listen address. Default: `127.0.0.1`.
    pub listen_addr: IpAddr,

    /// HTTP listen port. Default: `3000`, which the frontend expects.
    pub listen_port: u16,

    /// SQLite URL. Default: `sqlite:newspaper_tracker.db`.
    pub database_url: String,

    /// Origin allowed by the CORS layer. Default: `http://localhost:8080`.
    pub cors_origin: String,

    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Directory with the built frontend to serve at `/`. Unset skips it.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Reference rows for `GET /api/newspapers`
    pub newspapers: Vec<NewspaperSeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            listen_port: 3000,
            database_url: "sqlite:newspaper_tracker.db".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            static_dir: None,
            newspapers: vec![
                NewspaperSeed { name: "Aaj ka Anand".to_string(), price: 5.0 },
                NewspaperSeed { name: "Times of India".to_string(), price: 7.0 },
            ],
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(DEFAULT_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self> {
        Self::figment()
            .extract()
            .context("Failed to load backend configuration")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.listen_port)
    }
}
