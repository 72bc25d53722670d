//! # Configuration
//!
//! Command-line flags, each backed by an environment variable so the
//! service can be configured either way.
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--port` | `PORT` | `8000` |
//! | `--host` | `HOST` | `0.0.0.0` |
//! | `--allowed-origins` | `MOVIES_ALLOWED_ORIGINS` | the four built-in origins |
//! | `--seed-path` | `MOVIES_SEED_PATH` | embedded dataset |
//! | `--log-format` | `MOVIES_LOG_FORMAT` | `text` |

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::middleware::origin::DEFAULT_ALLOWED_ORIGINS;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Movies API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "movies-api", version, about, long_about = None)]
pub struct AppConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Comma-separated origins allowed to make cross-origin requests.
    #[arg(
        long,
        env = "MOVIES_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,

    /// JSON file to seed the collection from instead of the embedded dataset.
    #[arg(long, env = "MOVIES_SEED_PATH")]
    pub seed_path: Option<PathBuf>,

    /// Log output format.
    #[arg(long, env = "MOVIES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
