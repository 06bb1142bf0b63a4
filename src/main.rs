//! api-forward
//!
//! Relays HTTP requests to a fixed upstream (by default `https://api.openai.com`).
//!
//! ```text
//!     Client Request                                   ┌──────────────┐
//!     ─────────▶ listener ─▶ axum router ─▶ Forwarder ─▶│   upstream   │
//!                                              │        │ (base_url)   │
//!     Client Response                          │        └──────┬───────┘
//!     ◀──────────────── status/headers/body ◀──┴───────────────┘
//!                        (or 500 + error chain)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use api_forward::config::{loader::read_config, validate_config, ConfigError, ForwardConfig};
use api_forward::observability::init_logging;
use api_forward::{HttpServer, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "api-forward")]
#[command(version, about = "Forward HTTP requests to a fixed upstream host", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream origin, overrides `upstream.base_url`.
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter, overrides `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn load(&self) -> Result<ForwardConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ForwardConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.upstream.base_url = base_url.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load()?;

    init_logging(&config.observability);

    tracing::info!("api-forward v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
