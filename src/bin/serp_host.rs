//! Search endpoint host binary.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use serp::HostConfig;
use tracing_subscriber::EnvFilter;

/// Serve ranked search results as JSON.
#[derive(Parser)]
#[command(name = "serp-host", version, about)]
struct Cli {
    /// Path to TOML configuration file. Defaults to
    /// `$XDG_CONFIG_HOME/serp/config.toml` when that file exists.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file.
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to bind, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("serp=info,serp_extract=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => HostConfig::from_file(path)?,
        None => {
            let path = HostConfig::default_config_path();
            if path.is_file() {
                tracing::info!(path = %path.display(), "loading config");
                HostConfig::from_file(&path)?
            } else {
                HostConfig::default()
            }
        }
    };
    if let Some(host) = cli.host {
        config.server.host = host.to_string();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    serp::run_server(config).await.map_err(|e| {
        tracing::error!(error = %e, "serp-host exited with error");
        anyhow::anyhow!("serp-host failed: {e}")
    })
}
