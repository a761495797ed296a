use anyhow::Context;
use cafe_core::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cafe", about = "Cafe finder — plain-text lookup of cafes by city")]
struct Cli {
    /// TOML configuration file layered over the built-in defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on; overrides `server.bind`.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// JSON catalog file; overrides `catalog.path`.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    let default_filter = if cli.debug { "debug" } else { config.log.filter.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    cafe_http::run(config).await
}
