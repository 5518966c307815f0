use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use imovel_manager::view::shell;
use imovel_manager::{load_config, Config, HttpPropertyApi, ViewController};
use tokio::io::BufReader;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imovel-manager")]
#[command(about = "Manage imóveis and their cômodos through the imóvel API")]
#[command(version)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level, used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the page
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {:?}", path);
            load_config(path)?
        }
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    info!("🏠 Imóvel Manager - {}", config.api.base_url);

    let api = HttpPropertyApi::with_settings(&config.api)?;
    let mut controller = ViewController::mount(Arc::new(api)).await;

    let stdin = BufReader::new(tokio::io::stdin());
    shell::run(&mut controller, stdin, tokio::io::stdout()).await?;

    Ok(())
}
