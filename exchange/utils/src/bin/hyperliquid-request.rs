use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::{load_config, load_env_recursively, setup_logs, LogLevel};
use hyperliquid_exchange::model::exchange::request::HyperliquidChain;
use hyperliquid_utils::leverage::{update_leverage, UpdateLeverageArgs};
use hyperliquid_utils::{RequestConfig, SERVICE_NAME};
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// The path to config file
    #[clap(long, value_name = "FILE", env = "CONFIG", global = true)]
    config: Option<PathBuf>,
    #[clap(long, global = true)]
    network: Option<HyperliquidChain>,
    #[clap(long, global = true)]
    log_level: Option<LogLevel>,
    #[clap(long, env = "HYPERLIQUID_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    UpdateLeverage(UpdateLeverageArgs),
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    load_env_recursively()?;

    let cli = Cli::parse();
    let mut config: RequestConfig = match &cli.config {
        Some(path) => load_config(path, SERVICE_NAME)?,
        None => RequestConfig::default(),
    };
    if let Some(network) = cli.network {
        config.hyperliquid.network = network;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    setup_logs(config.log_level)?;

    let result = match cli.command {
        Command::UpdateLeverage(args) => update_leverage(args, &config.hyperliquid, &cli.private_key).await,
    };
    if let Err(err) = result {
        error!("{:?}", err);
        std::process::exit(1);
    }
    Ok(())
}
