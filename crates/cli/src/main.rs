use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ordertrack_cli::Shell;
use ordertrack_infra::{OrderManager, StoreConfig};

#[derive(Parser)]
#[command(name = "ordertrack")]
#[command(about = "Track pending and fulfilled orders in two JSON files", long_about = None)]
struct Cli {
    /// Pending-orders file (overrides ORDERTRACK_PENDING_FILE; default orders.json)
    #[arg(long)]
    pending: Option<PathBuf>,

    /// Fulfilled-orders file (overrides ORDERTRACK_FULFILLED_FILE; default output_orders.json)
    #[arg(long)]
    fulfilled: Option<PathBuf>,
}

fn main() -> Result<()> {
    ordertrack_observability::init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env().with_overrides(cli.pending, cli.fulfilled);
    tracing::info!(
        pending = %config.pending_path.display(),
        fulfilled = %config.fulfilled_path.display(),
        "starting order shell"
    );

    let manager = OrderManager::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    Shell::new(&manager, stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")
}
