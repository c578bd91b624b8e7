//! `stockroom`: interactive stock receive / parcel shell.

mod session;
mod sink;

use std::io;

use anyhow::Context;
use clap::Parser;
use stockroom_inventory::{Depot, DepotConfig};

use crate::session::Session;
use crate::sink::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Perishable stock: receive, parcel, alerts")]
struct Args {
    /// Number of alert slots kept (oldest overwritten first).
    #[arg(long)]
    alert_capacity: Option<usize>,

    /// Alert when a key's stock drops below this after a dispatch.
    #[arg(long)]
    min_stock: Option<usize>,

    /// Maximum units packed into one parcel.
    #[arg(long)]
    max_batch: Option<usize>,

    /// Start with an empty ledger instead of the demo stock.
    #[arg(long)]
    no_demo: bool,

    /// Notice output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    /// Flags win over `base` (normally the environment-derived config).
    fn depot_config(&self, base: DepotConfig) -> DepotConfig {
        let mut config = base;
        if let Some(capacity) = self.alert_capacity {
            config = config.with_alert_capacity(capacity);
        }
        if let Some(min_stock) = self.min_stock {
            config = config.with_min_stock(min_stock);
        }
        if let Some(max) = self.max_batch {
            config = config.with_max_batch(max);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();
    let args = Args::parse();

    let config = args.depot_config(DepotConfig::from_env());
    let depot = Depot::new(config).context("invalid depot configuration")?;
    tracing::info!(?config, "depot ready");

    let stdin = io::stdin();
    let mut session = Session::new(depot, stdin.lock(), io::stdout(), args.format);
    if !args.no_demo {
        session.seed_demo()?;
    }
    session.run()?;

    tracing::info!(stock = session.depot().ledger().len(), "session closed");
    Ok(())
}
