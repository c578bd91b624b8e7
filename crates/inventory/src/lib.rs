//! Inventory domain module.
//!
//! This crate contains the stock ledger, the low-stock alert log and the
//! receive / dispatch-and-pack pipeline, implemented as deterministic,
//! single-threaded domain logic (no IO beyond tracing events).
//!
//! Operator-facing output flows through [`NoticeSink`]; callers decide how to
//! display it.

pub mod alerts;
pub mod assembler;
pub mod config;
pub mod depot;
pub mod error;
pub mod intake;
pub mod ledger;
pub mod monitor;
pub mod notice;
pub mod unit;

pub use alerts::{ALERT_TEXT_MAX, AlertLog, AlertRecord};
pub use assembler::{OrderAssembler, ParcelLayer, ParcelReport};
pub use config::DepotConfig;
pub use depot::{Depot, DispatchOutcome};
pub use error::{InventoryError, InventoryResult};
pub use intake::parse_pairs;
pub use ledger::Ledger;
pub use monitor::ThresholdMonitor;
pub use notice::{Notice, NoticeSink};
pub use unit::StockUnit;
