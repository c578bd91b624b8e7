//! Depot configuration.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

pub const ALERT_CAPACITY_ENV: &str = "STOCKROOM_ALERT_CAPACITY";
pub const MIN_STOCK_ENV: &str = "STOCKROOM_MIN_STOCK";
pub const MAX_BATCH_ENV: &str = "STOCKROOM_MAX_BATCH";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotConfig {
    /// Number of slots in the alert ring buffer
    pub alert_capacity: usize,
    /// Alert when stock for a key drops strictly below this after a dispatch
    pub min_stock: usize,
    /// Maximum units packed into one parcel
    pub max_batch: usize,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            alert_capacity: 3,
            min_stock: 2,
            max_batch: 50,
        }
    }
}

impl DepotConfig {
    /// Defaults overridden by `STOCKROOM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns per variable name.
    ///
    /// Unparsable values keep the default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            alert_capacity: read_usize(&lookup, ALERT_CAPACITY_ENV, defaults.alert_capacity),
            min_stock: read_usize(&lookup, MIN_STOCK_ENV, defaults.min_stock),
            max_batch: read_usize(&lookup, MAX_BATCH_ENV, defaults.max_batch),
        }
    }

    pub fn with_alert_capacity(mut self, capacity: usize) -> Self {
        self.alert_capacity = capacity;
        self
    }

    pub fn with_min_stock(mut self, min_stock: usize) -> Self {
        self.min_stock = min_stock;
        self
    }

    pub fn with_max_batch(mut self, max: usize) -> Self {
        self.max_batch = max;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.alert_capacity == 0 {
            return Err(DomainError::validation("alert_capacity must be at least 1"));
        }
        if self.max_batch == 0 {
            return Err(DomainError::validation("max_batch must be at least 1"));
        }
        Ok(())
    }
}

fn read_usize(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: usize) -> usize {
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, default, "ignoring unparsable setting");
            default
        }),
    }
}
