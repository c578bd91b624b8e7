//! Threshold monitor: post-extraction low-stock policy.

use stockroom_core::StockKey;

use crate::alerts::AlertLog;
use crate::ledger::Ledger;
use crate::notice::NoticeSink;

/// Alerts when a key's remaining stock falls strictly below `min_stock`.
///
/// Owns no data; it reads the ledger and writes the alert log.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThresholdMonitor {
    min_stock: usize,
}

impl ThresholdMonitor {
    pub fn new(min_stock: usize) -> Self {
        Self { min_stock }
    }

    pub fn min_stock(&self) -> usize {
        self.min_stock
    }

    /// Run after a successful extraction of `key`, against the ledger's
    /// post-extraction state. Returns `true` if an alert was recorded.
    pub fn check_after_extraction(
        &self,
        ledger: &Ledger,
        alerts: &mut AlertLog,
        key: StockKey,
        sink: &mut dyn NoticeSink,
    ) -> bool {
        let remaining = ledger.count_matching(key);
        if remaining >= self.min_stock {
            return false;
        }
        tracing::debug!(key = %key, remaining, min_stock = self.min_stock, "below threshold");
        alerts.record(key, sink);
        true
    }
}

impl Default for ThresholdMonitor {
    fn default() -> Self {
        Self::new(2)
    }
}
