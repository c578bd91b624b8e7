//! Operator-facing notices.
//!
//! Every non-silent outcome is reported at the point where it happens, one
//! notice at a time, through a [`NoticeSink`]. The sink decides presentation
//! (stdout line, JSON, recorded for tests).

use serde::{Deserialize, Serialize};

use stockroom_core::StockKey;

use crate::assembler::ParcelLayer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// An alert was written to the alert log.
    LowStock { key: StockKey, text: String },
    /// A dispatch request found no matching unit.
    Backorder { key: StockKey },
    /// A dispatch batch hit the parcel limit; `rejected` and every later pair
    /// were not processed.
    BatchTruncated { limit: usize, rejected: StockKey },
    /// A bulk receive finished.
    Received { count: usize },
    /// A non-empty parcel is about to be listed, top first.
    ParcelOpened,
    /// One packed unit; `depth` 1 is the top of the parcel.
    ParcelLayer(ParcelLayer),
    /// Closing marker after the bottom (largest) unit.
    ParcelSealed { layers: usize },
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::LowStock { text, .. } => write!(f, ">> ALARM: low stock {text}"),
            Notice::Backorder { key } => write!(f, "!! OUT OF STOCK !! {key} -> backorder."),
            Notice::BatchTruncated { limit, rejected } => write!(
                f,
                "!! parcel limit of {limit} reached; {rejected} and later items ignored."
            ),
            Notice::Received { count } => write!(f, "Success: {count} unit(s) received."),
            Notice::ParcelOpened => f.write_str("--- PARCEL (top -> bottom) ---"),
            Notice::ParcelLayer(layer) => write!(
                f,
                "| {:>2}: type {} | vol {} |",
                layer.depth,
                layer.key.kind(),
                layer.key.quantity()
            ),
            Notice::ParcelSealed { .. } => f.write_str("| bottom ---------------------|"),
        }
    }
}

/// Destination for notices.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Recording sink.
impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
