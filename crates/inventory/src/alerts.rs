//! Low-stock alert log: a fixed-capacity ring buffer.
//!
//! The write cursor always points at the slot receiving the *next* write. Once
//! every slot is set, each write overwrites the oldest notice. Reading walks
//! from the cursor around the ring, which yields chronological order even
//! though slots are not physically ordered by time.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, StockKey};

use crate::notice::{Notice, NoticeSink};

/// Maximum length, in characters, of an alert's text.
pub const ALERT_TEXT_MAX: usize = 19;

/// One slot of the alert log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    text: String,
    is_set: bool,
}

impl AlertRecord {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }
}

#[derive(Debug, Clone)]
pub struct AlertLog {
    slots: Box<[AlertRecord]>,
    cursor: usize,
}

impl AlertLog {
    /// Create a log with `capacity` unset slots (`capacity >= 1`).
    pub fn new(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::validation("alert log capacity must be at least 1"));
        }
        Ok(Self {
            slots: vec![AlertRecord::default(); capacity].into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Write an alert for `key` at the cursor and notify the operator.
    ///
    /// Overwrites the oldest alert once the log is full.
    pub fn record(&mut self, key: StockKey, sink: &mut dyn NoticeSink) {
        let text: String = key.to_string().chars().take(ALERT_TEXT_MAX).collect();
        let slot = self.cursor;
        let overwritten = self.slots[slot].is_set;

        self.slots[slot] = AlertRecord {
            text: text.clone(),
            is_set: true,
        };
        self.cursor = (self.cursor + 1) % self.slots.len();

        tracing::warn!(key = %key, slot, overwritten, "low stock alert recorded");
        sink.notify(Notice::LowStock { key, text });
    }

    /// Set slots, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &AlertRecord> {
        let n = self.slots.len();
        (0..n)
            .map(move |i| &self.slots[(self.cursor + i) % n])
            .filter(|r| r.is_set)
    }

    /// Texts of every live alert, oldest first.
    pub fn render(&self) -> Vec<String> {
        self.records().map(|r| r.text.clone()).collect()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of set slots (never more than `capacity`).
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|r| r.is_set).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot index the next write lands on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
