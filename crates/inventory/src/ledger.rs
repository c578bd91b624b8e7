//! Stock ledger: one arrival-ordered sequence, FIFO per key.
//!
//! Units are appended at the tail and extracted from the front-most match, so
//! for every key the earliest-arrived unit leaves first. Arrival order across
//! different keys carries no meaning. Lookups are linear scans; batches are
//! small and bounded.

use std::collections::VecDeque;

use stockroom_core::{StockKey, UnitId};

use crate::error::InventoryResult;
use crate::unit::StockUnit;

#[derive(Debug, Default)]
pub struct Ledger {
    units: VecDeque<StockUnit>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a unit for `key` and append it at the tail.
    pub fn receive(&mut self, key: StockKey) -> InventoryResult<UnitId> {
        let unit = StockUnit::new(key);
        let id = unit.id_typed();
        self.receive_unit(unit)?;
        Ok(id)
    }

    /// Append an existing unit at the tail.
    ///
    /// Fails only if storage cannot grow; the ledger is unchanged in that case.
    pub fn receive_unit(&mut self, unit: StockUnit) -> InventoryResult<()> {
        self.units.try_reserve(1)?;
        tracing::debug!(unit_id = %unit.id_typed(), key = %unit.key(), "unit received");
        self.units.push_back(unit);
        Ok(())
    }

    /// Make room for `additional` more units without touching the contents.
    ///
    /// After a successful call, that many `receive`s cannot fail.
    pub fn try_reserve(&mut self, additional: usize) -> InventoryResult<()> {
        self.units.try_reserve(additional)?;
        Ok(())
    }

    /// Number of units currently held for `key`.
    pub fn count_matching(&self, key: StockKey) -> usize {
        self.units.iter().filter(|u| u.matches(key)).count()
    }

    /// Remove and return the earliest-arrived unit for `key`.
    ///
    /// `None` means the key is out of stock; the ledger is not touched.
    pub fn extract_oldest(&mut self, key: StockKey) -> Option<StockUnit> {
        let position = self.units.iter().position(|u| u.matches(key))?;
        let unit = self.units.remove(position)?;
        tracing::debug!(unit_id = %unit.id_typed(), key = %key, position, "unit extracted");
        Some(unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StockUnit> {
        self.units.iter()
    }
}
