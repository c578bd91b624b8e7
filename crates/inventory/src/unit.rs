use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, StockKey, UnitId};

/// One received unit of stock.
///
/// Immutable once created. A unit is not `Clone`: it is owned by exactly one
/// holder at a time (ledger, dispatch batch, assembler) and is gone once the
/// assembler has packed it.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUnit {
    id: UnitId,
    key: StockKey,
    received_at: DateTime<Utc>,
}

impl StockUnit {
    pub fn new(key: StockKey) -> Self {
        Self::with_id(UnitId::new(), key, Utc::now())
    }

    /// Build a unit with explicit identity (tests, replay).
    pub fn with_id(id: UnitId, key: StockKey, received_at: DateTime<Utc>) -> Self {
        Self {
            id,
            key,
            received_at,
        }
    }

    pub fn id_typed(&self) -> UnitId {
        self.id
    }

    pub fn key(&self) -> StockKey {
        self.key
    }

    pub fn kind(&self) -> char {
        self.key.kind()
    }

    pub fn quantity(&self) -> u32 {
        self.key.quantity()
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn matches(&self, key: StockKey) -> bool {
        self.key == key
    }
}

impl Entity for StockUnit {
    type Id = UnitId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
