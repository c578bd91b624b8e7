//! Order assembler: sort, stack and release a dispatched batch.
//!
//! The batch is sorted by quantity, largest first (stable, so equal
//! quantities keep extraction order), then listed from the smallest unit to
//! the largest. The largest unit ends up at the bottom of the parcel. Each
//! unit is dropped as soon as its layer has been reported.

use serde::{Deserialize, Serialize};

use stockroom_core::{StockKey, UnitId};

use crate::notice::{Notice, NoticeSink};
use crate::unit::StockUnit;

/// One packed unit, as listed in the parcel report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelLayer {
    /// 1 is the top of the parcel.
    pub depth: usize,
    pub key: StockKey,
    pub unit_id: UnitId,
}

/// Record of a packed parcel, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelReport {
    layers: Vec<ParcelLayer>,
}

impl ParcelReport {
    pub fn layers(&self) -> &[ParcelLayer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Quantities, top to bottom.
    pub fn quantities(&self) -> Vec<u32> {
        self.layers.iter().map(|l| l.key.quantity()).collect()
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct OrderAssembler;

impl OrderAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Pack `units`, consuming them. An empty batch is a no-op.
    pub fn assemble(&self, mut units: Vec<StockUnit>, sink: &mut dyn NoticeSink) -> ParcelReport {
        if units.is_empty() {
            return ParcelReport::default();
        }

        units.sort_by(|a, b| b.quantity().cmp(&a.quantity()));

        sink.notify(Notice::ParcelOpened);
        let mut layers = Vec::with_capacity(units.len());
        for (i, unit) in units.into_iter().rev().enumerate() {
            let layer = ParcelLayer {
                depth: i + 1,
                key: unit.key(),
                unit_id: unit.id_typed(),
            };
            sink.notify(Notice::ParcelLayer(layer.clone()));
            layers.push(layer);
        }
        sink.notify(Notice::ParcelSealed {
            layers: layers.len(),
        });

        tracing::info!(layers = layers.len(), "parcel assembled");
        ParcelReport { layers }
    }
}
