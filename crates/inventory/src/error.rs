//! Inventory error model.
//!
//! Out-of-stock and over-limit batches are normal outcomes and are reported
//! through notices, not errors. What remains here cannot be handled locally.

use std::collections::TryReserveError;

use stockroom_core::DomainError;
use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Storage could not be allocated. Batch operations reserve before they
    /// mutate, so the ledger is left as it was before the failing call.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(#[from] TryReserveError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
