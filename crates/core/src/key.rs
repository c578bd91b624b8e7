//! Stock key: the `(kind, quantity)` pair identifying interchangeable units.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Key of a class of interchangeable stock units.
///
/// - `kind` is a single symbol, normalised to ASCII uppercase.
/// - `quantity` is the unit volume and is always strictly positive.
///
/// Construct through [`StockKey::new`]; the fields are private so an invalid
/// key cannot exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockKey {
    kind: char,
    quantity: u32,
}

impl StockKey {
    /// Validate and normalise a raw `(kind, quantity)` pair.
    pub fn new(kind: char, quantity: i64) -> DomainResult<Self> {
        if kind.is_whitespace() || kind.is_control() || kind == ',' {
            return Err(DomainError::validation(format!(
                "kind must be a visible symbol (got {kind:?})"
            )));
        }
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive (got {quantity})"
            )));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation(format!("quantity out of range (got {quantity})")))?;

        Ok(Self {
            kind: kind.to_ascii_uppercase(),
            quantity,
        })
    }

    pub fn kind(&self) -> char {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl ValueObject for StockKey {}

impl core::fmt::Display for StockKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.kind, self.quantity)
    }
}

impl TryFrom<(char, i64)> for StockKey {
    type Error = DomainError;

    fn try_from((kind, quantity): (char, i64)) -> Result<Self, Self::Error> {
        Self::new(kind, quantity)
    }
}
