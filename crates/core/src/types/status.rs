//! Order lifecycle status.
//!
//! Stored as a small integer code so that reordering or renaming variants
//! never changes the persisted value; serialized by name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A status code read from the store that maps to no [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown order status code: {0}")]
pub struct UnknownOrderStatus(pub i32);

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    WaitingPayment,
    Paid,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// The persisted integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::WaitingPayment => 1,
            Self::Paid => 2,
            Self::Shipped => 3,
            Self::Delivered => 4,
            Self::Canceled => 5,
        }
    }

    /// Resolve a persisted code back to a status.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOrderStatus` if `code` is not one of the five known codes.
    pub const fn from_code(code: i32) -> Result<Self, UnknownOrderStatus> {
        match code {
            1 => Ok(Self::WaitingPayment),
            2 => Ok(Self::Paid),
            3 => Ok(Self::Shipped),
            4 => Ok(Self::Delivered),
            5 => Ok(Self::Canceled),
            other => Err(UnknownOrderStatus(other)),
        }
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = UnknownOrderStatus;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}
