//! Catalogue product, as referenced by order items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product line an order item refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current catalogue price. Order items keep their own price snapshot.
    pub price: Decimal,
    pub img_url: String,
}
