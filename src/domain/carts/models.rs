//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::products::models::Product;

/// Cart Model
///
/// One active cart per user. `total_price` is derived; [`Cart::computed_total`]
/// is the single source of that derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: u64,
    pub user_id: u64,
    pub items: Vec<CartItem>,
    pub total_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CartItem Model
///
/// `product` is a denormalized snapshot; `None` marks a reference that failed
/// to resolve and is excluded from totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: u64,
    pub product: Option<Product>,
    pub quantity: u32,
}

impl CartItem {
    /// Line total, when the product reference resolved.
    #[must_use]
    pub fn line_total(&self) -> Option<u64> {
        self.product
            .as_ref()
            .map(|product| product.price * u64::from(self.quantity))
    }
}

impl Cart {
    /// Σ quantity × price over items with a resolved product.
    #[must_use]
    pub fn computed_total(&self) -> u64 {
        self.items.iter().filter_map(CartItem::line_total).sum()
    }

    /// Number of items whose product reference failed to resolve.
    #[must_use]
    pub fn unresolved_items(&self) -> usize {
        self.items.iter().filter(|item| item.product.is_none()).count()
    }
}
