//! Product Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Product Model
///
/// Read-only from the cart's perspective; carts and order details denormalize
/// a snapshot of this record but never write it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: u64,
    pub original_price: u64,
    pub image: String,
    pub images: Vec<String>,
    pub category_id: u64,
    pub stock: u32,
    pub is_new: bool,
    pub is_hot: bool,
    pub is_sale: bool,
    pub discount: f64,
    pub rating: f64,
    pub review_count: u32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
