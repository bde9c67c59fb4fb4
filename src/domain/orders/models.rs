//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::{orders::status::OrderStatus, products::models::Product};

/// Order Model
///
/// Immutable once placed, except for `status` and `updated_at`. Never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub address_id: u64,
    pub status: OrderStatus,
    pub store: String,
    pub total_price: u64,
    pub subtotal: u64,
    pub total_item: u32,
    pub shipping_fee: u64,
    pub discount: f64,
    pub payment_method: String,
    pub order_date: Timestamp,
    pub updated_at: Timestamp,
}

/// New Order Data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: u64,
    pub address_id: u64,
    pub status: OrderStatus,
    pub store: String,
    pub total_price: u64,
    pub subtotal: u64,
    pub total_item: u32,
    pub shipping_fee: u64,
    pub discount: f64,
    pub payment_method: String,
    pub order_date: Timestamp,
    pub updated_at: Timestamp,
}

/// OrderDetail Model
///
/// One captured line item of an order. `price` is the unit price at order
/// time and is never re-derived from the live product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub product: Option<Product>,
    pub quantity: u32,
    pub price: u64,
    pub total: u64,
}

/// New OrderDetail Data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderDetail {
    pub order_id: u64,
    pub product_id: u64,
    pub product: Option<Product>,
    pub quantity: u32,
    pub price: u64,
    pub total: u64,
}
