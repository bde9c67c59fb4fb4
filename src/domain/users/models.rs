//! User Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// User Role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

/// User Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User Model
///
/// Owner of carts and orders. Admin CRUD over users is an external surface;
/// this crate only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub avatar: String,
    pub role: UserRole,
    pub status: UserStatus,
}

/// Address Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: u64,
    pub user_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Application envelope returned by the auth-guarded endpoints.
///
/// Most endpoints return bare payloads; the handful that wrap them use this
/// shape, and callers unwrap `data` via [`ApiEnvelope::into_data`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}
