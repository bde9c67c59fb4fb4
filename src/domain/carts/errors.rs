//! Cart store errors.

use thiserror::Error;

use crate::client::ClientError;

/// Business-rule and transport failures of the cart store.
#[derive(Debug, Error)]
pub enum CartError {
    /// Quantities start at 1; zero is a removal, which has its own operation.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The product is already in the cart; quantities are never auto-merged.
    /// Informational: the cart is unchanged and remains valid.
    #[error("product is already in the cart")]
    DuplicateItem,

    /// No cart is loaded for the acting user.
    #[error("no active cart for this user")]
    NoActiveCart,

    /// The resource store rejected or never answered a call.
    #[error(transparent)]
    Client(#[from] ClientError),
}
