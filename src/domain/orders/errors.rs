//! Order composer errors.

use thiserror::Error;

use crate::{client::ClientError, domain::orders::status::OrderStatus};

/// Business-rule and transport failures of the order composer.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Checkout on a cart with no resolvable items; nothing was written.
    #[error("cart has no items to order")]
    EmptyCart,

    /// The target order does not exist.
    #[error("order {0} not found")]
    OrderNotFound(u64),

    /// The requested status change leaves a terminal state.
    #[error("order cannot move from {from} to {to}")]
    InvalidTransition {
        /// Current status of the order.
        from: OrderStatus,
        /// Rejected target status.
        to: OrderStatus,
    },

    /// The order was persisted but some of its line items were not.
    ///
    /// The order identity survives transient failures; callers can rebuild
    /// the line items with [`crate::domain::orders::OrderComposer::line_items`]
    /// and retry just the listed indices.
    #[error("order {order_id} was persisted with missing line items")]
    PartialOrderFailure {
        /// Id of the persisted order.
        order_id: u64,
        /// Indices into the line-item vector that failed to persist.
        failed_details: Vec<usize>,
    },

    /// The resource store rejected or never answered a call.
    #[error(transparent)]
    Client(#[from] ClientError),
}
