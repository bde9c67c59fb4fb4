//! Orders

pub mod composer;
pub mod errors;
pub mod models;
pub mod status;

pub use composer::{Checkout, OrderComposer};
pub use errors::OrderError;
pub use models::{NewOrder, NewOrderDetail, Order, OrderDetail};
pub use status::OrderStatus;
