//! Order composer: checkout, status transitions and lookups.

use jiff::Timestamp;
use serde_json::json;
use tracing::{Span, debug, info, warn};

use crate::{
    client::ResourceClient,
    domain::{
        carts::models::Cart,
        orders::{
            errors::OrderError,
            models::{NewOrder, NewOrderDetail, Order, OrderDetail},
            status::OrderStatus,
        },
    },
};

/// Checkout parameters supplied by the ordering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub address_id: u64,
    pub payment_method: String,
    /// Flat shipping fee in currency units.
    pub shipping_fee: u64,
    /// Fractional discount in `0.0..=1.0`, applied to the subtotal.
    pub discount: f64,
    /// Fulfilling store name, recorded on the order.
    pub store: String,
}

/// Converts cart snapshots into persisted orders and drives order status.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    client: ResourceClient,
}

impl OrderComposer {
    /// Create a composer over the given client.
    #[must_use]
    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }

    /// Persist an order for the cart snapshot, then one detail per line item.
    ///
    /// Items whose product reference failed to resolve are skipped with a
    /// warning and excluded from subtotal, item count and the written
    /// details. The detail writes are independent; when some fail after the
    /// order write succeeded, the order stays persisted and
    /// [`OrderError::PartialOrderFailure`] reports the failed indices so the
    /// caller can retry just those (rebuild them with [`Self::line_items`]).
    ///
    /// Clearing the cart afterwards is the caller's decision, not this
    /// component's.
    ///
    /// # Errors
    ///
    /// Fails with [`OrderError::EmptyCart`] before any write when the cart
    /// has no resolvable items (empty, or every product reference failed to
    /// resolve); surfaces client errors from the order write untouched.
    #[tracing::instrument(
        name = "orders.place_order",
        skip(self, cart, checkout),
        fields(
            cart_id = cart.id,
            user_id = cart.user_id,
            order_id = tracing::field::Empty
        ),
        err
    )]
    pub async fn place_order(&self, cart: &Cart, checkout: Checkout) -> Result<Order, OrderError> {
        // Covers the empty cart too; an all-unresolved cart would persist an
        // unfulfillable order with no details.
        if cart.items.iter().all(|item| item.product.is_none()) {
            return Err(OrderError::EmptyCart);
        }

        let unresolved = cart.unresolved_items();

        if unresolved > 0 {
            warn!(unresolved, "skipping cart items with unresolved products");
        }

        let subtotal = cart.computed_total();
        let total_item = cart
            .items
            .iter()
            .filter(|item| item.product.is_some())
            .map(|item| item.quantity)
            .sum();
        let total_price = subtotal - discount_amount(subtotal, checkout.discount)
            + checkout.shipping_fee;
        let now = Timestamp::now();

        let new_order = NewOrder {
            user_id: cart.user_id,
            address_id: checkout.address_id,
            status: OrderStatus::INITIAL,
            store: checkout.store,
            total_price,
            subtotal,
            total_item,
            shipping_fee: checkout.shipping_fee,
            discount: checkout.discount,
            payment_method: checkout.payment_method,
            order_date: now,
            updated_at: now,
        };

        let order: Order = self.client.post("/orders", &new_order).await?;

        Span::current().record("order_id", tracing::field::display(order.id));

        let details = Self::line_items(cart, order.id);
        let mut failed_details = Vec::new();

        for (index, detail) in details.iter().enumerate() {
            if let Err(error) = self.write_detail(detail).await {
                warn!(index, %error, "failed to persist order line item");
                failed_details.push(index);
            }
        }

        if !failed_details.is_empty() {
            return Err(OrderError::PartialOrderFailure {
                order_id: order.id,
                failed_details,
            });
        }

        info!(total_price, total_item, "placed order");

        Ok(order)
    }

    /// The detail rows [`Self::place_order`] writes for `cart`, price-locked
    /// to the products' current prices. Unresolved items produce no row.
    #[must_use]
    pub fn line_items(cart: &Cart, order_id: u64) -> Vec<NewOrderDetail> {
        cart.items
            .iter()
            .filter_map(|item| {
                let product = item.product.as_ref()?;

                Some(NewOrderDetail {
                    order_id,
                    product_id: item.product_id,
                    product: Some(product.clone()),
                    quantity: item.quantity,
                    price: product.price,
                    total: product.price * u64::from(item.quantity),
                })
            })
            .collect()
    }

    /// Persist a single order detail. Used by the partial-failure retry flow.
    ///
    /// # Errors
    ///
    /// Surfaces client errors untouched.
    pub async fn write_detail(&self, detail: &NewOrderDetail) -> Result<OrderDetail, OrderError> {
        Ok(self.client.post("/orderDetails", detail).await?)
    }

    /// Look up a single order.
    ///
    /// # Errors
    ///
    /// Fails with [`OrderError::OrderNotFound`] when the id matches nothing.
    pub async fn order(&self, order_id: u64) -> Result<Order, OrderError> {
        let orders: Vec<Order> = self.client.get(&format!("/orders?id={order_id}")).await?;

        orders
            .into_iter()
            .next()
            .ok_or(OrderError::OrderNotFound(order_id))
    }

    /// All orders placed by `user_id`, newest-first not guaranteed.
    ///
    /// # Errors
    ///
    /// Surfaces client errors untouched.
    pub async fn orders_for_user(&self, user_id: u64) -> Result<Vec<Order>, OrderError> {
        Ok(self.client.get(&format!("/orders?userId={user_id}")).await?)
    }

    /// The captured line items of an order.
    ///
    /// # Errors
    ///
    /// Surfaces client errors untouched.
    pub async fn details_for_order(&self, order_id: u64) -> Result<Vec<OrderDetail>, OrderError> {
        Ok(self
            .client
            .get(&format!("/orderDetails?orderId={order_id}"))
            .await?)
    }

    /// Cancel an order. Idempotent: cancelling an already-cancelled order
    /// succeeds without a write.
    ///
    /// # Errors
    ///
    /// Fails with [`OrderError::OrderNotFound`] for an unknown id and
    /// [`OrderError::InvalidTransition`] when the order is completed.
    pub async fn cancel_order(&self, order_id: u64) -> Result<(), OrderError> {
        self.update_status(order_id, OrderStatus::Cancelled).await?;

        Ok(())
    }

    /// Move an order to `new_status` via a targeted partial update.
    ///
    /// Only transitions out of a terminal state are rejected; backwards moves
    /// are deliberate (dispatchers correct mistakes). Re-asserting the
    /// current status succeeds without a write.
    ///
    /// # Errors
    ///
    /// Fails with [`OrderError::OrderNotFound`] for an unknown id and
    /// [`OrderError::InvalidTransition`] for a move out of a terminal state.
    #[tracing::instrument(
        name = "orders.update_status",
        skip_all,
        fields(order_id, status = %new_status),
        err
    )]
    pub async fn update_status(
        &self,
        order_id: u64,
        new_status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self.order(order_id).await?;

        if !order.status.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }

        if order.status == new_status {
            debug!("status already current, nothing to write");

            return Ok(order);
        }

        let body = json!({ "status": new_status, "updatedAt": Timestamp::now() });
        let updated: Order = self
            .client
            .patch(&format!("/orders/{order_id}"), &body)
            .await?;

        info!(from = %order.status, "updated order status");

        Ok(updated)
    }
}

/// Discount applied to the subtotal, rounded to whole currency units.
fn discount_amount(subtotal: u64, discount: f64) -> u64 {
    // Subtotals stay far below 2^53, so the f64 round trip is exact.
    (subtotal as f64 * discount.clamp(0.0, 1.0)).round() as u64
}
