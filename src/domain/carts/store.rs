//! Cart store: a single user's cart, mutated locally and persisted explicitly.

use jiff::Timestamp;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    client::ResourceClient,
    domain::{
        carts::{
            errors::CartError,
            models::{Cart, CartItem},
        },
        products::models::Product,
    },
};

/// Holds one user's cart and a dirty flag tracking divergence from the
/// persisted record.
///
/// All mutation goes through these methods; the store never issues two
/// competing writes for the same cart from its own logic, but callers must
/// serialize their own `save` calls (at most one in flight per cart).
#[derive(Debug)]
pub struct CartStore {
    client: ResourceClient,
    cart: Option<Cart>,
    dirty: bool,
}

impl CartStore {
    /// Create an empty store over the given client.
    #[must_use]
    pub fn new(client: ResourceClient) -> Self {
        Self {
            client,
            cart: None,
            dirty: false,
        }
    }

    /// The loaded cart, if any.
    #[must_use]
    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Whether in-memory state has diverged from the persisted record.
    ///
    /// While true, the hosting surface should warn before navigating away or
    /// closing; the store only exposes the signal, it enforces nothing.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Fetch the cart owned by `user_id`.
    ///
    /// The store keeps `None` when the user has no cart yet; carts are not
    /// auto-created here. Resets the dirty flag.
    ///
    /// # Errors
    ///
    /// Surfaces the client error untouched; nothing is retried.
    pub async fn load(&mut self, user_id: u64) -> Result<(), CartError> {
        let carts: Vec<Cart> = self.client.get(&format!("/carts?userId={user_id}")).await?;

        self.cart = carts.into_iter().next();
        self.dirty = false;

        debug!(user_id, found = self.cart.is_some(), "loaded cart");

        Ok(())
    }

    /// Replace the quantity of the item for `product_id`.
    ///
    /// Structurally a no-op when the product is not in the cart (caller
    /// error); the dirty flag is untouched in that case.
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::InvalidQuantity`] when `quantity` < 1 and
    /// [`CartError::NoActiveCart`] when no cart is loaded.
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        let cart = self.cart.as_mut().ok_or(CartError::NoActiveCart)?;

        if let Some(item) = cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = quantity;
            self.dirty = true;
        }

        Ok(())
    }

    /// Remove the item for `product_id`. Removing an absent item is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::NoActiveCart`] when no cart is loaded.
    pub fn remove_item(&mut self, product_id: u64) -> Result<(), CartError> {
        let cart = self.cart.as_mut().ok_or(CartError::NoActiveCart)?;

        cart.items.retain(|item| item.product_id != product_id);
        self.dirty = true;

        Ok(())
    }

    /// Add `product` to the cart with quantity 1 and persist immediately.
    ///
    /// Unlike the other mutators this one is eagerly saved, so the dirty flag
    /// is cleared on success. On failure the in-memory cart is untouched and
    /// still matches the persisted record.
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::DuplicateItem`] when the product is already in
    /// the cart (informational; quantities are never auto-merged, the cart is
    /// unchanged) and [`CartError::NoActiveCart`] when no cart is loaded.
    pub async fn add_item(&mut self, product: Product) -> Result<(), CartError> {
        let cart = self.cart.as_ref().ok_or(CartError::NoActiveCart)?;

        if cart.items.iter().any(|item| item.product_id == product.id) {
            return Err(CartError::DuplicateItem);
        }

        let product_id = product.id;
        let mut candidate = cart.clone();

        candidate.items.push(CartItem {
            product_id,
            product: Some(product),
            quantity: 1,
        });
        candidate.total_price = candidate.computed_total();
        candidate.updated_at = Timestamp::now();

        let path = format!("/carts/{}", candidate.id);
        let cart_id = candidate.id;

        self.client.patch::<Value, Cart>(&path, &candidate).await?;

        self.cart = Some(candidate);
        self.dirty = false;

        info!(cart_id, product_id, "added item to cart");

        Ok(())
    }

    /// Empty the cart and zero its total. Not persisted until [`Self::save`].
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::NoActiveCart`] when no cart is loaded.
    pub fn clear(&mut self) -> Result<(), CartError> {
        let cart = self.cart.as_mut().ok_or(CartError::NoActiveCart)?;

        cart.items.clear();
        cart.total_price = 0;
        self.dirty = true;

        Ok(())
    }

    /// Persist the cart as a full replace.
    ///
    /// The total is recomputed from current items immediately before sending,
    /// excluding items whose product reference failed to resolve. Clears the
    /// dirty flag on success.
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::NoActiveCart`] when no cart is loaded;
    /// surfaces client errors untouched. On failure the in-memory cart keeps
    /// its pre-save total and timestamp and the dirty flag stays set.
    pub async fn save(&mut self) -> Result<(), CartError> {
        let cart = self.cart.as_ref().ok_or(CartError::NoActiveCart)?;

        let mut candidate = cart.clone();

        candidate.total_price = candidate.computed_total();
        candidate.updated_at = Timestamp::now();

        let path = format!("/carts/{}", candidate.id);
        let cart_id = candidate.id;
        let total_price = candidate.total_price;

        self.client.put::<Value, Cart>(&path, &candidate).await?;

        self.cart = Some(candidate);
        self.dirty = false;

        info!(cart_id, total_price, "saved cart");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        client::{ClientError, MockResourceTransport, ResourceClient},
        test::{cart, cart_item, product},
    };

    use super::*;

    fn expect_load(transport: &mut MockResourceTransport, user_id: u64, carts: Vec<Cart>) {
        let carts = serde_json::to_value(carts).expect("carts should serialize");
        let path = format!("/carts?userId={user_id}");

        transport
            .expect_get()
            .withf(move |p| p == path)
            .returning(move |_| Ok(carts.clone()));
    }

    async fn loaded_store(transport: MockResourceTransport, user_id: u64) -> CartStore {
        let mut store = CartStore::new(ResourceClient::new(Arc::new(transport)));

        store.load(user_id).await.expect("load should succeed");

        store
    }

    #[tokio::test]
    async fn load_keeps_first_matching_cart() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100, 1)])]);

        let store = loaded_store(transport, 2).await;
        let loaded = store.cart().expect("expected a cart");

        assert_eq!(loaded.id, 1);
        assert_eq!(loaded.user_id, 2);
        assert!(!store.is_dirty());

        Ok(())
    }

    #[tokio::test]
    async fn load_without_a_cart_leaves_none() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 5, vec![]);

        let store = loaded_store(transport, 5).await;

        assert!(store.cart().is_none());

        Ok(())
    }

    #[tokio::test]
    async fn save_without_a_cart_fails_with_no_active_cart() {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 5, vec![]);

        let mut store = loaded_store(transport, 5).await;
        let result = store.save().await;

        assert!(
            matches!(result, Err(CartError::NoActiveCart)),
            "expected NoActiveCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn set_quantity_below_one_is_rejected() {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100, 1)])]);

        let mut store = loaded_store(transport, 2).await;
        let result = store.set_quantity(10, 0);

        assert!(
            matches!(result, Err(CartError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );
        assert!(!store.is_dirty(), "rejected mutation must not mark dirty");
    }

    #[tokio::test]
    async fn mutators_mark_the_store_dirty_until_save() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(
            &mut transport,
            2,
            vec![cart(1, 2, vec![cart_item(10, 100_000, 2), cart_item(11, 50_000, 1)])],
        );
        transport
            .expect_put()
            .returning(|_, body| Ok(body));

        let mut store = loaded_store(transport, 2).await;

        store.set_quantity(10, 3)?;
        assert!(store.is_dirty());

        store.remove_item(11)?;
        assert!(store.is_dirty());

        store.clear()?;
        assert!(store.is_dirty());

        store.save().await?;
        assert!(!store.is_dirty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_absent_item_is_idempotent() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100, 1)])]);

        let mut store = loaded_store(transport, 2).await;

        store.remove_item(99)?;
        store.remove_item(99)?;

        assert_eq!(store.cart().expect("expected a cart").items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_rejects_duplicates_without_changing_the_cart() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100, 2)])]);

        let mut store = loaded_store(transport, 2).await;
        let result = store.add_item(product(10, 100)).await;

        assert!(
            matches!(result, Err(CartError::DuplicateItem)),
            "expected DuplicateItem, got {result:?}"
        );

        let cart = store.cart().expect("expected a cart");

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2, "quantities are never merged");

        Ok(())
    }

    #[tokio::test]
    async fn add_item_persists_eagerly_and_stays_clean() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100_000, 2)])]);
        transport
            .expect_patch()
            .withf(|path, body| {
                path == "/carts/1"
                    && body["totalPrice"] == json!(250_000)
                    && body["items"].as_array().is_some_and(|items| items.len() == 2)
            })
            .returning(|_, body| Ok(body));

        let mut store = loaded_store(transport, 2).await;

        store.add_item(product(11, 50_000)).await?;

        assert!(!store.is_dirty(), "eager add is already synced");

        let cart = store.cart().expect("expected a cart");

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[1].quantity, 1);
        assert_eq!(cart.total_price, 250_000);

        Ok(())
    }

    #[tokio::test]
    async fn failed_eager_add_leaves_the_cart_unchanged() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100_000, 2)])]);
        transport.expect_patch().returning(|_, _| {
            Err(ClientError::Api {
                status: 500,
                payload: serde_json::Value::Null,
            })
        });

        let mut store = loaded_store(transport, 2).await;
        let result = store.add_item(product(11, 50_000)).await;

        assert!(
            matches!(result, Err(CartError::Client(ClientError::Api { status: 500, .. }))),
            "expected Api 500, got {result:?}"
        );

        let cart = store.cart().expect("expected a cart");

        assert_eq!(cart.items.len(), 1, "rejected item must not be kept locally");
        assert_eq!(cart.total_price, 200_000);
        assert!(!store.is_dirty(), "cart still matches the persisted record");

        Ok(())
    }

    #[tokio::test]
    async fn save_sends_total_over_resolvable_items_only() -> TestResult {
        let mut transport = MockResourceTransport::new();

        let mut seeded = cart(1, 2, vec![cart_item(10, 100_000, 2), cart_item(11, 50_000, 1)]);
        seeded.items[1].product = None;

        expect_load(&mut transport, 2, vec![seeded]);
        transport
            .expect_put()
            .withf(|path, body| {
                path == "/carts/1"
                    && body["totalPrice"] == json!(200_000)
                    && body["items"].as_array().is_some_and(|items| items.len() == 2)
            })
            .returning(|_, body| Ok(body));

        let mut store = loaded_store(transport, 2).await;

        store.set_quantity(10, 2)?;
        store.save().await?;

        assert!(!store.is_dirty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_save_leaves_the_store_dirty() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100, 1)])]);
        transport.expect_put().returning(|_, _| {
            Err(ClientError::Api {
                status: 500,
                payload: serde_json::Value::Null,
            })
        });

        let mut store = loaded_store(transport, 2).await;

        store.set_quantity(10, 4)?;

        let result = store.save().await;

        assert!(
            matches!(result, Err(CartError::Client(ClientError::Api { status: 500, .. }))),
            "expected Api 500, got {result:?}"
        );
        assert!(store.is_dirty(), "failed save must keep the dirty flag");
        assert_eq!(
            store.cart().expect("expected a cart").updated_at,
            Timestamp::UNIX_EPOCH,
            "failed save must not advance the local timestamp"
        );

        Ok(())
    }

    #[tokio::test]
    async fn clear_then_save_sends_an_empty_cart() -> TestResult {
        let mut transport = MockResourceTransport::new();

        expect_load(&mut transport, 2, vec![cart(1, 2, vec![cart_item(10, 100_000, 2)])]);
        transport
            .expect_put()
            .withf(|path, body| {
                path == "/carts/1"
                    && body["totalPrice"] == json!(0)
                    && body["items"].as_array().is_some_and(Vec::is_empty)
            })
            .returning(|_, body| Ok(body));

        let mut store = loaded_store(transport, 2).await;

        store.clear()?;
        store.save().await?;

        Ok(())
    }
}
