//! App Context

use std::{fmt, sync::Arc};

use crate::{
    client::{ClientConfig, ResourceClient},
    domain::{
        carts::CartStore,
        orders::OrderComposer,
        products::ProductCatalog,
        users::UserSession,
    },
};

/// Wires the resource client and identity contract into the storefront
/// services. One context per signed-in surface; stores built from it are
/// independent, which is also what keeps them testable in isolation.
#[derive(Clone)]
pub struct AppContext {
    pub client: ResourceClient,
    pub session: Arc<dyn UserSession>,
}

impl AppContext {
    /// Build a context speaking HTTP to the store named by `config`.
    #[must_use]
    pub fn new(config: ClientConfig, session: Arc<dyn UserSession>) -> Self {
        Self {
            client: ResourceClient::from_config(config),
            session,
        }
    }

    /// Build a context over an existing client, e.g. one with a fake
    /// transport in tests.
    #[must_use]
    pub fn with_client(client: ResourceClient, session: Arc<dyn UserSession>) -> Self {
        Self { client, session }
    }

    /// A fresh, unloaded cart store.
    #[must_use]
    pub fn cart_store(&self) -> CartStore {
        CartStore::new(self.client.clone())
    }

    /// The order composer.
    #[must_use]
    pub fn orders(&self) -> OrderComposer {
        OrderComposer::new(self.client.clone())
    }

    /// Read access to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.client.clone())
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
