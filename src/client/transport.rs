//! Transport trait and the typed client built on top of it.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::client::{
    errors::ClientError,
    http::{ClientConfig, HttpTransport},
};

/// Raw JSON transport against the resource store.
///
/// Every call is a suspension point; there is no implicit retry and no
/// cancellation. Implementations normalize failures into [`ClientError`].
#[automock]
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    /// Fetch the resource at `path`.
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    /// Create a resource; returns the stored representation (with assigned id).
    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError>;

    /// Full replace of the resource at `path`.
    async fn put(&self, path: &str, body: Value) -> Result<Value, ClientError>;

    /// Partial update of the resource at `path`.
    async fn patch(&self, path: &str, body: Value) -> Result<Value, ClientError>;

    /// Delete the resource at `path`.
    async fn delete(&self, path: &str) -> Result<(), ClientError>;
}

/// Typed resource client.
///
/// Wraps a shared transport and handles JSON (de)serialization so business
/// logic never sees raw payloads.
#[derive(Clone)]
pub struct ResourceClient {
    transport: Arc<dyn ResourceTransport>,
}

impl std::fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient").finish_non_exhaustive()
    }
}

impl ResourceClient {
    /// Create a client over an existing transport.
    #[must_use]
    pub fn new(transport: Arc<dyn ResourceTransport>) -> Self {
        Self { transport }
    }

    /// Create a client speaking HTTP to the store named by `config`.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new(config)))
    }

    /// GET `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; fails with [`ClientError::Decode`] when
    /// the payload does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let value = self.transport.get(path).await?;

        Ok(serde_json::from_value(value)?)
    }

    /// POST `body` to `path` and decode the stored representation.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and payload decode failures.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.transport.post(path, serde_json::to_value(body)?).await?;

        Ok(serde_json::from_value(value)?)
    }

    /// PUT `body` to `path` (full replace) and decode the stored representation.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and payload decode failures.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.transport.put(path, serde_json::to_value(body)?).await?;

        Ok(serde_json::from_value(value)?)
    }

    /// PATCH `body` onto `path` and decode the stored representation.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and payload decode failures.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self
            .transport
            .patch(path, serde_json::to_value(body)?)
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    /// DELETE the resource at `path`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.transport.delete(path).await
    }
}
