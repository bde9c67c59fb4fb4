//! HTTP transport backed by `reqwest`.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::client::{errors::ClientError, transport::ResourceTransport};

/// Side effect invoked when an auth-guarded call comes back 401.
///
/// Owned by the host application; typically navigates to the login surface.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Configuration for connecting to the resource store.
#[derive(Clone)]
pub struct ClientConfig {
    /// Store base URL, e.g. `"http://localhost:3001"`. No trailing slash.
    pub base_url: String,

    /// Hook run once per 401 response before the error is surfaced.
    pub on_unauthorized: Option<UnauthorizedHook>,
}

impl ClientConfig {
    /// Configuration with no unauthorized hook.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            on_unauthorized: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

/// HTTP transport for the resource store.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    http: Client,
}

impl HttpTransport {
    /// Create a new transport from the given configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{path}", self.config.base_url);

        tracing::debug!(%method, path, "resource request");

        let mut request = self.http.request(method, &url);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ClientError::Network)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Some(hook) = &self.config.on_unauthorized {
                hook();
            }

            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let payload = response.json().await.unwrap_or(Value::Null);

            return Err(ClientError::Api {
                status: status.as_u16(),
                payload,
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::Network)?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ResourceTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.request(Method::DELETE, path, None).await?;

        Ok(())
    }
}
