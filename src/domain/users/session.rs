//! Identity contract: who owns the cart and orders being worked on.
//!
//! Cookie plumbing, login and registration stay with the host application;
//! this crate only consumes the resolved identity.

use mockall::automock;
use thiserror::Error;

use crate::{
    client::{ClientError, ResourceClient},
    domain::users::models::{ApiEnvelope, User},
};

/// Session failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The endpoint answered but flagged the request as unsuccessful.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The resource store rejected or never answered a call.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Supplies the acting user id for cart and order ownership.
#[automock]
pub trait UserSession: Send + Sync {
    /// The signed-in user's id, or `None` when nobody is signed in.
    fn current_user_id(&self) -> Option<u64>;
}

/// A session pinned to one user id. Hosts with real auth supply their own
/// [`UserSession`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct FixedUserSession(pub u64);

impl UserSession for FixedUserSession {
    fn current_user_id(&self) -> Option<u64> {
        Some(self.0)
    }
}

/// Fetch the user record behind an id, for ownership display.
///
/// # Errors
///
/// Surfaces client errors untouched.
pub async fn resolve_user(client: &ResourceClient, id: u64) -> Result<User, SessionError> {
    Ok(client.get(&format!("/users/{id}")).await?)
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of an enveloped response.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::Rejected`] when the envelope is flagged
    /// unsuccessful or carries no payload; the server-provided message is
    /// preserved for display.
    pub fn into_data(self) -> Result<T, SessionError> {
        let message = self
            .message
            .unwrap_or_else(|| "request was not successful".to_string());

        if !self.success {
            return Err(SessionError::Rejected(message));
        }

        self.data.ok_or(SessionError::Rejected(message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use testresult::TestResult;

    use crate::client::MockResourceTransport;

    use super::*;

    #[tokio::test]
    async fn resolve_user_fetches_the_record_by_id() -> TestResult {
        let mut transport = MockResourceTransport::new();

        transport
            .expect_get()
            .withf(|path| path == "/users/2")
            .returning(|_| {
                Ok(json!({
                    "id": 2,
                    "username": "lan.pham",
                    "email": "lan@example.com",
                    "firstName": "Lan",
                    "lastName": "Phạm",
                    "phone": "0900000000",
                    "avatar": "",
                    "role": "customer",
                    "status": "active",
                }))
            });

        let client = ResourceClient::new(Arc::new(transport));
        let user = resolve_user(&client, 2).await?;

        assert_eq!(user.id, 2);
        assert_eq!(user.username, "lan.pham");

        Ok(())
    }

    #[test]
    fn fixed_session_always_resolves() {
        let session = FixedUserSession(2);

        assert_eq!(session.current_user_id(), Some(2));
    }

    #[test]
    fn successful_envelope_unwraps_its_payload() -> TestResult {
        let envelope = ApiEnvelope {
            success: true,
            data: Some(41_u64),
            message: None,
        };

        assert_eq!(envelope.into_data()?, 41);

        Ok(())
    }

    #[test]
    fn unsuccessful_envelope_preserves_the_server_message() {
        let envelope: ApiEnvelope<u64> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("Sai mật khẩu".to_string()),
        };

        let result = envelope.into_data();

        assert!(
            matches!(result, Err(SessionError::Rejected(ref msg)) if msg == "Sai mật khẩu"),
            "expected Rejected with message, got {result:?}"
        );
    }

    #[test]
    fn successful_envelope_without_payload_is_rejected() {
        let envelope: ApiEnvelope<u64> = ApiEnvelope {
            success: true,
            data: None,
            message: None,
        };

        assert!(matches!(
            envelope.into_data(),
            Err(SessionError::Rejected(_))
        ));
    }
}
