//! Users and the identity contract.

pub mod models;
pub mod session;

pub use models::{Address, ApiEnvelope, User, UserRole, UserStatus};
pub use session::{FixedUserSession, MockUserSession, SessionError, UserSession, resolve_user};
