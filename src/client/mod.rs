//! Resource client: the sole I/O path of this crate.

pub mod errors;
pub mod http;
pub mod transport;

pub use errors::ClientError;
pub use http::{ClientConfig, HttpTransport, UnauthorizedHook};
pub use transport::{MockResourceTransport, ResourceClient, ResourceTransport};
