//! Shared fixtures for service-level unit tests.

mod helpers;

pub(crate) use helpers::*;
