//! Cart and order lifecycle services for a beverage storefront backed by a
//! REST-style JSON data store.

pub mod client;
pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
