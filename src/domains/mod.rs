//! Domains module containing the gateway's business logic.
//!
//! - **upstream**: the ShipStation HTTP client behind the `Upstream` trait
//! - **operations**: the static operation catalog and the shared dispatcher
//! - **rest**: the REST route table and axum handlers (feature `http`)

pub mod operations;
#[cfg(feature = "http")]
pub mod rest;
pub mod upstream;
