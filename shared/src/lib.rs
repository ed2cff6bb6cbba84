//! Shared types for the Taiwan Weather Proxy
//!
//! This crate contains the client-facing response contract and the table of
//! supported cities, shared between the backend and any client that wants to
//! consume the proxy with the same types.

pub mod cities;
pub mod models;
pub mod types;

pub use cities::*;
pub use models::*;
pub use types::*;
