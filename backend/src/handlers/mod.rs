//! HTTP handlers for the Taiwan Weather Proxy

pub mod health;
pub mod root;
pub mod weather;

pub use health::*;
pub use root::*;
pub use weather::*;
