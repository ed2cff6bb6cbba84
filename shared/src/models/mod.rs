//! Domain models for the Taiwan Weather Proxy

mod forecast;

pub use forecast::*;
