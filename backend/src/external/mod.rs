//! External API integrations

pub mod cwa;

pub use cwa::CwaClient;
