//! Adapters implementing the domain ports.

pub mod connection;
#[cfg(feature = "gateway-http")]
pub mod http_gateway;
pub mod in_memory;
