//! Domain layer: the order model, the payment request it maps to, and the
//! ports through which the checkout talks to its collaborators.

pub mod address;
pub mod order;
pub mod payment_request;
pub mod ports;
pub mod region;
pub mod settings;
