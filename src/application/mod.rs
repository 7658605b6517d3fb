//! Application layer orchestrating the checkout.
//!
//! This module defines `PaymentMethod`, the entry point that reads the last
//! order from the checkout session, maps it onto a gateway payment request and
//! registers it through the `PaymentGateway` port.

pub mod checkout;
