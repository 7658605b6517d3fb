use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Missing configuration value: {0}")]
    MissingConfig(String),
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
    #[error("No order found in the checkout session")]
    OrderNotFound,
    #[error("Order {0} has no shipping address")]
    MissingShippingAddress(u64),
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Failures reported while registering a payment request with the gateway.
///
/// These never escape `PaymentMethod::create_payment_request`; they are logged
/// and folded into `CheckoutOutcome::Failed`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("{message}")]
    Service {
        code: Option<String>,
        message: String,
    },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected gateway response: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
