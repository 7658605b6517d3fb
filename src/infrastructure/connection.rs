use crate::domain::ports::ConnectionData;
use crate::domain::settings::{Environment, GatewaySettings};

pub const PRODUCTION_PAYMENT_URL: &str = "https://pagseguro.uol.com.br/v2/checkout/payment.html";
pub const SANDBOX_PAYMENT_URL: &str =
    "https://sandbox.pagseguro.uol.com.br/v2/checkout/payment.html";

pub const PRODUCTION_CHECKOUT_URL: &str = "https://ws.pagseguro.uol.com.br/v2/checkout";
pub const SANDBOX_CHECKOUT_URL: &str = "https://ws.sandbox.pagseguro.uol.com.br/v2/checkout";

/// PagSeguro endpoints for each environment.
#[derive(Debug, Clone, PartialEq)]
pub struct PagSeguroConnectionData {
    production_payment_url: String,
    sandbox_payment_url: String,
    production_checkout_url: String,
    sandbox_checkout_url: String,
}

impl PagSeguroConnectionData {
    pub fn new() -> Self {
        Self {
            production_payment_url: PRODUCTION_PAYMENT_URL.to_string(),
            sandbox_payment_url: SANDBOX_PAYMENT_URL.to_string(),
            production_checkout_url: PRODUCTION_CHECKOUT_URL.to_string(),
            sandbox_checkout_url: SANDBOX_CHECKOUT_URL.to_string(),
        }
    }

    /// Points every environment at `base`, e.g. a local mock of the gateway.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let payment = format!("{base}/v2/checkout/payment.html");
        let checkout = format!("{base}/v2/checkout");
        Self {
            production_payment_url: payment.clone(),
            sandbox_payment_url: payment,
            production_checkout_url: checkout.clone(),
            sandbox_checkout_url: checkout,
        }
    }

    /// Endpoint payment requests are registered against.
    pub fn checkout_url(&self, settings: &GatewaySettings) -> &str {
        match settings.environment {
            Environment::Production => &self.production_checkout_url,
            Environment::Sandbox => &self.sandbox_checkout_url,
        }
    }
}

impl Default for PagSeguroConnectionData {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionData for PagSeguroConnectionData {
    fn build_payment_response_url(&self, settings: &GatewaySettings) -> String {
        match settings.environment {
            Environment::Production => self.production_payment_url.clone(),
            Environment::Sandbox => self.sandbox_payment_url.clone(),
        }
    }
}
