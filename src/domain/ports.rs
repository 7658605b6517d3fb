use super::order::OrderSnapshot;
use super::payment_request::PaymentRequest;
use super::settings::GatewaySettings;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Source of the order being paid for.
#[async_trait]
pub trait CheckoutSession: Send + Sync {
    async fn last_real_order(&self) -> Result<OrderSnapshot>;
}

/// Key-value store configuration.
pub trait ScopeConfig: Send + Sync {
    fn value(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CountryInfo {
    pub id: String,
    pub full_name_locale: String,
}

#[async_trait]
pub trait CountryInformation: Send + Sync {
    async fn country_info(&self, country_id: &str) -> Result<CountryInfo>;
}

/// What the gateway hands back after a successful registration.
#[derive(Debug, PartialEq, Clone)]
pub enum Registration {
    /// Standard checkout: send the buyer to this URL.
    Redirect(String),
    /// Lightbox checkout: open the inline payment UI with this code.
    LightboxCode(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn register(
        &self,
        request: &PaymentRequest,
        settings: &GatewaySettings,
    ) -> std::result::Result<Registration, GatewayError>;
}

/// Resolves gateway URLs for the configured environment.
pub trait ConnectionData: Send + Sync {
    fn build_payment_response_url(&self, settings: &GatewaySettings) -> String;
}

pub type CheckoutSessionBox = Box<dyn CheckoutSession>;
pub type ScopeConfigBox = Box<dyn ScopeConfig>;
pub type CountryInformationBox = Box<dyn CountryInformation>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type ConnectionDataBox = Box<dyn ConnectionData>;
