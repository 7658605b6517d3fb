use crate::domain::order::OrderSnapshot;
use crate::domain::payment_request::PaymentRequest;
use crate::domain::ports::{
    CheckoutSession, CountryInfo, CountryInformation, PaymentGateway, Registration, ScopeConfig,
};
use crate::domain::settings::GatewaySettings;
use crate::error::{CheckoutError, GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// A checkout session holding at most one placed order.
///
/// Suitable for tests and for the command line, where the order comes from a file.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCheckoutSession {
    order: Option<OrderSnapshot>,
}

impl InMemoryCheckoutSession {
    /// Creates a session with no order in it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: OrderSnapshot) -> Self {
        Self { order: Some(order) }
    }
}

#[async_trait]
impl CheckoutSession for InMemoryCheckoutSession {
    async fn last_real_order(&self) -> Result<OrderSnapshot> {
        self.order.clone().ok_or(CheckoutError::OrderNotFound)
    }
}

/// Store configuration backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScopeConfig {
    values: HashMap<String, String>,
}

impl InMemoryScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ScopeConfig for InMemoryScopeConfig {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryScopeConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.set(key, value);
        }
        config
    }
}

/// Country names as shown to Brazilian shoppers.
const DEFAULT_COUNTRIES: [(&str, &str); 10] = [
    ("BR", "Brasil"),
    ("AR", "Argentina"),
    ("BO", "Bolívia"),
    ("CL", "Chile"),
    ("CO", "Colômbia"),
    ("PY", "Paraguai"),
    ("PE", "Peru"),
    ("PT", "Portugal"),
    ("US", "Estados Unidos"),
    ("UY", "Uruguai"),
];

/// Country lookup over a fixed table of localized names.
#[derive(Debug, Clone)]
pub struct StaticCountryDirectory {
    names: HashMap<String, String>,
}

impl StaticCountryDirectory {
    /// Creates a directory preloaded with the default countries.
    pub fn new() -> Self {
        let names = DEFAULT_COUNTRIES
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        Self { names }
    }

    pub fn with_country(mut self, id: &str, full_name_locale: &str) -> Self {
        self.names
            .insert(id.to_ascii_uppercase(), full_name_locale.to_string());
        self
    }
}

impl Default for StaticCountryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountryInformation for StaticCountryDirectory {
    async fn country_info(&self, country_id: &str) -> Result<CountryInfo> {
        let id = country_id.trim().to_ascii_uppercase();
        let full_name_locale = self
            .names
            .get(&id)
            .cloned()
            .ok_or_else(|| CheckoutError::UnknownCountry(country_id.to_string()))?;
        Ok(CountryInfo {
            id,
            full_name_locale,
        })
    }
}

/// Gateway used when no transport is compiled in.
///
/// Every registration fails, so the checkout reports a failed outcome instead
/// of reaching the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGateway;

#[async_trait]
impl PaymentGateway for OfflineGateway {
    async fn register(
        &self,
        _request: &PaymentRequest,
        _settings: &GatewaySettings,
    ) -> std::result::Result<Registration, GatewayError> {
        Err(GatewayError::Transport(
            "no gateway transport available".to_string(),
        ))
    }
}
