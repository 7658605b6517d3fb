//! Gateway settings read from the store configuration.

use crate::domain::ports::ScopeConfig;
use crate::error::{CheckoutError, Result};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

pub const STORE_REFERENCE: &str = "pagseguro/store/reference";
pub const NOTIFICATION_URL: &str = "payment/pagseguro/notification";
pub const REDIRECT_URL: &str = "payment/pagseguro/redirect";
pub const EMAIL: &str = "payment/pagseguro/email";
pub const TOKEN: &str = "payment/pagseguro/token";
pub const ENVIRONMENT: &str = "payment/pagseguro/environment";
pub const CHARSET: &str = "payment/pagseguro/charset";
pub const LOG: &str = "payment/pagseguro/log";
pub const CHECKOUT: &str = "payment/pagseguro/checkout";

#[derive(Debug, Display, EnumString, PartialEq, Eq, Clone, Copy, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

#[derive(Debug, Display, EnumString, PartialEq, Eq, Clone, Copy, Default)]
#[strum(ascii_case_insensitive)]
pub enum Charset {
    #[default]
    #[strum(serialize = "UTF-8")]
    Utf8,
    #[strum(serialize = "ISO-8859-1")]
    Iso88591,
}

impl Charset {
    /// Reads the configured charset. Unset means UTF-8; credentials are not needed.
    pub fn from_config(config: &dyn ScopeConfig) -> Result<Self> {
        parse_or_default(config, CHARSET)
    }
}

#[derive(Debug, Display, EnumString, PartialEq, Eq, Clone, Copy, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CheckoutType {
    #[default]
    Standard,
    Lightbox,
}

/// Account credentials used to authenticate with the gateway.
#[derive(Clone, PartialEq)]
pub struct AccountCredentials {
    pub email: String,
    pub token: String,
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("email", &self.email)
            .field("token", &"*** masked ***")
            .finish()
    }
}

/// Everything the gateway client needs besides the request itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub environment: Environment,
    pub charset: Charset,
    pub log_enabled: bool,
    pub credentials: AccountCredentials,
    pub checkout_type: CheckoutType,
}

impl GatewaySettings {
    /// Reads the settings from configuration.
    ///
    /// Credentials are required; environment, charset, logging and checkout
    /// type fall back to their defaults when unset.
    pub fn from_config(config: &dyn ScopeConfig) -> Result<Self> {
        Ok(Self {
            environment: parse_or_default(config, ENVIRONMENT)?,
            charset: parse_or_default(config, CHARSET)?,
            log_enabled: flag(config, LOG)?,
            credentials: AccountCredentials {
                email: required(config, EMAIL)?,
                token: required(config, TOKEN)?,
            },
            checkout_type: parse_or_default(config, CHECKOUT)?,
        })
    }

    pub fn is_lightbox(&self) -> bool {
        self.checkout_type == CheckoutType::Lightbox
    }
}

/// Reads a key that must be present. An empty value counts as present.
pub fn required(config: &dyn ScopeConfig, key: &str) -> Result<String> {
    config
        .value(key)
        .ok_or_else(|| CheckoutError::MissingConfig(key.to_string()))
}

/// Reads an optional key, treating blank values as unset.
pub fn optional(config: &dyn ScopeConfig, key: &str) -> Option<String> {
    config
        .value(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or_default<T: FromStr + Default>(config: &dyn ScopeConfig, key: &str) -> Result<T> {
    match optional(config, key) {
        None => Ok(T::default()),
        Some(value) => value.parse().map_err(|_| CheckoutError::InvalidConfig {
            key: key.to_string(),
            value,
        }),
    }
}

fn flag(config: &dyn ScopeConfig, key: &str) -> Result<bool> {
    match optional(config, key).as_deref() {
        None | Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(value) => value
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| CheckoutError::InvalidConfig {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}
