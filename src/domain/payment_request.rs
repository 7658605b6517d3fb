use crate::domain::address::truncate_chars;
use crate::domain::settings::Charset;
use crate::error::{CheckoutError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// The gateway only settles in Brazilian reais.
pub const CURRENCY: &str = "BRL";

/// Longest item description the gateway accepts.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Builds the gateway reference correlating a payment with a store order.
///
/// The configured store prefix and the order id are joined with `-`; an empty
/// prefix yields the bare order id.
pub fn order_store_reference(prefix: &str, entity_id: u64) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        entity_id.to_string()
    } else {
        format!("{prefix}-{entity_id}")
    }
}

/// Rounds a monetary value to cents, half away from zero, keeping two decimals
/// so that `15.5` prints as `15.50`.
pub fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Shipping service requested from the gateway.
#[derive(Debug, Serialize, PartialEq, Clone, Copy, Default)]
pub enum ShippingType {
    #[default]
    NotSpecified,
}

impl ShippingType {
    /// Numeric code used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            Self::NotSpecified => 3,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct ShippingAddress {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub complement: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct Shipping {
    pub address: ShippingAddress,
    pub r#type: ShippingType,
    pub cost: Decimal,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Phone {
    pub area_code: String,
    pub number: String,
}

impl Phone {
    /// Splits a free-form telephone into area code and number.
    ///
    /// Only digits are kept. Numbers longer than nine digits carry an area
    /// code: a leading trunk `0` is dropped and the next two digits are the
    /// area code. Shorter numbers have an empty area code.
    pub fn parse(telephone: &str) -> Self {
        let mut digits: String = telephone.chars().filter(char::is_ascii_digit).collect();
        if digits.len() <= 9 {
            return Self {
                area_code: String::new(),
                number: digits,
            };
        }
        if digits.starts_with('0') {
            digits.remove(0);
        }
        let number = digits.split_off(2);
        Self {
            area_code: digits,
            number,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct Sender {
    pub name: String,
    pub email: String,
    pub phone: Option<Phone>,
}

/// A single line of the payment request.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub amount: Decimal,
    pub weight: u64,
}

impl PaymentItem {
    /// Creates an item, truncating the description and rounding amount and weight.
    ///
    /// The amount must be strictly positive once rounded to cents.
    pub fn new(
        id: impl ToString,
        description: &str,
        quantity: u32,
        amount: Decimal,
        weight: Option<Decimal>,
    ) -> Result<Self> {
        let amount = to_cents(amount);
        if amount <= Decimal::ZERO {
            return Err(CheckoutError::ValidationError(format!(
                "Item amount must be positive, got {amount}"
            )));
        }

        let weight = weight
            .unwrap_or_default()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let weight = u64::try_from(weight).map_err(|_| {
            CheckoutError::ValidationError(format!("Item weight out of range: {weight}"))
        })?;

        Ok(Self {
            id: id.to_string(),
            description: truncate_chars(description, MAX_DESCRIPTION_LENGTH),
            quantity,
            amount,
            weight,
        })
    }
}

/// The request registered with the gateway to open a hosted checkout.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct PaymentRequest {
    pub currency: String,
    pub reference: String,
    pub shipping: Shipping,
    pub sender: Sender,
    pub items: Vec<PaymentItem>,
    pub redirect_url: Option<String>,
    pub notification_url: Option<String>,
}

impl PaymentRequest {
    pub fn new() -> Self {
        Self {
            currency: CURRENCY.to_string(),
            ..Self::default()
        }
    }

    pub fn add_item(&mut self, item: PaymentItem) {
        self.items.push(item);
    }

    /// Flattens the request into the gateway's form parameters.
    ///
    /// Items are numbered from 1 (`itemId1`, `itemDescription1`, ...); empty
    /// optional fields are left out.
    pub fn to_form_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| params.push((key.to_string(), value));

        push("currency", self.currency.clone());
        push("reference", self.reference.clone());

        if let Some(url) = &self.redirect_url {
            push("redirectURL", url.clone());
        }
        if let Some(url) = &self.notification_url {
            push("notificationURL", url.clone());
        }

        push("senderName", self.sender.name.clone());
        push("senderEmail", self.sender.email.clone());
        if let Some(phone) = &self.sender.phone {
            push("senderAreaCode", phone.area_code.clone());
            push("senderPhone", phone.number.clone());
        }

        let shipping = &self.shipping;
        push("shippingType", shipping.r#type.code().to_string());
        push("shippingCost", to_cents(shipping.cost).to_string());

        let address = &shipping.address;
        let optional = [
            ("shippingAddressStreet", &address.street),
            ("shippingAddressNumber", &address.number),
            ("shippingAddressComplement", &address.complement),
            ("shippingAddressDistrict", &address.district),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                push(key, value.clone());
            }
        }
        push("shippingAddressPostalCode", address.postal_code.clone());
        push("shippingAddressCity", address.city.clone());
        push("shippingAddressState", address.state.clone());
        push("shippingAddressCountry", address.country.clone());

        for (index, item) in self.items.iter().enumerate() {
            let n = index + 1;
            params.push((format!("itemId{n}"), item.id.clone()));
            params.push((format!("itemDescription{n}"), item.description.clone()));
            params.push((format!("itemAmount{n}"), item.amount.to_string()));
            params.push((format!("itemQuantity{n}"), item.quantity.to_string()));
            params.push((format!("itemWeight{n}"), item.weight.to_string()));
        }

        params
    }

    /// URL-encoded form body, as posted to the gateway.
    ///
    /// Values are percent-encoded from their bytes in `charset`, which must
    /// match the charset announced in the `Content-Type` header.
    pub fn to_form_body(&self, charset: Charset) -> Result<String> {
        let params = self.to_form_params();
        match charset {
            Charset::Utf8 => serde_urlencoded::to_string(params)
                .map_err(|e| CheckoutError::ValidationError(format!("Form encoding failed: {e}"))),
            Charset::Iso88591 => Ok(params
                .iter()
                .map(|(key, value)| format!("{}={}", latin1_encode(key), latin1_encode(value)))
                .collect::<Vec<_>>()
                .join("&")),
        }
    }
}

/// Percent-encodes the Latin-1 bytes of `value`.
///
/// Characters outside Latin-1 become numeric character references.
fn latin1_encode(value: &str) -> String {
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(value);
    url::form_urlencoded::byte_serialize(&bytes).collect()
}
