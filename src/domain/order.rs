use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer name the storefront assigns to orders placed without an account.
pub const GUEST_CUSTOMER_NAME: &str = "Guest";

/// A postal address attached to an order.
///
/// `street` keeps the lines as the storefront captured them; stores that ask
/// for street, number, complement and district separately send four lines.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Address {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub street: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub postcode: String,
    pub country_id: String,
    #[serde(default)]
    pub telephone: Option<String>,
}

impl Address {
    /// The street lines joined the way the storefront stores them.
    pub fn raw_street(&self) -> String {
        self.street.join("\n")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub qty_to_ship: u32,
    pub price: Decimal,
    #[serde(default)]
    pub weight: Option<Decimal>,
    /// Children of configurable or bundle products point at their parent and
    /// are not shown to the customer.
    #[serde(default)]
    pub parent_item_id: Option<u64>,
}

impl LineItem {
    pub fn is_visible(&self) -> bool {
        self.parent_item_id.is_none()
    }
}

/// Read-only view of the last order placed in the checkout session.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderSnapshot {
    pub entity_id: u64,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    pub billing_address: Address,
    #[serde(default)]
    pub base_shipping_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl OrderSnapshot {
    pub fn visible_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| item.is_visible())
    }

    pub fn is_guest(&self) -> bool {
        self.customer_name == GUEST_CUSTOMER_NAME
    }

    /// The address goods are shipped to.
    ///
    /// Virtual orders carry no shipping address, so the billing address stands in.
    pub fn shipping_source(&self) -> Result<&Address> {
        if self.is_virtual {
            return Ok(&self.billing_address);
        }
        self.shipping_address
            .as_ref()
            .ok_or(CheckoutError::MissingShippingAddress(self.entity_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn address(firstname: &str, city: &str) -> Address {
        Address {
            firstname: firstname.to_string(),
            lastname: "Silva".to_string(),
            street: vec!["Rua A, 10".to_string()],
            city: city.to_string(),
            region: "São Paulo".to_string(),
            postcode: "01310-100".to_string(),
            country_id: "BR".to_string(),
            telephone: None,
        }
    }

    fn order(is_virtual: bool) -> OrderSnapshot {
        OrderSnapshot {
            entity_id: 1,
            customer_name: "Ana Silva".to_string(),
            customer_email: "ana@example.com".to_string(),
            is_virtual,
            shipping_address: Some(address("Ship", "Campinas")),
            billing_address: address("Bill", "São Paulo"),
            base_shipping_amount: dec!(10),
            items: vec![
                LineItem {
                    id: 1,
                    name: "Parent".to_string(),
                    qty_to_ship: 1,
                    price: dec!(10),
                    weight: None,
                    parent_item_id: None,
                },
                LineItem {
                    id: 2,
                    name: "Child".to_string(),
                    qty_to_ship: 1,
                    price: dec!(10),
                    weight: None,
                    parent_item_id: Some(1),
                },
            ],
        }
    }

    #[test]
    fn test_visible_items_skip_children() {
        let order = order(false);
        let visible: Vec<u64> = order.visible_items().map(|item| item.id).collect();
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_virtual_order_ships_to_billing() {
        assert_eq!(order(true).shipping_source().unwrap().firstname, "Bill");
        assert_eq!(order(false).shipping_source().unwrap().firstname, "Ship");
    }

    #[test]
    fn test_physical_order_without_shipping_address() {
        let mut order = order(false);
        order.shipping_address = None;
        assert!(matches!(
            order.shipping_source(),
            Err(CheckoutError::MissingShippingAddress(1))
        ));
    }

    #[test]
    fn test_order_deserialization_defaults() {
        let json = r#"{
            "entity_id": 7,
            "customer_name": "Guest",
            "customer_email": "guest@example.com",
            "billing_address": {"country_id": "BR", "street": ["Rua B"]}
        }"#;
        let order: OrderSnapshot = serde_json::from_str(json).unwrap();

        assert!(order.is_guest());
        assert!(!order.is_virtual);
        assert!(order.items.is_empty());
        assert_eq!(order.base_shipping_amount, Decimal::ZERO);
        assert_eq!(order.billing_address.telephone, None);
    }
}
