#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_json(value: &Value) -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn address(telephone: &str) -> Value {
    json!({
        "firstname": "Ana",
        "lastname": "Silva",
        "street": ["Rua Augusta, 500, Apto 3 - Consolação"],
        "city": "São Paulo",
        "region": "São Paulo",
        "postcode": "01305-000",
        "country_id": "BR",
        "telephone": telephone
    })
}

pub fn order_with_items(items: Vec<Value>) -> Value {
    json!({
        "entity_id": 42,
        "customer_name": "Ana Souza",
        "customer_email": "ana@example.com",
        "base_shipping_amount": "10",
        "shipping_address": address("11987654321"),
        "billing_address": address("11987654321"),
        "items": items
    })
}

pub fn item(id: u64, name: &str, price: &str) -> Value {
    json!({ "id": id, "name": name, "qty_to_ship": 1, "price": price })
}

pub fn config() -> Value {
    json!({
        "pagseguro/store/reference": "STORE1",
        "payment/pagseguro/email": "loja@example.com",
        "payment/pagseguro/token": "0123456789ABCDEF",
        "payment/pagseguro/redirect": "https://loja.example.com/return",
        "payment/pagseguro/notification": "https://loja.example.com/notify"
    })
}
