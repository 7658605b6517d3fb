mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_preview_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "preview",
        "--order",
        "tests/fixtures/order.json",
        "--config",
        "tests/fixtures/config.json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let request: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(request["currency"], "BRL");
    assert_eq!(request["reference"], "STORE1-42");
    // Guest order: the sender name comes from the billing address.
    assert_eq!(request["sender"]["name"], "Ana Silva");
    assert_eq!(request["sender"]["phone"]["area_code"], "11");
    assert_eq!(request["sender"]["phone"]["number"], "987654321");
    assert_eq!(request["shipping"]["cost"], "15.50");
    assert_eq!(request["shipping"]["type"], "NotSpecified");
    assert_eq!(request["shipping"]["address"]["state"], "SP");
    assert_eq!(request["shipping"]["address"]["postal_code"], "01305000");
    assert_eq!(request["shipping"]["address"]["country"], "Brasil");
    // The child of the configurable product is not sent.
    assert_eq!(request["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        request["redirect_url"],
        "https://loja.example.com/pagseguro/return"
    );
    assert_eq!(
        request["notification_url"],
        "https://loja.example.com/pagseguro/notification"
    );

    Ok(())
}

#[test]
fn test_cli_preview_form_body() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "preview",
        "--order",
        "tests/fixtures/order.json",
        "--config",
        "tests/fixtures/config.json",
        "--form",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("currency=BRL&reference=STORE1-42"))
        .stdout(predicate::str::contains("itemId1=101"))
        .stdout(predicate::str::contains("itemQuantity1=2"))
        .stdout(predicate::str::contains("itemId3").not());
}

#[test]
fn test_cli_preview_form_body_in_latin1() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = common::config();
    config["payment/pagseguro/charset"] = "ISO-8859-1".into();
    let config_file = common::write_json(&config)?;

    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["preview", "--order", "tests/fixtures/order.json", "--config"])
        .arg(config_file.path())
        .arg("--form");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("shippingAddressCity=S%E3o+Paulo"))
        .stdout(predicate::str::contains("itemDescription1=Caneca+de+cer%E2mica"))
        .stdout(predicate::str::contains("%C3").not());

    Ok(())
}

#[test]
fn test_cli_checkout_url_uses_environment() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "checkout-url",
        "8CF4BE7DCECEF0F004A6DFA0A8243412",
        "--config",
        "tests/fixtures/config.json",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "https://sandbox.pagseguro.uol.com.br/v2/checkout/payment.html?code=8CF4BE7DCECEF0F004A6DFA0A8243412",
    ));
}

#[test]
fn test_cli_missing_order_file() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "preview",
        "--order",
        "tests/fixtures/does_not_exist.json",
        "--config",
        "tests/fixtures/config.json",
    ]);

    cmd.assert().failure();
}
