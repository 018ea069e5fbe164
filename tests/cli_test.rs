use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-pricing"));
    cmd.arg("tests/fixtures/requests.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "payment_method_id,payment_type,card_company,original_price,final_price,installments",
        ))
        .stdout(predicate::str::contains("1,cash,,1000,1000,1"))
        .stdout(predicate::str::contains("2,cash,,1000,900,1"))
        .stdout(predicate::str::contains("3,debit_card,,1000,1000,1"))
        .stdout(predicate::str::contains("5,credit_card,VICARD,1000,1100,1"))
        .stdout(predicate::str::contains("6,credit_card,VICARD,1000,1100,3"))
        .stdout(predicate::str::contains("6,credit_card,VICARD,1000,1500,18"))
        .stdout(predicate::str::contains("6,credit_card,ACARD,1000,1120,6"))
        .stdout(predicate::str::contains("6,credit_card,MYCARD,1000,1080,6"))
        .stdout(predicate::str::contains("MYCARD,1000,").count(2))
        .stderr(predicate::str::contains(
            "A payment in 12 installments with MYCARD credit card is not possible",
        ));

    Ok(())
}

#[test]
fn test_cli_with_catalog_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-pricing"));
    cmd.arg("tests/fixtures/requests.csv")
        .arg("--catalog")
        .arg("tests/fixtures/catalog.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,cash,,1000,850,1"))
        .stdout(predicate::str::contains("3,debit_card,,1000,1025,1"))
        .stdout(predicate::str::contains("6,credit_card,MYCARD,1000,1300,12"))
        .stderr(predicate::str::contains(
            "No fee schedule configured for payment method 2",
        ));

    Ok(())
}

#[test]
fn test_cli_log_level_from_environment() {
    let mut cmd = Command::new(cargo_bin!("payment-pricing"));
    cmd.arg("tests/fixtures/requests.csv")
        .arg("--catalog")
        .arg("tests/fixtures/catalog.json")
        .env("RUST_LOG", "info");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("loaded fee schedule catalog"))
        .stderr(predicate::str::contains("pricing run finished"))
        .stdout(predicate::str::contains("pricing run finished").not());
}

#[test]
fn test_cli_default_log_level_hides_info() {
    let mut cmd = Command::new(cargo_bin!("payment-pricing"));
    cmd.arg("tests/fixtures/requests.csv").env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("pricing run finished").not());
}

#[test]
fn test_cli_missing_catalog_file() {
    let mut cmd = Command::new(cargo_bin!("payment-pricing"));
    cmd.arg("tests/fixtures/requests.csv")
        .arg("--catalog")
        .arg("tests/fixtures/missing.json");

    cmd.assert().failure();
}
