use crate::domain::fee_schedule::{FeePlan, FeeSchedule};
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schedules: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    payment_method_id: u32,
    #[serde(with = "rust_decimal::serde::str")]
    base_percentage: Decimal,
    #[serde(default)]
    installment_plans: Vec<FeePlan>,
}

/// Loads a fee schedule catalog from a JSON file.
///
/// The file holds a `schedules` array; each entry names its
/// `payment_method_id`, `base_percentage` and optional `installment_plans`.
/// Percentages are JSON strings so they are read without rounding. Catalogs
/// with repeated ids or duplicate plans are rejected.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, FeeSchedule>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = parse_catalog(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        schedules = catalog.len(),
        "loaded fee schedule catalog"
    );
    Ok(catalog)
}

/// Parses a JSON catalog from any `Read` source.
pub fn parse_catalog<R: Read>(source: R) -> Result<HashMap<u32, FeeSchedule>> {
    let file: CatalogFile = serde_json::from_reader(source)?;

    let mut catalog = HashMap::with_capacity(file.schedules.len());
    for entry in file.schedules {
        let schedule = FeeSchedule::with_plans(entry.base_percentage, entry.installment_plans);
        schedule.validate()?;

        if catalog.insert(entry.payment_method_id, schedule).is_some() {
            return Err(PricingError::ValidationError(format!(
                "Payment method {} is configured more than once",
                entry.payment_method_id
            )));
        }
        tracing::debug!(payment_method_id = entry.payment_method_id, "registered fee schedule");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::CardCompany;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const CATALOG: &str = r#"{
        "schedules": [
            { "payment_method_id": 1, "base_percentage": "-10" },
            {
                "payment_method_id": 6,
                "base_percentage": "0",
                "installment_plans": [
                    { "card_company": "VICARD", "installments": 3, "percentage": "10" },
                    { "card_company": "ACARD", "installments": 3, "percentage": "5.5" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[&1], FeeSchedule::flat(dec!(-10)));

        let plan = catalog[&6].find_plan(CardCompany::ACard, 3).unwrap().unwrap();
        assert_eq!(plan.percentage, dec!(5.5));
    }

    #[test]
    fn test_percentages_keep_precision() {
        let data = r#"{ "schedules": [ {
            "payment_method_id": 6,
            "base_percentage": "0.1234567890123456789",
            "installment_plans": [
                { "card_company": "ACARD", "installments": 3, "percentage": "12.000000000000000001" }
            ]
        } ] }"#;
        let catalog = parse_catalog(data.as_bytes()).unwrap();
        assert_eq!(catalog[&6].base_percentage, dec!(0.1234567890123456789));

        let plan = catalog[&6].find_plan(CardCompany::ACard, 3).unwrap().unwrap();
        assert_eq!(plan.percentage, dec!(12.000000000000000001));
    }

    #[test]
    fn test_duplicate_payment_method_id() {
        let data = r#"{ "schedules": [
            { "payment_method_id": 1, "base_percentage": "0" },
            { "payment_method_id": 1, "base_percentage": "5" }
        ] }"#;
        assert!(matches!(
            parse_catalog(data.as_bytes()),
            Err(PricingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_plans_rejected() {
        let data = r#"{ "schedules": [ {
            "payment_method_id": 6,
            "base_percentage": "0",
            "installment_plans": [
                { "card_company": "MYCARD", "installments": 6, "percentage": "8" },
                { "card_company": "MYCARD", "installments": 6, "percentage": "9" }
            ]
        } ] }"#;
        assert!(matches!(
            parse_catalog(data.as_bytes()),
            Err(PricingError::AmbiguousPlan { .. })
        ));
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            parse_catalog("{ \"schedules\": [ { \"payment_method_id\": \"x\" } ] }".as_bytes()),
            Err(PricingError::CatalogError(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.contains_key(&6));
        assert!(matches!(
            load_catalog("does/not/exist.json"),
            Err(PricingError::IoError(_))
        ));
    }
}
