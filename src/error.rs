use crate::domain::payment::{CardCompany, PaymentMethodType};
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("The type of payment '{0}' doesn't exist or is not available")]
    UnknownPaymentMethod(PaymentMethodType),
    #[error("The credit card company is mandatory")]
    MissingCardCompany,
    #[error(
        "A payment in {installments} installments with {card_company} credit card is not possible because the card is not providing that plan"
    )]
    NoMatchingPlan {
        card_company: CardCompany,
        installments: u32,
    },
    #[error(
        "Fee schedule holds more than one plan for {installments} installments with {card_company}"
    )]
    AmbiguousPlan {
        card_company: CardCompany,
        installments: u32,
    },
    #[error("Applying {percentage}% to {price} overflows the decimal range")]
    PriceOverflow { price: Decimal, percentage: Decimal },
    #[error("No fee schedule configured for payment method {0}")]
    UnknownFeeSchedule(u32),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Catalog error: {0}")]
    CatalogError(#[from] serde_json::Error),
}
