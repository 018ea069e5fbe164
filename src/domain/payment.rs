use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[serde(alias = "Cash")]
    Cash,
    #[serde(alias = "DebitCard")]
    DebitCard,
    #[serde(alias = "CreditCard")]
    CreditCard,
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cash => "Cash",
            Self::DebitCard => "DebitCard",
            Self::CreditCard => "CreditCard",
        };
        f.write_str(name)
    }
}

/// Credit card issuers with their own installment plans.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CardCompany {
    #[serde(rename = "VICARD")]
    ViCard,
    #[serde(rename = "ACARD")]
    ACard,
    #[serde(rename = "MYCARD")]
    MyCard,
}

impl fmt::Display for CardCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ViCard => "VICARD",
            Self::ACard => "ACARD",
            Self::MyCard => "MYCARD",
        };
        f.write_str(name)
    }
}

/// A single purchase to be priced.
///
/// `payment_method_id` selects the fee schedule configured for this payment
/// method, while `payment_method_type` selects the pricing strategy.
/// `card_company` is only meaningful for credit cards and ignored otherwise.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentRequest {
    pub payment_method_id: u32,
    pub payment_method_type: PaymentMethodType,
    pub price: Decimal,
    pub card_company: Option<CardCompany>,
    pub installments: u32,
}

impl PaymentRequest {
    /// Builds a request, rejecting negative prices and zero installments.
    pub fn new(
        payment_method_id: u32,
        payment_method_type: PaymentMethodType,
        price: Decimal,
        card_company: Option<CardCompany>,
        installments: u32,
    ) -> Result<Self> {
        if price < Decimal::ZERO {
            return Err(PricingError::ValidationError(
                "Price must not be negative".to_string(),
            ));
        }
        if installments == 0 {
            return Err(PricingError::ValidationError(
                "Number of installments must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            payment_method_id,
            payment_method_type,
            price,
            card_company,
            installments,
        })
    }

    pub fn cash(payment_method_id: u32, price: Decimal) -> Self {
        Self {
            payment_method_id,
            payment_method_type: PaymentMethodType::Cash,
            price,
            card_company: None,
            installments: 1,
        }
    }

    pub fn debit_card(payment_method_id: u32, price: Decimal) -> Self {
        Self {
            payment_method_id,
            payment_method_type: PaymentMethodType::DebitCard,
            price,
            card_company: None,
            installments: 1,
        }
    }

    /// Credit card request taken as given; untrusted input goes through `new`.
    pub fn credit_card(
        payment_method_id: u32,
        price: Decimal,
        card_company: CardCompany,
        installments: u32,
    ) -> Self {
        Self {
            payment_method_id,
            payment_method_type: PaymentMethodType::CreditCard,
            price,
            card_company: Some(card_company),
            installments,
        }
    }
}
