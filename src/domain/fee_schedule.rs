use super::payment::CardCompany;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentage applied to a specific (issuer, installments) combination.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FeePlan {
    pub card_company: CardCompany,
    pub installments: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub percentage: Decimal,
}

/// The percentage rules configured for one payment method.
///
/// `base_percentage` applies whenever no installment plans are configured.
/// Plans are expected to be unique per (issuer, installments).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FeeSchedule {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_percentage: Decimal,
    #[serde(default)]
    pub installment_plans: Vec<FeePlan>,
}

impl FeeSchedule {
    /// A schedule with a single flat percentage and no installment plans.
    pub fn flat(base_percentage: Decimal) -> Self {
        Self {
            base_percentage,
            installment_plans: Vec::new(),
        }
    }

    pub fn with_plans(base_percentage: Decimal, installment_plans: Vec<FeePlan>) -> Self {
        Self {
            base_percentage,
            installment_plans,
        }
    }

    pub fn has_installment_plans(&self) -> bool {
        !self.installment_plans.is_empty()
    }

    /// Finds the plan for `card_company` paid in `installments`.
    ///
    /// Returns `Ok(None)` when nothing matches and `AmbiguousPlan` when the
    /// schedule holds more than one matching plan.
    pub fn find_plan(
        &self,
        card_company: CardCompany,
        installments: u32,
    ) -> Result<Option<&FeePlan>> {
        let mut matches = self
            .installment_plans
            .iter()
            .filter(|plan| plan.card_company == card_company && plan.installments == installments);

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(PricingError::AmbiguousPlan {
                card_company,
                installments,
            });
        }
        Ok(first)
    }

    /// Checks that no two plans share the same (issuer, installments) key.
    pub fn validate(&self) -> Result<()> {
        for plan in &self.installment_plans {
            self.find_plan(plan.card_company, plan.installments)?;
        }
        Ok(())
    }
}
