use crate::domain::fee_schedule::FeeSchedule;
use crate::domain::payment::{CardCompany, PaymentRequest};
use crate::domain::ports::PricingStrategy;
use crate::domain::price::apply_percentage;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;

/// Credit card payments are priced by issuer and number of installments.
///
/// A schedule without installment plans is a flat-rate card and uses the base
/// percentage. Otherwise exactly one plan must match the request's issuer and
/// installments.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardStrategy;

impl CreditCardStrategy {
    fn card_company(request: &PaymentRequest) -> Result<CardCompany> {
        request.card_company.ok_or(PricingError::MissingCardCompany)
    }
}

impl PricingStrategy for CreditCardStrategy {
    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        Self::card_company(request).map(|_| ())
    }

    fn compute_final_price(
        &self,
        request: &PaymentRequest,
        schedule: &FeeSchedule,
    ) -> Result<Decimal> {
        let card_company = Self::card_company(request)?;

        if !schedule.has_installment_plans() {
            return apply_percentage(request.price, schedule.base_percentage);
        }

        let plan = schedule
            .find_plan(card_company, request.installments)?
            .ok_or(PricingError::NoMatchingPlan {
                card_company,
                installments: request.installments,
            })?;

        apply_percentage(request.price, plan.percentage)
    }
}
