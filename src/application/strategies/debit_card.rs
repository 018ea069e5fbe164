use crate::domain::fee_schedule::FeeSchedule;
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::PricingStrategy;
use crate::domain::price::apply_percentage;
use crate::error::Result;
use rust_decimal::Decimal;

/// Debit card payments are single payments priced at the flat percentage.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebitCardStrategy;

impl PricingStrategy for DebitCardStrategy {
    fn compute_final_price(
        &self,
        request: &PaymentRequest,
        schedule: &FeeSchedule,
    ) -> Result<Decimal> {
        apply_percentage(request.price, schedule.base_percentage)
    }
}
