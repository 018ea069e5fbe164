use crate::domain::fee_schedule::FeeSchedule;
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::PricingStrategy;
use crate::domain::price::apply_percentage;
use crate::error::Result;
use rust_decimal::Decimal;

/// Cash payments get the schedule's flat percentage, usually a discount.
#[derive(Debug, Default, Clone, Copy)]
pub struct CashStrategy;

impl PricingStrategy for CashStrategy {
    fn compute_final_price(
        &self,
        request: &PaymentRequest,
        schedule: &FeeSchedule,
    ) -> Result<Decimal> {
        apply_percentage(request.price, schedule.base_percentage)
    }
}
