use super::fee_schedule::FeeSchedule;
use super::payment::PaymentRequest;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Source of fee schedules, keyed by payment method configuration id.
#[async_trait]
pub trait FeeScheduleProvider: Send + Sync {
    async fn lookup(&self, payment_method_id: u32) -> Result<Option<FeeSchedule>>;
}

pub type FeeScheduleProviderBox = Box<dyn FeeScheduleProvider>;

/// Pricing algorithm for one family of payment methods.
pub trait PricingStrategy: Send + Sync {
    /// Request-level checks that do not need the fee schedule.
    fn validate(&self, _request: &PaymentRequest) -> Result<()> {
        Ok(())
    }

    fn compute_final_price(
        &self,
        request: &PaymentRequest,
        schedule: &FeeSchedule,
    ) -> Result<Decimal>;
}

pub type PricingStrategyBox = Box<dyn PricingStrategy>;
pub type PricingStrategyFactory = Box<dyn Fn() -> PricingStrategyBox + Send + Sync>;
