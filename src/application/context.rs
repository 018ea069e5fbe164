use super::registry::StrategyRegistry;
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::FeeScheduleProviderBox;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;

/// The entry point for pricing a purchase.
///
/// `PricingContext` picks the strategy registered for the request's payment
/// method type, fetches the fee schedule configured for the request's payment
/// method id and lets the strategy compute the final price.
pub struct PricingContext {
    registry: StrategyRegistry,
    fee_schedules: FeeScheduleProviderBox,
}

impl PricingContext {
    /// Creates a new `PricingContext`.
    ///
    /// # Arguments
    ///
    /// * `registry` - The strategies available per payment method type.
    /// * `fee_schedules` - The provider of fee schedules.
    pub fn new(registry: StrategyRegistry, fee_schedules: FeeScheduleProviderBox) -> Self {
        Self {
            registry,
            fee_schedules,
        }
    }

    /// Creates a context with the cash, debit card and credit card strategies.
    pub fn with_default_strategies(fee_schedules: FeeScheduleProviderBox) -> Self {
        Self::new(StrategyRegistry::with_default_strategies(), fee_schedules)
    }

    /// Computes the final price of `request`.
    ///
    /// Strategy failures are returned unchanged. Request checks run before the
    /// fee schedule lookup, so an invalid request never reaches the provider.
    pub async fn calculate_price(&self, request: &PaymentRequest) -> Result<Decimal> {
        let strategy = self
            .registry
            .resolve(request.payment_method_type)
            .ok_or(PricingError::UnknownPaymentMethod(request.payment_method_type))?;

        strategy.validate(request)?;

        let schedule = self
            .fee_schedules
            .lookup(request.payment_method_id)
            .await?
            .ok_or(PricingError::UnknownFeeSchedule(request.payment_method_id))?;

        strategy.compute_final_price(request, &schedule)
    }
}
