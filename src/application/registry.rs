use super::strategies::{CashStrategy, CreditCardStrategy, DebitCardStrategy};
use crate::domain::payment::PaymentMethodType;
use crate::domain::ports::{PricingStrategyBox, PricingStrategyFactory};
use std::collections::HashMap;

/// Maps each payment method type to the factory of its pricing strategy.
///
/// Built once at startup. Every resolution creates a fresh strategy, so the
/// registry holds no state shared between calls.
#[derive(Default)]
pub struct StrategyRegistry {
    factories: HashMap<PaymentMethodType, PricingStrategyFactory>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the cash, debit card and credit card strategies.
    pub fn with_default_strategies() -> Self {
        let mut registry = Self::new();
        registry.register(PaymentMethodType::Cash, || Box::new(CashStrategy));
        registry.register(PaymentMethodType::DebitCard, || Box::new(DebitCardStrategy));
        registry.register(PaymentMethodType::CreditCard, || Box::new(CreditCardStrategy));
        registry
    }

    /// Registers `factory` for `payment_method_type`, replacing any previous one.
    pub fn register<F>(&mut self, payment_method_type: PaymentMethodType, factory: F)
    where
        F: Fn() -> PricingStrategyBox + Send + Sync + 'static,
    {
        self.factories.insert(payment_method_type, Box::new(factory));
    }

    /// Returns a strategy for `payment_method_type`, or `None` if unregistered.
    pub fn resolve(&self, payment_method_type: PaymentMethodType) -> Option<PricingStrategyBox> {
        self.factories.get(&payment_method_type).map(|factory| factory())
    }
}
