//! Application layer containing the pricing orchestration.
//!
//! This module defines the `PricingContext`, the entry point for pricing a
//! purchase. It resolves a strategy from the `StrategyRegistry` and feeds it the
//! fee schedule returned by the injected provider.

pub mod context;
pub mod registry;
pub mod strategies;
