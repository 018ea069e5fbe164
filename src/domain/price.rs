use crate::error::{PricingError, Result};
use rust_decimal::Decimal;

/// Adjusts `price` by `percentage` percent.
///
/// Negative percentages are discounts, positive ones surcharges. A zero
/// percentage returns the price untouched so its scale is preserved.
/// Results outside the `Decimal` range fail with `PriceOverflow`.
pub fn apply_percentage(price: Decimal, percentage: Decimal) -> Result<Decimal> {
    if percentage.is_zero() {
        return Ok(price);
    }
    percentage
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|rate| Decimal::ONE.checked_add(rate))
        .and_then(|factor| price.checked_mul(factor))
        .ok_or(PricingError::PriceOverflow { price, percentage })
}
