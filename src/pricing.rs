//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places every monetary output is rounded to.
pub const MONEY_DP: u32 = 2;

/// Errors from monetary arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// A sum, difference or ratio fell outside the `Decimal` range.
    #[error("amount overflowed the representable range")]
    Overflow,
}

/// Rounds a monetary amount to [`MONEY_DP`] places, halves away from zero.
///
/// Apply at output boundaries only; intermediate sums stay unrounded.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums a sequence of prices without rounding.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the running sum leaves the `Decimal` range.
pub fn total_price(prices: impl IntoIterator<Item = Decimal>) -> Result<Decimal, PricingError> {
    prices
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(price))
        .ok_or(PricingError::Overflow)
}

/// `lhs + rhs`, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum leaves the `Decimal` range.
pub fn add_amounts(lhs: Decimal, rhs: Decimal) -> Result<Decimal, PricingError> {
    lhs.checked_add(rhs).ok_or(PricingError::Overflow)
}

/// `lhs - rhs`, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the difference leaves the `Decimal` range.
pub fn subtract_amounts(lhs: Decimal, rhs: Decimal) -> Result<Decimal, PricingError> {
    lhs.checked_sub(rhs).ok_or(PricingError::Overflow)
}

/// Fraction of `whole` that `part` represents.
///
/// A zero `whole` yields zero rather than a division error.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the quotient leaves the `Decimal` range.
pub fn fraction_of(part: Decimal, whole: Decimal) -> Result<Percentage, PricingError> {
    if whole.is_zero() {
        return Ok(Percentage::from(Decimal::ZERO));
    }

    let fraction = part.checked_div(whole).ok_or(PricingError::Overflow)?;

    Ok(Percentage::from(fraction))
}

/// Converts a fractional percentage (e.g. 0.25) to rounded percent points (25.00).
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if scaling by 100 leaves the `Decimal` range.
pub fn percent_points(percentage: Percentage) -> Result<Decimal, PricingError> {
    let points = (percentage * Decimal::ONE)
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(PricingError::Overflow)?;

    Ok(round_money(points))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn round_money_rounds_halves_away_from_zero() {
        assert_eq!(round_money(Decimal::new(1_005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1_015, 3)), Decimal::new(102, 2));
        assert_eq!(round_money(Decimal::new(-1_005, 3)), Decimal::new(-101, 2));
    }

    #[test]
    fn round_money_leaves_two_place_amounts_alone() {
        assert_eq!(round_money(Decimal::new(101_300, 2)), Decimal::new(101_300, 2));
        assert_eq!(round_money(Decimal::from(1013)), Decimal::from(1013));
    }

    #[test]
    fn total_price_sums_without_rounding() -> TestResult {
        let total = total_price([Decimal::new(1_001, 3), Decimal::new(1_001, 3)])?;

        assert_eq!(total, Decimal::new(2_002, 3));

        Ok(())
    }

    #[test]
    fn total_price_of_nothing_is_zero() {
        assert_eq!(total_price([]), Ok(Decimal::ZERO));
    }

    #[test]
    fn total_price_overflow_returns_error() {
        let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;

        assert_eq!(total_price([half, half]), Err(PricingError::Overflow));
    }

    #[test]
    fn add_and_subtract_overflow_return_errors() {
        assert_eq!(add_amounts(Decimal::MAX, Decimal::ONE), Err(PricingError::Overflow));
        assert_eq!(
            subtract_amounts(Decimal::MIN, Decimal::ONE),
            Err(PricingError::Overflow)
        );
        assert_eq!(
            subtract_amounts(Decimal::from(5), Decimal::from(7)),
            Ok(Decimal::from(-2))
        );
    }

    #[test]
    fn fraction_of_zero_whole_is_zero() -> TestResult {
        let fraction = fraction_of(Decimal::from(5), Decimal::ZERO)?;

        assert_eq!(percent_points(fraction)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn percent_points_rounds_to_two_places() -> TestResult {
        let fraction = fraction_of(Decimal::from(45), Decimal::from(1058))?;

        assert_eq!(percent_points(fraction)?, Decimal::new(425, 2));

        Ok(())
    }

    #[test]
    fn fraction_of_overflow_returns_error() {
        let part = Decimal::from_i128_with_scale(-1_000_000_000_000_000_000_000_000_000, 0);

        assert!(matches!(
            fraction_of(part, Decimal::new(1, 2)),
            Err(PricingError::Overflow)
        ));
    }

    #[test]
    fn percent_points_overflow_returns_error() -> TestResult {
        let fraction = fraction_of(Decimal::MAX, Decimal::TWO)?;

        assert_eq!(percent_points(fraction), Err(PricingError::Overflow));

        Ok(())
    }
}
