//! Currency rounding.
//!
//! Deductions are rounded to whole currency units with round-half-away-from-zero.
//! Every deduction in the engine goes through [`round_currency`] so the rule
//! is applied identically everywhere.

use rust_decimal::{Decimal, RoundingStrategy};

/// The rounding strategy applied to deductions.
pub const CURRENCY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds an amount to the nearest whole currency unit, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("73342.5").unwrap()), Decimal::new(73343, 0));
/// assert_eq!(round_currency(Decimal::from_str("73342.49").unwrap()), Decimal::new(73342, 0));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, CURRENCY_ROUNDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_currency(dec("0.5")), dec("1"));
        assert_eq!(round_currency(dec("215582.5")), dec("215583"));
    }

    #[test]
    fn test_half_on_even_still_rounds_up() {
        // Banker's rounding would give 2 here
        assert_eq!(round_currency(dec("2.5")), dec("3"));
        assert_eq!(round_currency(dec("74827.5")), dec("74828"));
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(round_currency(dec("72599.4999")), dec("72599"));
    }

    #[test]
    fn test_above_half_rounds_up() {
        assert_eq!(round_currency(dec("72599.5001")), dec("72600"));
    }

    #[test]
    fn test_whole_amount_unchanged() {
        assert_eq!(round_currency(dec("72600")), dec("72600"));
        assert_eq!(round_currency(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_negative_half_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("-0.5")), dec("-1"));
    }
}
