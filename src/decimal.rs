use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money type backed by exact decimal arithmetic.
///
/// Arithmetic keeps the full 28-digit precision of the underlying decimal;
/// nothing rounds until a caller asks for the 2-decimal monetary value via
/// [`Money::round_display`], which rounds half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount (rupees, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to the 2-decimal monetary display scale, half-up
    pub fn round_display(&self) -> Self {
        self.round_dp(2)
    }

    /// round to specified decimal places, half-up
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

/// annual interest rate stored as a fraction (0.065 for 6.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal fraction (e.g., 0.065 for 6.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from an annual percentage (e.g., 6.5 for 6.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_rounding_is_half_up() {
        let m = Money::from_decimal(dec!(3739.726027));
        assert_eq!(m.round_display(), Money::from_decimal(dec!(3739.73)));

        // exact midpoint rounds away from zero, not to even
        let midpoint = Money::from_decimal(dec!(2.345));
        assert_eq!(midpoint.round_display(), Money::from_decimal(dec!(2.35)));

        let low = Money::from_decimal(dec!(2.344));
        assert_eq!(low.round_display(), Money::from_decimal(dec!(2.34)));
    }

    #[test]
    fn test_arithmetic_keeps_precision() {
        let m = Money::from_major(100_000) * dec!(0.075) * dec!(182) / dec!(365);
        assert_eq!(m.round_display().to_string(), "3739.73");
    }

    #[test]
    fn test_rate_percentage_round_trip() {
        let rate = Rate::from_percentage(dec!(6.5));
        assert_eq!(rate.as_decimal(), dec!(0.065));
        assert_eq!(rate.as_percentage(), dec!(6.5));
        assert_eq!(rate.to_string(), "6.5%");
    }

    #[test]
    fn test_money_comparisons() {
        let thousand = Money::from_major(1000);
        assert!(Money::from_major(999) < thousand);
        assert!(Money::from_str_exact("999.99").unwrap() < thousand);
        assert!(Money::from_decimal(dec!(-1)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert_eq!(Money::from_decimal(dec!(-5)).max(Money::ZERO), Money::ZERO);
    }
}
