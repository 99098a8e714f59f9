use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Quantity = Quantity(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, &'static str> {
        if value < Decimal::ZERO {
            return Err("Quantity cannot be negative");
        }
        Ok(Quantity(value))
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Subtraction that floors at zero
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let diff = self.0 - rhs.0;
        if diff < Decimal::ZERO {
            Quantity::ZERO
        } else {
            Quantity(diff)
        }
    }

    pub fn min(self, other: Self) -> Self {
        Quantity(self.0.min(other.0))
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Quantity(value)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity(Decimal::from(value))
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Decimal {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity(self.0 - rhs.0)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative() {
        assert!(Quantity::new(dec!(-0.5)).is_err());
        assert!(Quantity::new(dec!(10)).is_ok());
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = Quantity::from(dec!(10));
        let b = Quantity::from(dec!(20));
        assert_eq!(a.saturating_sub(b), Quantity::ZERO);
        assert_eq!(b.saturating_sub(a), Quantity::from(dec!(10)));
    }

    #[test]
    fn min_picks_smaller() {
        let a = Quantity::from(dec!(8));
        let b = Quantity::from(dec!(5));
        assert_eq!(a.min(b), b);
    }
}
