use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, &'static str> {
        if value < Decimal::ZERO {
            return Err("Price cannot be negative");
        }
        Ok(Price(value))
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
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Price(value)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price(Decimal::from(value))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Decimal {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Price {
    type Output = Price;
    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;
    fn sub(self, rhs: Self) -> Self::Output {
        Price(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Price {
    type Output = Price;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Price(self.0 * rhs)
    }
}

impl Div<Decimal> for Price {
    type Output = Price;
    fn div(self, rhs: Decimal) -> Self::Output {
        Price(self.0 / rhs)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative() {
        assert!(Price::new(dec!(-1)).is_err());
        assert!(Price::new(dec!(0)).is_ok());
        assert!(Price::new(dec!(99.5)).is_ok());
    }

    #[test]
    fn arithmetic() {
        let a = Price::from(dec!(100));
        let b = Price::from(dec!(40));
        assert_eq!(a + b, Price::from(dec!(140)));
        assert_eq!(a - b, Price::from(dec!(60)));
        assert_eq!(a * dec!(2), Price::from(dec!(200)));
        assert_eq!(a / dec!(4), Price::from(dec!(25)));
    }

    #[test]
    fn display() {
        assert_eq!(Price::from(dec!(101.25)).to_string(), "101.25");
    }
}
