use crate::value_objects::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// One aggregated row of the market ladder: a price and the summed resting
/// quantity at that price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub quantity: Quantity,
}

impl PriceLevel {
    pub fn new(price: Price, quantity: Quantity) -> Self {
        PriceLevel { price, quantity }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }
}

impl From<(Price, Quantity)> for PriceLevel {
    fn from((price, quantity): (Price, Quantity)) -> Self {
        PriceLevel { price, quantity }
    }
}

impl PartialEq for PriceLevel {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price && self.quantity == other.quantity
    }
}

impl Eq for PriceLevel {}
