use crate::value_objects::{OrderId, Price, Quantity, Side, Symbol, Timestamp, TraderId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
}

impl OrderStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Filled)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::PartiallyFilled)
    }
}

/// A limit order. Orders only ever leave the book by filling completely;
/// there is no cancel or modify path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub trader: TraderId,
    pub symbol: Symbol,
    pub side: Side,
    /// Original submitted size
    pub quantity: Quantity,
    pub filled_quantity: Quantity,
    pub price: Price,
    /// Arrival sequence assigned by the engine; tie-break within a price level
    pub seq: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    pub fn new_limit(
        id: OrderId,
        trader: TraderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        let now = Utc::now();
        Order {
            id,
            trader,
            symbol,
            side,
            quantity,
            filled_quantity: Quantity::ZERO,
            price,
            seq: 0,
            status: OrderStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.quantity.saturating_sub(self.filled_quantity)
    }

    pub fn is_filled(&self) -> bool {
        self.filled_quantity >= self.quantity
    }

    pub fn fill(&mut self, quantity: Quantity, now: Timestamp) {
        self.filled_quantity = self.filled_quantity + quantity;
        self.updated_at = now;

        if self.is_filled() {
            self.status = OrderStatus::Filled;
        } else if self.filled_quantity > Quantity::ZERO {
            self.status = OrderStatus::PartiallyFilled;
        }
    }

    /// True when this order's limit overlaps a resting order's price on the
    /// opposite side.
    pub fn crosses(&self, resting_price: Price) -> bool {
        match self.side {
            Side::Buy => resting_price <= self.price,
            Side::Sell => resting_price >= self.price,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.quantity.is_positive() {
            return Err("Quantity must be greater than zero");
        }
        if !self.price.is_positive() {
            return Err("Price must be greater than zero");
        }
        Ok(())
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl std::hash::Hash for Order {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
