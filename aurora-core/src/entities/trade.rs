use crate::value_objects::{OrderId, Price, Quantity, Side, Symbol, Timestamp, TradeId, TraderId};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Execution record produced by the matching engine. The price is always the
/// resting order's limit: price improvement accrues to the aggressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    pub buyer_order_id: OrderId,
    pub seller_order_id: OrderId,
    pub buyer: TraderId,
    pub seller: TraderId,
    /// The side of the order that was the aggressor (taker)
    pub taker_side: Side,
    /// Book sequence at execution; orders trades within the venue
    pub seq: u64,
    pub timestamp: Timestamp,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        price: Price,
        quantity: Quantity,
        buyer_order_id: OrderId,
        seller_order_id: OrderId,
        buyer: TraderId,
        seller: TraderId,
        taker_side: Side,
    ) -> Self {
        Trade {
            id: TradeId::new_v4(),
            symbol,
            price,
            quantity,
            buyer_order_id,
            seller_order_id,
            buyer,
            seller,
            taker_side,
            seq: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    /// Notional value of the trade (price * quantity)
    pub fn notional(&self) -> Decimal {
        self.price.inner() * self.quantity.inner()
    }

    /// Buyer was the maker (their order was resting in the book)
    pub fn buyer_is_maker(&self) -> bool {
        self.taker_side == Side::Sell
    }

    /// Returns the maker (resting) order id
    pub fn maker_order_id(&self) -> OrderId {
        if self.buyer_is_maker() {
            self.buyer_order_id
        } else {
            self.seller_order_id
        }
    }

    /// Returns the taker (aggressor) order id
    pub fn taker_order_id(&self) -> OrderId {
        if self.buyer_is_maker() {
            self.seller_order_id
        } else {
            self.buyer_order_id
        }
    }
}

impl PartialEq for Trade {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trade {}

impl std::hash::Hash for Trade {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_trade(taker_side: Side) -> Trade {
        Trade::new(
            Symbol::new("AAPL").unwrap(),
            Price::from(dec!(100)),
            Quantity::from(dec!(10)),
            1,
            2,
            TraderId::new("Alice").unwrap(),
            TraderId::new("Bob").unwrap(),
            taker_side,
        )
    }

    #[test]
    fn notional() {
        assert_eq!(make_trade(Side::Buy).notional(), dec!(1000));
    }

    #[test]
    fn maker_taker_mapping() {
        let trade = make_trade(Side::Buy);
        assert!(!trade.buyer_is_maker());
        assert_eq!(trade.maker_order_id(), 2);
        assert_eq!(trade.taker_order_id(), 1);

        let trade = make_trade(Side::Sell);
        assert!(trade.buyer_is_maker());
        assert_eq!(trade.maker_order_id(), 1);
        assert_eq!(trade.taker_order_id(), 2);
    }
}
