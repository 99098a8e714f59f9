use aurora_core::{Price, Quantity, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running totals over every executed trade. Mutated only by the engine
/// thread; readers get a [`MetricsSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct TradeMetrics {
    trade_count: u64,
    total_volume: Quantity,
    total_notional: Decimal,
}

impl TradeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one executed trade; all three counters move together
    pub fn record(&mut self, trade: &Trade) {
        self.trade_count += 1;
        self.total_volume = self.total_volume + trade.quantity;
        self.total_notional += trade.notional();
    }

    pub fn trade_count(&self) -> u64 {
        self.trade_count
    }

    pub fn total_volume(&self) -> Quantity {
        self.total_volume
    }

    pub fn total_notional(&self) -> Decimal {
        self.total_notional
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let avg_price = if self.total_volume.is_zero() {
            None
        } else {
            Some(Price::from(self.total_notional / self.total_volume.inner()))
        };

        MetricsSnapshot {
            trade_count: self.trade_count,
            total_volume: self.total_volume,
            total_notional: self.total_notional,
            avg_price,
        }
    }
}

/// Point-in-time view of the trade metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub trade_count: u64,
    pub total_volume: Quantity,
    pub total_notional: Decimal,
    /// Volume-weighted average price; undefined until the first trade prints
    pub avg_price: Option<Price>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{Side, Symbol, TraderId};
    use rust_decimal_macros::dec;

    fn trade(qty: Decimal, price: Decimal) -> Trade {
        Trade::new(
            Symbol::new("AAPL").unwrap(),
            Price::from(price),
            Quantity::from(qty),
            1,
            2,
            TraderId::new("Alice").unwrap(),
            TraderId::new("Bob").unwrap(),
            Side::Buy,
        )
    }

    #[test]
    fn avg_price_undefined_before_first_trade() {
        let metrics = TradeMetrics::new();
        let snap = metrics.snapshot();
        assert_eq!(snap.trade_count, 0);
        assert_eq!(snap.total_volume, Quantity::ZERO);
        assert_eq!(snap.avg_price, None);
    }

    #[test]
    fn counters_move_together() {
        let mut metrics = TradeMetrics::new();
        metrics.record(&trade(dec!(10), dec!(100)));
        metrics.record(&trade(dec!(5), dec!(110)));

        let snap = metrics.snapshot();
        assert_eq!(snap.trade_count, 2);
        assert_eq!(snap.total_volume, Quantity::from(dec!(15)));
        assert_eq!(snap.total_notional, dec!(1550));
    }

    #[test]
    fn avg_price_is_volume_weighted() {
        let mut metrics = TradeMetrics::new();
        metrics.record(&trade(dec!(10), dec!(100)));
        metrics.record(&trade(dec!(10), dec!(110)));

        let snap = metrics.snapshot();
        assert_eq!(snap.avg_price, Some(Price::from(dec!(105))));
    }
}
