mod book;
mod ledger;
mod matching;
mod metrics;

pub use book::{Ladder, OrderBook};
pub use ledger::PnlLedger;
pub use matching::MatchPolicy;
pub use metrics::{MetricsSnapshot, TradeMetrics};

// Domain types shared through aurora-core
pub use aurora_core::{
    EngineEvent, Order, OrderAcceptedEvent, OrderId, OrderRestedEvent, OrderStatus, Price,
    PriceLevel, Quantity, Side, Symbol, Timestamp, Trade, TradeExecutedEvent, TradeId, TraderId,
};
