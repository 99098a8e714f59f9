//! Aurora Matching Engine
//!
//! A continuous double-auction limit-order matching engine for a single
//! venue handling multiple symbols and multiple traders, with live
//! per-trader PnL and running trade metrics.
//!
//! # Architecture
//!
//! - **Domain**: order book ladders with price-time priority matching, the
//!   PnL ledger and the trade metrics
//! - **Infrastructure**: the single-writer engine thread fed by a command
//!   channel, broadcast event publishing, a synthetic order feeder and a
//!   periodic reporter
//!
//! All mutation flows through one FIFO command channel into one engine
//! thread that exclusively owns the book, the ledger and the metrics. Every
//! read is answered with a point-in-time copy produced by that same thread,
//! so no reader can ever observe a half-applied trade.
//!
//! # Example
//!
//! ```ignore
//! use aurora_engine::{EngineConfig, MatchingEngine, Side};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (handle, _join) = MatchingEngine::spawn(EngineConfig::default());
//!     handle.submit_order("Alice", Side::Sell, "AAPL", dec!(10), dec!(100)).unwrap();
//!     handle.submit_order("Bob", Side::Buy, "AAPL", dec!(10), dec!(101)).unwrap();
//!     let metrics = handle.metrics().await.unwrap();
//!     assert_eq!(metrics.trade_count, 1);
//! }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    Ladder, MatchPolicy, MetricsSnapshot, OrderBook, PnlLedger, TradeMetrics,
};
pub use error::{EngineError, Result};
pub use infrastructure::{
    BroadcastEventPublisher, DepthResponse, EngineCommand, EngineConfig, EngineHandle,
    EngineStats, EventSink, FeederConfig, MarketSnapshot, MatchingEngine, OrderFeeder, Reporter,
    ReporterConfig, SyntheticOrder, render_ladder, render_metrics,
};

pub use aurora_core::{
    EngineEvent, Order, OrderId, OrderStatus, Price, PriceLevel, Quantity, Side, Symbol,
    Timestamp, Trade, TradeId, TraderId,
};
