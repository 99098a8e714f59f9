use crate::domain::MetricsSnapshot;
use aurora_core::{Order, PriceLevel, Timestamp, TraderId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::oneshot;

/// Commands processed by the engine thread. Submissions are fire-and-forget;
/// queries carry a reply channel and are answered with point-in-time copies,
/// sequenced behind every earlier submission on the same queue.
#[derive(Debug)]
pub enum EngineCommand {
    /// Submit a validated order for matching
    SubmitOrder { order: Order },

    /// Aggregated ladder rows for both sides
    GetDepth {
        depth: usize,
        response: oneshot::Sender<DepthResponse>,
    },

    /// Running trade metrics
    GetMetrics {
        response: oneshot::Sender<MetricsSnapshot>,
    },

    /// Per-trader signed cash
    GetPnl {
        response: oneshot::Sender<HashMap<TraderId, Decimal>>,
    },

    /// One consistent view of ladder and metrics, for reporting
    GetSnapshot {
        depth: usize,
        response: oneshot::Sender<MarketSnapshot>,
    },

    /// Stop the engine; doubles as the wake-up sentinel for a consumer
    /// parked on an empty queue
    Shutdown,
}

/// Response from a depth query
#[derive(Debug, Clone, Serialize)]
pub struct DepthResponse {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub sequence: u64,
}

/// Immutable point-in-time view of the venue
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub metrics: MetricsSnapshot,
    pub sequence: u64,
    pub timestamp: Timestamp,
}

/// Counters maintained by the engine, readable from any handle
#[derive(Debug, Clone, Default)]
pub struct EngineStats {
    pub orders_processed: u64,
    pub orders_rested: u64,
    pub trades_executed: u64,
    pub commands_in_queue: usize,
}
