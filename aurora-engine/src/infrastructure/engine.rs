use crate::domain::{MatchPolicy, MetricsSnapshot, OrderBook, PnlLedger, TradeMetrics};
use crate::error::{EngineError, Result};
use crate::infrastructure::command::{DepthResponse, EngineCommand, EngineStats, MarketSnapshot};
use crate::infrastructure::publisher::{BroadcastEventPublisher, EventSink};
use aurora_core::{
    EngineEvent, Order, OrderId, Price, Quantity, Side, Symbol, TraderId,
};
use chrono::Utc;
use crossbeam_channel::{Receiver, Sender, bounded};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use tokio::sync::{broadcast, oneshot};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Channel buffer size for commands; submitters block only when this
    /// many commands are already queued
    pub command_buffer_size: usize,
    /// Matching scan policy
    pub match_policy: MatchPolicy,
    /// Event broadcast capacity
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 10_000,
            match_policy: MatchPolicy::ScanAll,
            event_capacity: 10_000,
        }
    }
}

// Engine lifecycle constants
const ENGINE_STATE_ALIVE: u8 = 0;
const ENGINE_STATE_SHUTTING_DOWN: u8 = 1;
const ENGINE_STATE_DEAD: u8 = 2;

/// Handle to communicate with the engine thread. Cheap to clone; every
/// submitter and reader holds one of these, never the structures themselves.
#[derive(Clone)]
pub struct EngineHandle {
    sender: Sender<EngineCommand>,
    events: BroadcastEventPublisher,
    next_order_id: Arc<AtomicU64>,
    orders_processed: Arc<AtomicU64>,
    orders_rested: Arc<AtomicU64>,
    trades_executed: Arc<AtomicU64>,
    state: Arc<AtomicU8>,
}

impl EngineHandle {
    /// Validate and enqueue a limit order, returning its id. Rejections
    /// (`InvalidOrder`) happen here, before anything is enqueued; matching
    /// itself happens on the engine thread.
    pub fn submit_order(
        &self,
        trader: &str,
        side: Side,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderId> {
        let trader =
            TraderId::new(trader).map_err(|e| EngineError::InvalidOrder(e.to_string()))?;
        let symbol = Symbol::new(symbol).map_err(|e| EngineError::InvalidOrder(e.to_string()))?;
        if quantity <= Decimal::ZERO {
            return Err(EngineError::InvalidOrder(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        if price <= Decimal::ZERO {
            return Err(EngineError::InvalidOrder(
                "Price must be greater than zero".to_string(),
            ));
        }

        let id = self.next_order_id.fetch_add(1, Ordering::Relaxed);
        let order = Order::new_limit(
            id,
            trader,
            symbol,
            side,
            Quantity::from(quantity),
            Price::from(price),
        );

        self.send(EngineCommand::SubmitOrder { order })?;
        Ok(id)
    }

    /// Aggregated ladder rows for both sides, truncated to `depth`
    pub async fn depth(&self, depth: usize) -> Result<DepthResponse> {
        let (tx, rx) = oneshot::channel();
        self.send(EngineCommand::GetDepth {
            depth,
            response: tx,
        })?;
        rx.await.map_err(|_| EngineError::QueueClosed)
    }

    /// Running trade metrics
    pub async fn metrics(&self) -> Result<MetricsSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(EngineCommand::GetMetrics { response: tx })?;
        rx.await.map_err(|_| EngineError::QueueClosed)
    }

    /// Per-trader signed cash
    pub async fn pnl(&self) -> Result<HashMap<TraderId, Decimal>> {
        let (tx, rx) = oneshot::channel();
        self.send(EngineCommand::GetPnl { response: tx })?;
        rx.await.map_err(|_| EngineError::QueueClosed)
    }

    /// One consistent point-in-time view of ladder and metrics
    pub async fn snapshot(&self, depth: usize) -> Result<MarketSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(EngineCommand::GetSnapshot {
            depth,
            response: tx,
        })?;
        rx.await.map_err(|_| EngineError::QueueClosed)
    }

    /// Subscribe to engine events (accepted orders, rests, trades)
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Engine counters
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            orders_processed: self.orders_processed.load(Ordering::Relaxed),
            orders_rested: self.orders_rested.load(Ordering::Relaxed),
            trades_executed: self.trades_executed.load(Ordering::Relaxed),
            commands_in_queue: self.sender.len(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state.load(Ordering::Acquire) == ENGINE_STATE_ALIVE
    }

    /// Request a cooperative shutdown. The sentinel also unblocks a consumer
    /// parked on an empty queue; commands already queued ahead of it are
    /// still processed.
    pub fn shutdown(&self) -> Result<()> {
        self.state
            .store(ENGINE_STATE_SHUTTING_DOWN, Ordering::Release);
        self.sender
            .send(EngineCommand::Shutdown)
            .map_err(|_| EngineError::QueueClosed)
    }

    fn send(&self, cmd: EngineCommand) -> Result<()> {
        if !self.is_alive() {
            return Err(EngineError::QueueClosed);
        }
        self.sender.send(cmd).map_err(|_| EngineError::QueueClosed)
    }
}

/// The matching engine: sole owner and mutator of the order book, the PnL
/// ledger and the trade metrics. Consumes commands strictly sequentially on
/// a dedicated thread, which is what makes a trade's ledger pair and metrics
/// increment atomic to every reader.
pub struct MatchingEngine {
    book: OrderBook,
    ledger: PnlLedger,
    metrics: TradeMetrics,
    /// Arrival counter; stamped on orders as they are dequeued
    next_arrival_seq: u64,
    receiver: Receiver<EngineCommand>,
    events: BroadcastEventPublisher,
    orders_processed: Arc<AtomicU64>,
    orders_rested: Arc<AtomicU64>,
    trades_executed: Arc<AtomicU64>,
    state: Arc<AtomicU8>,
}

impl MatchingEngine {
    /// Spawn the engine thread and return its handle
    pub fn spawn(config: EngineConfig) -> (EngineHandle, JoinHandle<()>) {
        let (sender, receiver) = bounded(config.command_buffer_size);
        let events = BroadcastEventPublisher::new(config.event_capacity);
        let orders_processed = Arc::new(AtomicU64::new(0));
        let orders_rested = Arc::new(AtomicU64::new(0));
        let trades_executed = Arc::new(AtomicU64::new(0));
        let state = Arc::new(AtomicU8::new(ENGINE_STATE_ALIVE));

        let handle = EngineHandle {
            sender,
            events: events.clone(),
            next_order_id: Arc::new(AtomicU64::new(1)),
            orders_processed: Arc::clone(&orders_processed),
            orders_rested: Arc::clone(&orders_rested),
            trades_executed: Arc::clone(&trades_executed),
            state: Arc::clone(&state),
        };

        let engine = MatchingEngine {
            book: OrderBook::with_policy(config.match_policy),
            ledger: PnlLedger::new(),
            metrics: TradeMetrics::new(),
            next_arrival_seq: 0,
            receiver,
            events,
            orders_processed,
            orders_rested,
            trades_executed,
            state,
        };

        let thread_handle = thread::Builder::new()
            .name("matching-engine".to_string())
            .spawn(move || {
                engine.run();
            })
            .expect("Failed to spawn engine thread");

        (handle, thread_handle)
    }

    /// Main event loop - processes commands sequentially
    fn run(mut self) {
        tracing::info!(policy = ?self.book.policy(), "Matching engine started");

        loop {
            match self.receiver.recv() {
                Ok(cmd) => {
                    if !self.process_command(cmd) {
                        self.state
                            .store(ENGINE_STATE_SHUTTING_DOWN, Ordering::Release);
                        break;
                    }
                }
                Err(_) => {
                    // Every handle dropped; nothing more can arrive
                    tracing::info!("Engine command channel closed");
                    self.state
                        .store(ENGINE_STATE_SHUTTING_DOWN, Ordering::Release);
                    break;
                }
            }
        }

        self.state.store(ENGINE_STATE_DEAD, Ordering::Release);
        tracing::info!(
            orders = self.orders_processed.load(Ordering::Relaxed),
            trades = self.trades_executed.load(Ordering::Relaxed),
            "Matching engine shutdown complete"
        );
    }

    /// Process a single command, returns false on shutdown
    fn process_command(&mut self, cmd: EngineCommand) -> bool {
        match cmd {
            EngineCommand::SubmitOrder { order } => {
                self.handle_submit(order);
            }

            EngineCommand::GetDepth { depth, response } => {
                let _ = response.send(self.depth_response(depth));
            }

            EngineCommand::GetMetrics { response } => {
                let _ = response.send(self.metrics.snapshot());
            }

            EngineCommand::GetPnl { response } => {
                let _ = response.send(self.ledger.snapshot());
            }

            EngineCommand::GetSnapshot { depth, response } => {
                let _ = response.send(self.market_snapshot(depth));
            }

            EngineCommand::Shutdown => {
                return false;
            }
        }
        true
    }

    fn handle_submit(&mut self, order: Order) {
        let now = Utc::now();
        self.next_arrival_seq += 1;
        let order = order.with_seq(self.next_arrival_seq);

        self.events
            .send(EngineEvent::OrderAccepted((&order).into()));

        let (trades, remaining) = self.book.match_order(order, now);

        self.orders_processed.fetch_add(1, Ordering::Relaxed);
        self.trades_executed
            .fetch_add(trades.len() as u64, Ordering::Relaxed);

        for trade in &trades {
            // Both ledger legs and the metrics increment land before the
            // next command is drained; readers can only ever see whole trades
            self.ledger.apply_trade(trade);
            self.metrics.record(trade);
            self.events.send(EngineEvent::TradeExecuted(trade.into()));
            tracing::debug!(
                symbol = %trade.symbol,
                price = %trade.price,
                quantity = %trade.quantity,
                buyer = %trade.buyer,
                seller = %trade.seller,
                "trade executed"
            );
        }

        if let Some(rest) = remaining {
            self.book.add_order(rest.clone());
            self.orders_rested.fetch_add(1, Ordering::Relaxed);
            self.events.send(EngineEvent::OrderRested((&rest).into()));
        }
    }

    fn depth_response(&self, depth: usize) -> DepthResponse {
        let (bids, asks) = self.book.depth(depth);
        DepthResponse {
            bids,
            asks,
            sequence: self.book.sequence(),
        }
    }

    fn market_snapshot(&self, depth: usize) -> MarketSnapshot {
        let (bids, asks) = self.book.depth(depth);
        MarketSnapshot {
            bids,
            asks,
            metrics: self.metrics.snapshot(),
            sequence: self.book.sequence(),
            timestamp: Utc::now(),
        }
    }
}
