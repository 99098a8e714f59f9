use crate::error::EngineError;
use crate::infrastructure::engine::EngineHandle;
use aurora_core::Side;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::time::Duration;

/// Configuration for the synthetic order feeder
#[derive(Debug, Clone)]
pub struct FeederConfig {
    /// Symbols to draw from
    pub symbols: Vec<String>,
    /// Traders to draw from
    pub traders: Vec<String>,
    /// Quantities are drawn uniformly from 1..=max_quantity
    pub max_quantity: i64,
    /// Integer limit prices drawn uniformly from min_price..=max_price
    pub min_price: i64,
    pub max_price: i64,
    /// Delay between generated orders
    pub interval: Duration,
}

impl Default for FeederConfig {
    fn default() -> Self {
        Self {
            symbols: ["AAPL", "MSFT", "TSLA", "GOOG"]
                .map(String::from)
                .to_vec(),
            traders: ["Alice", "Bob", "Charlie", "Dana"]
                .map(String::from)
                .to_vec(),
            max_quantity: 50,
            min_price: 90,
            max_price: 110,
            interval: Duration::from_millis(300),
        }
    }
}

/// One randomly drawn submission
#[derive(Debug, Clone)]
pub struct SyntheticOrder {
    pub trader: String,
    pub side: Side,
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// Generates a stream of random limit orders and submits them to the engine,
/// standing in for external traders.
pub struct OrderFeeder {
    config: FeederConfig,
    rng: StdRng,
}

impl OrderFeeder {
    pub fn new(config: FeederConfig) -> Self {
        Self {
            config,
            rng: SeedableRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(config: FeederConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SeedableRng::seed_from_u64(seed),
        }
    }

    /// Draw the next random order
    pub fn next_order(&mut self) -> SyntheticOrder {
        let trader = self.config.traders[self.rng.gen_range(0..self.config.traders.len())].clone();
        let symbol = self.config.symbols[self.rng.gen_range(0..self.config.symbols.len())].clone();
        let side = if self.rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let quantity = Decimal::from(self.rng.gen_range(1..=self.config.max_quantity));
        let price =
            Decimal::from(self.rng.gen_range(self.config.min_price..=self.config.max_price));

        SyntheticOrder {
            trader,
            side,
            symbol,
            quantity,
            price,
        }
    }

    /// Submit `count` orders, pausing `interval` between them. Stops early
    /// when the engine has shut down.
    pub async fn run_count(mut self, handle: EngineHandle, count: usize) {
        for _ in 0..count {
            if !self.submit_next(&handle) {
                return;
            }
            tokio::time::sleep(self.config.interval).await;
        }
    }

    /// Submit orders until the engine shuts down
    pub async fn run(mut self, handle: EngineHandle) {
        loop {
            if !self.submit_next(&handle) {
                return;
            }
            tokio::time::sleep(self.config.interval).await;
        }
    }

    fn submit_next(&mut self, handle: &EngineHandle) -> bool {
        let order = self.next_order();
        match handle.submit_order(
            &order.trader,
            order.side,
            &order.symbol,
            order.quantity,
            order.price,
        ) {
            Ok(id) => {
                tracing::debug!(
                    id,
                    trader = %order.trader,
                    side = %order.side,
                    symbol = %order.symbol,
                    quantity = %order.quantity,
                    price = %order.price,
                    "feeder submitted order"
                );
                true
            }
            Err(EngineError::QueueClosed) => {
                tracing::info!("feeder stopping, engine queue closed");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "feeder order rejected");
                true
            }
        }
    }
}
