use crate::domain::MetricsSnapshot;
use crate::infrastructure::command::MarketSnapshot;
use crate::infrastructure::engine::EngineHandle;
use std::time::Duration;
use tokio::sync::broadcast;

/// Configuration for the periodic reporter
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Ladder rows per side
    pub depth: usize,
    /// Snapshot cadence
    pub interval: Duration,
    /// Snapshot broadcast capacity
    pub channel_capacity: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            interval: Duration::from_millis(500),
            channel_capacity: 64,
        }
    }
}

/// Read-only periodic snapshot producer. Holds nothing but an engine handle:
/// each tick takes one consistent point-in-time view and republishes it for
/// an external presentation layer.
pub struct Reporter {
    config: ReporterConfig,
    snapshot_tx: broadcast::Sender<MarketSnapshot>,
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        let (snapshot_tx, _) = broadcast::channel(config.channel_capacity);
        Self {
            config,
            snapshot_tx,
        }
    }

    /// Subscribe to the published snapshots
    pub fn subscribe(&self) -> broadcast::Receiver<MarketSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Tick until the engine shuts down
    pub async fn run(self, handle: EngineHandle) {
        let mut tick = tokio::time::interval(self.config.interval);

        loop {
            tick.tick().await;

            match handle.snapshot(self.config.depth).await {
                Ok(snapshot) => {
                    tracing::debug!(
                        sequence = snapshot.sequence,
                        trades = snapshot.metrics.trade_count,
                        "market snapshot published"
                    );
                    // No subscribers is fine
                    let _ = self.snapshot_tx.send(snapshot);
                }
                Err(_) => {
                    tracing::info!("reporter stopping, engine queue closed");
                    return;
                }
            }
        }
    }
}

/// Format a snapshot as a two-column market ladder, padding the shorter side
/// with blanks.
pub fn render_ladder(snapshot: &MarketSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<16} | {:<16}\n", "BUY", "SELL"));
    out.push_str("---------------- | ----------------\n");

    let rows = snapshot.bids.len().max(snapshot.asks.len());
    for i in 0..rows {
        let left = snapshot
            .bids
            .get(i)
            .map(|level| format!("{:>4} @ ${:.2}", level.quantity.to_string(), level.price.inner()))
            .unwrap_or_default();
        let right = snapshot
            .asks
            .get(i)
            .map(|level| format!("{:>4} @ ${:.2}", level.quantity.to_string(), level.price.inner()))
            .unwrap_or_default();
        out.push_str(&format!("{:<16} | {:<16}\n", left, right));
    }
    out
}

/// Format the trade metrics block
pub fn render_metrics(metrics: &MetricsSnapshot) -> String {
    let avg = match metrics.avg_price {
        Some(price) => format!("${:.4}", price.inner()),
        None => "N/A".to_string(),
    };
    format!(
        "Metrics\nTotal trades  {}\nTotal volume  {}\nAvg trade price  {}\n",
        metrics.trade_count, metrics.total_volume, avg
    )
}
