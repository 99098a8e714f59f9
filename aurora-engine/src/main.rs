use aurora_engine::{
    EngineConfig, FeederConfig, MatchingEngine, OrderFeeder, Reporter, ReporterConfig,
    render_ladder, render_metrics,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Realtime simulation mode: synthetic feeders submit random orders while a
/// reporter republishes consistent market snapshots, until the run duration
/// elapses.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aurora_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let feed_interval = Duration::from_millis(env_u64("FEED_INTERVAL_MS", 300));
    let report_interval = Duration::from_millis(env_u64("REPORT_INTERVAL_MS", 500));
    let depth = env_u64("DEPTH", 10) as usize;
    let duration = Duration::from_secs(env_u64("DURATION_SECS", 10));
    let feeders = env_u64("FEEDERS", 2);
    let seed = std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok());

    tracing::info!(
        feeders,
        ?feed_interval,
        ?report_interval,
        depth,
        ?duration,
        "Starting Aurora matching engine"
    );

    let (handle, engine_thread) = MatchingEngine::spawn(EngineConfig::default());

    // Feeder tasks stand in for external traders
    let mut tasks = Vec::new();
    for i in 0..feeders {
        let config = FeederConfig {
            interval: feed_interval,
            ..FeederConfig::default()
        };
        let feeder = match seed {
            Some(seed) => OrderFeeder::with_seed(config, seed.wrapping_add(i)),
            None => OrderFeeder::new(config),
        };
        tasks.push(tokio::spawn(feeder.run(handle.clone())));
    }

    // Reporter republishes consistent snapshots; print them as they arrive
    let reporter = Reporter::new(ReporterConfig {
        depth,
        interval: report_interval,
        ..ReporterConfig::default()
    });
    let mut snapshots = reporter.subscribe();
    tasks.push(tokio::spawn(reporter.run(handle.clone())));
    tasks.push(tokio::spawn(async move {
        while let Ok(snapshot) = snapshots.recv().await {
            println!("{}", render_ladder(&snapshot));
            println!("{}", render_metrics(&snapshot.metrics));
        }
    }));

    tokio::time::sleep(duration).await;

    // Final view before the queue closes
    let final_snapshot = handle.snapshot(depth).await?;
    let pnl = handle.pnl().await?;
    let stats = handle.stats();

    handle.shutdown()?;
    tokio::task::spawn_blocking(move || engine_thread.join())
        .await?
        .expect("engine thread panicked");
    for task in tasks {
        task.abort();
    }

    println!("=== Final market state ===");
    println!("{}", render_ladder(&final_snapshot));
    println!("{}", render_metrics(&final_snapshot.metrics));

    println!("PnL");
    let mut rows: Vec<_> = pnl.iter().collect();
    rows.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    for (trader, cash) in rows {
        println!("{}  ${:.2}", trader, cash);
    }

    tracing::info!(
        orders = stats.orders_processed,
        rested = stats.orders_rested,
        trades = stats.trades_executed,
        "Run complete"
    );

    Ok(())
}
