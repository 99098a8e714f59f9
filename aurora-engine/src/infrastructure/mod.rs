mod command;
mod engine;
mod feeder;
mod publisher;
mod reporter;

pub use command::{DepthResponse, EngineCommand, EngineStats, MarketSnapshot};
pub use engine::{EngineConfig, EngineHandle, MatchingEngine};
pub use feeder::{FeederConfig, OrderFeeder, SyntheticOrder};
pub use publisher::{BroadcastEventPublisher, EventSink};
pub use reporter::{Reporter, ReporterConfig, render_ladder, render_metrics};
