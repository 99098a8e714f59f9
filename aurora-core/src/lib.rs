//! Aurora Core Domain
//!
//! Pure domain types for the Aurora matching engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod events;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Order, OrderStatus, PriceLevel, Trade};
pub use events::{EngineEvent, OrderAcceptedEvent, OrderRestedEvent, TradeExecutedEvent};
pub use value_objects::{OrderId, Price, Quantity, Side, Symbol, Timestamp, TradeId, TraderId};
