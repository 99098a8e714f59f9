mod price;
mod quantity;
mod side;
mod symbol;
mod trader;

pub use price::Price;
pub use quantity::Quantity;
pub use side::Side;
pub use symbol::Symbol;
pub use trader::TraderId;

/// Monotonic order identifier, assigned at submission time
pub type OrderId = u64;

/// Unique identifier for a trade
pub type TradeId = uuid::Uuid;

/// Timestamp in UTC
pub type Timestamp = chrono::DateTime<chrono::Utc>;
