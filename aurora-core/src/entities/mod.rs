mod order;
mod price_level;
mod trade;

pub use order::{Order, OrderStatus};
pub use price_level::PriceLevel;
pub use trade::Trade;
