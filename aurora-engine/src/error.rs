use thiserror::Error;

/// Errors surfaced synchronously at the submission boundary. Matching itself
/// cannot fail once an order is validated and enqueued: every unit of
/// quantity is either traded or left resting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Engine queue is closed")]
    QueueClosed,
}

pub type Result<T> = std::result::Result<T, EngineError>;
