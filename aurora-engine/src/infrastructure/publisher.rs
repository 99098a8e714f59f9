use aurora_core::EngineEvent;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::broadcast;

/// Event sink callable from the engine thread (sync context)
pub trait EventSink: Send + Sync {
    fn send(&self, event: EngineEvent);
}

/// Broadcast-based event publisher.
///
/// Fans engine events out to any number of subscribers; sending with no
/// subscribers is a no-op rather than an error.
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<EngineEvent>,
    subscriber_count: Arc<AtomicUsize>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        BroadcastEventPublisher {
            tx,
            subscriber_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Subscribe to all engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.subscriber_count.fetch_add(1, Ordering::SeqCst);
        self.tx.subscribe()
    }

    /// Unsubscribe (decrement counter)
    pub fn unsubscribe(&self) {
        self.subscriber_count.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count.load(Ordering::SeqCst)
    }
}

impl EventSink for BroadcastEventPublisher {
    fn send(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.tx.send(event);
    }
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl Clone for BroadcastEventPublisher {
    fn clone(&self) -> Self {
        BroadcastEventPublisher {
            tx: self.tx.clone(),
            subscriber_count: Arc::clone(&self.subscriber_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{Order, OrderAcceptedEvent, Price, Quantity, Side, Symbol, TraderId};
    use rust_decimal_macros::dec;

    fn test_event() -> EngineEvent {
        let order = Order::new_limit(
            1,
            TraderId::new("Alice").unwrap(),
            Symbol::new("AAPL").unwrap(),
            Side::Buy,
            Quantity::from(dec!(1)),
            Price::from(dec!(100)),
        );
        EngineEvent::OrderAccepted(OrderAcceptedEvent::from(&order))
    }

    #[tokio::test]
    async fn subscribe_and_receive() {
        let publisher = BroadcastEventPublisher::new(16);
        let mut rx = publisher.subscribe();

        publisher.send(test_event());

        match rx.recv().await.unwrap() {
            EngineEvent::OrderAccepted(event) => assert_eq!(event.order_id, 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn send_without_subscribers_is_noop() {
        let publisher = BroadcastEventPublisher::new(16);
        publisher.send(test_event());
        assert_eq!(publisher.subscriber_count(), 0);
    }
}
