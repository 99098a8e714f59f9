use crate::entities::{Order, Trade};
use crate::value_objects::{OrderId, Price, Quantity, Side, Symbol, Timestamp, TradeId, TraderId};
use serde::{Deserialize, Serialize};

/// Domain events emitted by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "camelCase")]
pub enum EngineEvent {
    /// Order was dequeued and entered matching
    OrderAccepted(OrderAcceptedEvent),
    /// Unmatched remainder was placed into the book
    OrderRested(OrderRestedEvent),
    /// Trade occurred
    TradeExecuted(TradeExecutedEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAcceptedEvent {
    pub order_id: OrderId,
    pub trader: TraderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRestedEvent {
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    pub remaining_quantity: Quantity,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeExecutedEvent {
    pub trade_id: TradeId,
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    pub buyer_order_id: OrderId,
    pub seller_order_id: OrderId,
    pub taker_side: Side,
    pub seq: u64,
    pub timestamp: Timestamp,
}

impl From<&Order> for OrderAcceptedEvent {
    fn from(order: &Order) -> Self {
        OrderAcceptedEvent {
            order_id: order.id,
            trader: order.trader.clone(),
            symbol: order.symbol.clone(),
            side: order.side,
            price: order.price,
            quantity: order.quantity,
            timestamp: order.created_at,
        }
    }
}

impl From<&Order> for OrderRestedEvent {
    fn from(order: &Order) -> Self {
        OrderRestedEvent {
            order_id: order.id,
            symbol: order.symbol.clone(),
            side: order.side,
            price: order.price,
            remaining_quantity: order.remaining_quantity(),
            timestamp: order.updated_at,
        }
    }
}

impl From<&Trade> for TradeExecutedEvent {
    fn from(trade: &Trade) -> Self {
        TradeExecutedEvent {
            trade_id: trade.id,
            symbol: trade.symbol.clone(),
            price: trade.price,
            quantity: trade.quantity,
            buyer_order_id: trade.buyer_order_id,
            seller_order_id: trade.seller_order_id,
            taker_side: trade.taker_side,
            seq: trade.seq,
            timestamp: trade.timestamp,
        }
    }
}
