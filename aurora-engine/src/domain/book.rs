use aurora_core::{Order, Price, PriceLevel, Quantity, Side, Timestamp, Trade};

use super::matching::{self, MatchPolicy};

/// One side of the book: resting orders kept sorted by price priority with
/// arrival order preserved inside a price level.
///
/// The ladder is venue-wide: entries for every symbol share one sequence,
/// ordered purely by price. The matching scan filters by symbol.
#[derive(Debug, Clone)]
pub struct Ladder {
    side: Side,
    orders: Vec<Order>,
}

impl Ladder {
    pub fn new(side: Side) -> Self {
        Ladder {
            side,
            orders: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Insert a resting order after the contiguous run of equal-or-better
    /// prices, so bids stay non-increasing, asks non-decreasing, and orders
    /// at the same price keep arrival order.
    pub fn insert(&mut self, order: Order) {
        let idx = match self.side {
            Side::Buy => self
                .orders
                .iter()
                .position(|resting| resting.price < order.price),
            Side::Sell => self
                .orders
                .iter()
                .position(|resting| resting.price > order.price),
        }
        .unwrap_or(self.orders.len());
        self.orders.insert(idx, order);
    }

    /// Remove the fully filled order at `index`, preserving the order of the
    /// remaining entries.
    pub fn remove(&mut self, index: usize) -> Order {
        self.orders.remove(index)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting entries front to back (best price first)
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub(crate) fn orders_mut(&mut self) -> &mut Vec<Order> {
        &mut self.orders
    }

    pub fn best_price(&self) -> Option<Price> {
        self.orders.first().map(|o| o.price)
    }

    /// Total remaining quantity resting on this side
    pub fn total_quantity(&self) -> Quantity {
        self.orders
            .iter()
            .map(|o| o.remaining_quantity())
            .fold(Quantity::ZERO, |a, b| a + b)
    }

    /// Aggregate contiguous equal-price runs into ladder rows, front to
    /// back, truncated to `depth`. Read-only.
    pub fn levels(&self, depth: usize) -> Vec<PriceLevel> {
        let mut levels: Vec<PriceLevel> = Vec::new();
        let mut i = 0;
        while i < self.orders.len() && levels.len() < depth {
            let price = self.orders[i].price;
            let mut quantity = Quantity::ZERO;
            while i < self.orders.len() && self.orders[i].price == price {
                quantity = quantity + self.orders[i].remaining_quantity();
                i += 1;
            }
            levels.push(PriceLevel::new(price, quantity));
        }
        levels
    }
}

/// The venue's order book: a bid ladder and an ask ladder, matched under a
/// configurable scan policy. Exclusively owned and mutated by the engine
/// thread.
#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: Ladder,
    asks: Ladder,
    /// Bumped on every mutation; stamped into trades
    sequence: u64,
    policy: MatchPolicy,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::with_policy(MatchPolicy::default())
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        OrderBook {
            bids: Ladder::new(Side::Buy),
            asks: Ladder::new(Side::Sell),
            sequence: 0,
            policy,
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    fn increment_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    pub fn bids(&self) -> &Ladder {
        &self.bids
    }

    pub fn asks(&self) -> &Ladder {
        &self.asks
    }

    /// Best bid price (highest buy order)
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Best ask price (lowest sell order)
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Match an incoming order against the opposite ladder.
    /// Returns the trades and the unmatched remainder (if any); the caller
    /// decides whether the remainder rests via [`OrderBook::add_order`].
    pub fn match_order(&mut self, mut order: Order, now: Timestamp) -> (Vec<Trade>, Option<Order>) {
        let opposite = match order.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };

        let trades = matching::scan(opposite, &mut order, self.policy, now, &mut self.sequence);

        let remaining = if order.remaining_quantity() > Quantity::ZERO {
            Some(order)
        } else {
            None
        };

        (trades, remaining)
    }

    /// Place a resting order into its own-side ladder
    pub fn add_order(&mut self, order: Order) {
        match order.side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        }
        self.increment_sequence();
    }

    /// Aggregated ladder rows for both sides, truncated to `depth`. The
    /// shorter side is not padded; alignment is a presentation concern.
    pub fn depth(&self, depth: usize) -> (Vec<PriceLevel>, Vec<PriceLevel>) {
        (self.bids.levels(depth), self.asks.levels(depth))
    }

    /// Number of resting orders across both sides
    pub fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total remaining quantity resting across both sides
    pub fn total_quantity(&self) -> Quantity {
        self.bids.total_quantity() + self.asks.total_quantity()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::{Symbol, TraderId};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn order(id: u64, side: Side, symbol: &str, qty: Decimal, price: Decimal) -> Order {
        Order::new_limit(
            id,
            TraderId::new(format!("trader-{id}")).unwrap(),
            Symbol::new(symbol).unwrap(),
            side,
            Quantity::from(qty),
            Price::from(price),
        )
        .with_seq(id)
    }

    fn bid_prices(book: &OrderBook) -> Vec<Decimal> {
        book.bids().iter().map(|o| o.price.inner()).collect()
    }

    fn ask_prices(book: &OrderBook) -> Vec<Decimal> {
        book.asks().iter().map(|o| o.price.inner()).collect()
    }

    #[test]
    fn bid_ladder_sorted_descending() {
        let mut book = OrderBook::new();
        for (id, price) in [(1, dec!(100)), (2, dec!(103)), (3, dec!(101))] {
            book.add_order(order(id, Side::Buy, "AAPL", dec!(1), price));
        }
        assert_eq!(bid_prices(&book), vec![dec!(103), dec!(101), dec!(100)]);
        assert_eq!(book.best_bid(), Some(Price::from(dec!(103))));
    }

    #[test]
    fn ask_ladder_sorted_ascending() {
        let mut book = OrderBook::new();
        for (id, price) in [(1, dec!(103)), (2, dec!(100)), (3, dec!(101))] {
            book.add_order(order(id, Side::Sell, "AAPL", dec!(1), price));
        }
        assert_eq!(ask_prices(&book), vec![dec!(100), dec!(101), dec!(103)]);
        assert_eq!(book.best_ask(), Some(Price::from(dec!(100))));
    }

    #[test]
    fn same_price_keeps_arrival_order() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "AAPL", dec!(1), dec!(100)));
        book.add_order(order(2, Side::Sell, "AAPL", dec!(1), dec!(100)));
        book.add_order(order(3, Side::Sell, "AAPL", dec!(1), dec!(100)));

        let ids: Vec<u64> = book.asks().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn first_arrival_fills_first_at_same_price() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "AAPL", dec!(1), dec!(100)));
        book.add_order(order(2, Side::Sell, "AAPL", dec!(1), dec!(100)));

        let (trades, remaining) =
            book.match_order(order(3, Side::Buy, "AAPL", dec!(1), dec!(100)), Utc::now());

        assert!(remaining.is_none());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].seller_order_id, 1);
        assert_eq!(book.asks().orders()[0].id, 2);
    }

    #[test]
    fn trade_executes_at_resting_price() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "AAPL", dec!(10), dec!(100)));

        let (trades, remaining) =
            book.match_order(order(2, Side::Buy, "AAPL", dec!(10), dec!(105)), Utc::now());

        assert!(remaining.is_none());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Price::from(dec!(100)));
        assert_eq!(trades[0].quantity, Quantity::from(dec!(10)));
        assert!(book.is_empty());
    }

    #[test]
    fn partial_fill_walks_price_levels() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "AAPL", dec!(5), dec!(100)));
        book.add_order(order(2, Side::Sell, "AAPL", dec!(5), dec!(101)));

        let (trades, remaining) =
            book.match_order(order(3, Side::Buy, "AAPL", dec!(8), dec!(101)), Utc::now());

        assert!(remaining.is_none());
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].quantity, Quantity::from(dec!(5)));
        assert_eq!(trades[0].price, Price::from(dec!(100)));
        assert_eq!(trades[1].quantity, Quantity::from(dec!(3)));
        assert_eq!(trades[1].price, Price::from(dec!(101)));

        // 2 remain resting at 101
        assert_eq!(book.asks().len(), 1);
        assert_eq!(
            book.asks().orders()[0].remaining_quantity(),
            Quantity::from(dec!(2))
        );
    }

    #[test]
    fn symbol_mismatch_never_trades() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Buy, "MSFT", dec!(10), dec!(50)));

        let (trades, remaining) =
            book.match_order(order(2, Side::Sell, "AAPL", dec!(10), dec!(50)), Utc::now());

        assert!(trades.is_empty());
        let rest = remaining.unwrap();
        assert_eq!(rest.remaining_quantity(), Quantity::from(dec!(10)));
        book.add_order(rest);
        assert_eq!(book.bids().len(), 1);
        assert_eq!(book.asks().len(), 1);
    }

    #[test]
    fn entry_ahead_of_other_symbol_does_not_block() {
        // A cheaper MSFT ask sits ahead of the AAPL ask in the venue-wide
        // ladder; the scan skips it and still fills the AAPL entry behind it.
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "MSFT", dec!(5), dec!(90)));
        book.add_order(order(2, Side::Sell, "AAPL", dec!(5), dec!(100)));

        let (trades, remaining) =
            book.match_order(order(3, Side::Buy, "AAPL", dec!(5), dec!(100)), Utc::now());

        assert!(remaining.is_none());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].seller_order_id, 2);
        assert_eq!(trades[0].price, Price::from(dec!(100)));
        // The MSFT ask is untouched
        assert_eq!(book.asks().orders()[0].id, 1);
    }

    #[test]
    fn scan_all_skips_non_crossing_entries() {
        // An expensive ask ahead of a matchable one can only happen across
        // symbols in a sorted ladder; verify the skip directly with a
        // non-crossing same-symbol entry in front of a crossing other one.
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Sell, "AAPL", dec!(5), dec!(100)));
        book.add_order(order(2, Side::Sell, "TSLA", dec!(5), dec!(101)));
        book.add_order(order(3, Side::Sell, "AAPL", dec!(5), dec!(102)));

        // Buy TSLA at 101: AAPL@100 crosses on price but not symbol; skipped.
        let (trades, remaining) =
            book.match_order(order(4, Side::Buy, "TSLA", dec!(5), dec!(101)), Utc::now());

        assert!(remaining.is_none());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].seller_order_id, 2);
        assert_eq!(ask_prices(&book), vec![dec!(100), dec!(102)]);
    }

    #[test]
    fn price_barrier_stops_at_first_non_crossing_price() {
        let mut book = OrderBook::with_policy(MatchPolicy::PriceBarrier);
        book.add_order(order(1, Side::Sell, "MSFT", dec!(5), dec!(105)));
        book.add_order(order(2, Side::Sell, "AAPL", dec!(5), dec!(110)));

        // The first entry already fails the price test, so the scan ends
        // before reaching the AAPL ask even though it would not cross anyway.
        let (trades, remaining) =
            book.match_order(order(3, Side::Buy, "AAPL", dec!(5), dec!(100)), Utc::now());

        assert!(trades.is_empty());
        assert!(remaining.is_some());
    }

    #[test]
    fn levels_aggregate_equal_price_runs() {
        let mut book = OrderBook::new();
        book.add_order(order(1, Side::Buy, "AAPL", dec!(2), dec!(100)));
        book.add_order(order(2, Side::Buy, "MSFT", dec!(3), dec!(100)));
        book.add_order(order(3, Side::Buy, "AAPL", dec!(4), dec!(99)));

        let (bids, asks) = book.depth(10);
        assert!(asks.is_empty());
        assert_eq!(bids.len(), 2);
        assert_eq!(bids[0], PriceLevel::new(Price::from(dec!(100)), Quantity::from(dec!(5))));
        assert_eq!(bids[1], PriceLevel::new(Price::from(dec!(99)), Quantity::from(dec!(4))));
    }

    #[test]
    fn levels_respect_depth_limit() {
        let mut book = OrderBook::new();
        for (id, price) in [(1, dec!(101)), (2, dec!(102)), (3, dec!(103))] {
            book.add_order(order(id, Side::Sell, "AAPL", dec!(1), price));
        }
        let (_, asks) = book.depth(2);
        assert_eq!(asks.len(), 2);
        assert_eq!(asks[0].price, Price::from(dec!(101)));
        assert_eq!(asks[1].price, Price::from(dec!(102)));
    }

    #[test]
    fn sequence_advances_on_every_mutation() {
        let mut book = OrderBook::new();
        assert_eq!(book.sequence(), 0);

        book.add_order(order(1, Side::Sell, "AAPL", dec!(5), dec!(100)));
        let after_add = book.sequence();
        assert!(after_add > 0);

        let (trades, _) =
            book.match_order(order(2, Side::Buy, "AAPL", dec!(5), dec!(100)), Utc::now());
        assert_eq!(trades.len(), 1);
        assert!(book.sequence() > after_add);
        assert_eq!(trades[0].seq, book.sequence());
    }
}
