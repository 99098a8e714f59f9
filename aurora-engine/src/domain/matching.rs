use aurora_core::{Order, Quantity, Side, Timestamp, Trade};

use super::book::Ladder;

/// How the matching scan treats resting entries that fail the crossing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Walk the whole opposite ladder; entries that fail the symbol or
    /// crossing test are skipped, never treated as a barrier. This is the
    /// venue's historical behavior and the default.
    #[default]
    ScanAll,
    /// Stop at the first entry whose price no longer crosses. The ladder is
    /// price-sorted, so no later entry can cross either; symbol-mismatched
    /// entries at crossing prices are still skipped.
    PriceBarrier,
}

/// Walk `opposite` front to back, trading the aggressor against every
/// crossing same-symbol entry at the *resting* order's price. Fully filled
/// resting entries are removed in place; the scan continues at the same
/// index. Each trade bumps and carries the book sequence.
pub(crate) fn scan(
    opposite: &mut Ladder,
    aggressor: &mut Order,
    policy: MatchPolicy,
    now: Timestamp,
    sequence: &mut u64,
) -> Vec<Trade> {
    let mut trades = Vec::new();
    let mut i = 0;

    while aggressor.remaining_quantity() > Quantity::ZERO && i < opposite.len() {
        let resting_price = opposite.orders()[i].price;

        if !aggressor.crosses(resting_price) {
            match policy {
                MatchPolicy::PriceBarrier => break,
                MatchPolicy::ScanAll => {
                    i += 1;
                    continue;
                }
            }
        }

        if opposite.orders()[i].symbol != aggressor.symbol {
            i += 1;
            continue;
        }

        let resting = &mut opposite.orders_mut()[i];
        let fill_qty = aggressor.remaining_quantity().min(resting.remaining_quantity());

        let (buyer_id, seller_id, buyer, seller) = match aggressor.side {
            Side::Buy => (
                aggressor.id,
                resting.id,
                aggressor.trader.clone(),
                resting.trader.clone(),
            ),
            Side::Sell => (
                resting.id,
                aggressor.id,
                resting.trader.clone(),
                aggressor.trader.clone(),
            ),
        };

        *sequence += 1;
        let trade = Trade::new(
            aggressor.symbol.clone(),
            resting_price,
            fill_qty,
            buyer_id,
            seller_id,
            buyer,
            seller,
            aggressor.side,
        )
        .with_timestamp(now)
        .with_seq(*sequence);
        trades.push(trade);

        aggressor.fill(fill_qty, now);
        resting.fill(fill_qty, now);

        if resting.is_filled() {
            opposite.remove(i);
            continue;
        }
        i += 1;
    }

    trades
}
