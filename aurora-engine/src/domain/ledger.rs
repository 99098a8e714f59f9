use aurora_core::{Trade, TraderId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-trader signed cash accumulator.
///
/// The buyer is debited quantity x price and the seller credited the same
/// amount, applied as one unit per trade, so the ledger always nets to zero
/// across all traders. Mutated only by the engine thread.
#[derive(Debug, Clone, Default)]
pub struct PnlLedger {
    balances: HashMap<TraderId, Decimal>,
}

impl PnlLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&mut self, trader: &TraderId, amount: Decimal) {
        *self.balances.entry(trader.clone()).or_insert(Decimal::ZERO) += amount;
    }

    pub fn debit(&mut self, trader: &TraderId, amount: Decimal) {
        *self.balances.entry(trader.clone()).or_insert(Decimal::ZERO) -= amount;
    }

    /// Apply both legs of a trade as a single unit
    pub fn apply_trade(&mut self, trade: &Trade) {
        let notional = trade.notional();
        self.debit(&trade.buyer, notional);
        self.credit(&trade.seller, notional);
    }

    /// Signed cash for one trader (zero if the trader never traded)
    pub fn cash(&self, trader: &TraderId) -> Decimal {
        self.balances.get(trader).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn balances(&self) -> &HashMap<TraderId, Decimal> {
        &self.balances
    }

    /// Owned point-in-time copy for reporting
    pub fn snapshot(&self) -> HashMap<TraderId, Decimal> {
        self.balances.clone()
    }

    /// Sum over all traders; zero whenever every trade carried both legs
    pub fn net(&self) -> Decimal {
        self.balances.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
