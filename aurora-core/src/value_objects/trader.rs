use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the trader that owns an order; also the key the PnL ledger
/// accumulates cash under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraderId(String);

impl TraderId {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s: String = value.into();
        let s = s.trim().to_string();
        if s.is_empty() {
            return Err("Trader id cannot be empty");
        }
        if s.len() > 64 {
            return Err("Trader id too long (max 64 chars)");
        }
        Ok(TraderId(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TraderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for TraderId {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TraderId::new(value)
    }
}

impl TryFrom<String> for TraderId {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        TraderId::new(value)
    }
}
