//! Actions a trader can take.
//!
//! The integer value is the primary key so actions line up with model output
//! indices. There is no separate label: the symbolic name (`BUY`, `SELL`)
//! doubles as the string key, matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value_name::{self, Numeric, Operand, ValueName, assert_unique};
use crate::error::TallyError;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum TradeAction {
    Buy = 0,
    Sell = 1,
}

impl TradeAction {
    pub const ALL: &'static [TradeAction] = &[Self::Buy, Self::Sell];

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Action for `name`, ignoring case (`"buy"`, `"BUY"`, `"Buy"`).
    pub fn from_name(name: &str) -> Result<Self, TallyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TallyError::not_found(Self::TABLE, "name", name))
    }

    /// Action for an integer value.
    pub fn from_value(value: i64) -> Result<Self, TallyError> {
        value_name::find_by_value(value).ok_or_else(|| TallyError::not_found(Self::TABLE, "value", value))
    }
}

assert_unique!(labels TradeAction, name);

impl ValueName for TradeAction {
    const TABLE: &'static str = "trade_action";

    fn members() -> &'static [Self] {
        Self::ALL
    }

    fn value(self) -> i64 {
        i64::from(TradeAction::value(self))
    }

    fn label(self) -> Option<&'static str> {
        None
    }

    fn symbol(self) -> &'static str {
        self.name()
    }

    /// Case-insensitive name match. Numeric strings are not parsed.
    fn matches_text(self, text: &str) -> bool {
        self.name().eq_ignore_ascii_case(text)
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TradeAction {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i64> for TradeAction {
    type Error = TallyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl PartialEq<i64> for TradeAction {
    fn eq(&self, other: &i64) -> bool {
        value_name::matches(*self, Operand::Numeric(Numeric::from(*other)))
    }
}

impl PartialEq<TradeAction> for i64 {
    fn eq(&self, other: &TradeAction) -> bool {
        other == self
    }
}

impl PartialEq<str> for TradeAction {
    fn eq(&self, other: &str) -> bool {
        value_name::matches(*self, Operand::Text(other))
    }
}

impl PartialEq<&str> for TradeAction {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<TradeAction> for &str {
    fn eq(&self, other: &TradeAction) -> bool {
        other == self
    }
}
