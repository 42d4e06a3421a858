//! The constant tables and the comparison pattern they share.
//!
//! Each table is an independent leaf: none of them refers to another.

pub mod frequency;
pub mod http_status;
pub mod trade_action;
pub mod value_name;

pub use frequency::Frequency;
pub use http_status::{HttpStatus, StatusClass};
pub use trade_action::TradeAction;
pub use value_name::{Numeric, Operand, ValueName, matches};
