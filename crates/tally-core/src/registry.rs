//! Static registry of every constant table.
//!
//! Tables are registered by hand in [`TABLES`]; nothing is discovered at
//! runtime. Adding a table means adding one line here.

use tracing::info;

use crate::error::TallyError;
use crate::types::value_name::{self, ValueName};
use crate::types::{Frequency, HttpStatus, TradeAction};

/// Type-erased view of one registered table.
#[derive(Debug, Clone, Copy)]
pub struct TableInfo {
    /// Table name, e.g. `"frequency"`.
    pub name: &'static str,
    /// Number of members.
    pub len: fn() -> usize,
    /// `(value, label)` pairs; empty for tables without labels.
    pub options: fn() -> Vec<(i64, &'static str)>,
    /// Uniqueness check over values, labels and symbols.
    pub validate: fn() -> Result<(), TallyError>,
}

impl TableInfo {
    /// Describe the table implemented by `M`.
    pub const fn of<M: ValueName>() -> Self {
        Self {
            name: M::TABLE,
            len: value_name::member_count::<M>,
            options: value_name::options::<M>,
            validate: value_name::validate::<M>,
        }
    }
}

/// Every table, in registration order.
pub static TABLES: &[TableInfo] = &[
    TableInfo::of::<HttpStatus>(),
    TableInfo::of::<TradeAction>(),
    TableInfo::of::<Frequency>(),
];

/// Look a table up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static TableInfo> {
    TABLES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// `(value, label)` pairs across all registered tables, suitable as choices
/// for a form or model field.
pub fn as_options() -> Vec<(i64, &'static str)> {
    TABLES.iter().flat_map(|t| (t.options)()).collect()
}

/// Validate every registered table, stopping at the first failure.
pub fn validate_all() -> Result<(), TallyError> {
    for table in TABLES {
        (table.validate)()?;
    }
    info!(tables = TABLES.len(), "all tables validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tables_registered() {
        let names: Vec<_> = TABLES.iter().map(|t| t.name).collect();
        assert_eq!(names, ["http_status", "trade_action", "frequency"]);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("FREQUENCY").map(|t| t.name), Some("frequency"));
        assert_eq!(find("http_status").map(|t| (t.len)()), Some(62));
        assert!(find("colour").is_none());
    }

    #[test]
    fn options_cover_labelled_tables_in_order() {
        let options = as_options();
        assert_eq!(options.len(), HttpStatus::ALL.len() + Frequency::ALL.len());
        assert_eq!(options.first(), Some(&(100, "Continue")));
        assert_eq!(options.last(), Some(&(604_800, "1w")));
        assert!(options.contains(&(404, "Not Found")));
        assert!(options.contains(&(3600, "1h")));
    }

    #[test]
    fn trade_action_has_no_options() {
        let table = find("trade_action").unwrap();
        assert!((table.options)().is_empty());
        assert_eq!((table.len)(), 2);
    }

    #[test]
    fn every_table_validates() {
        assert_eq!(validate_all(), Ok(()));
    }
}
