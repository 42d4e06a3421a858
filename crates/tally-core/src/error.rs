//! Typed error definitions for the constant tables.
//!
//! Provides [`TallyError`] for the "fail loudly" lookups and for registry
//! validation. All variants implement `std::error::Error` via `thiserror`, so
//! they integrate with `anyhow::Result` in binaries.
//!
//! Status-code lookups do not use this type: an unknown code is reported as
//! `None`, not as an error.

use thiserror::Error;

/// Errors raised by table lookups and table validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// A lookup matched no member of the table.
    #[error("no {table} member found for {kind} {key:?}")]
    NotFound {
        /// Table name (e.g. `"frequency"`).
        table: &'static str,
        /// Which key was searched (`"name"`, `"value"`, `"code"`, `"seconds"`).
        kind: &'static str,
        /// The key as given by the caller.
        key: String,
    },

    /// Two members of one table share a primary value.
    #[error("{table}: duplicate value {value} ({first} and {second})")]
    DuplicateValue {
        table: &'static str,
        value: i64,
        first: &'static str,
        second: &'static str,
    },

    /// Two members of one table share a label.
    #[error("{table}: duplicate label {label:?} ({first} and {second})")]
    DuplicateLabel {
        table: &'static str,
        label: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// Two members of one table share a symbolic name.
    #[error("{table}: duplicate symbol {symbol}")]
    DuplicateSymbol { table: &'static str, symbol: &'static str },

    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),
}

impl TallyError {
    pub(crate) fn not_found(table: &'static str, kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            table,
            kind,
            key: key.to_string(),
        }
    }

    /// Returns `true` for [`TallyError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_table_and_key() {
        let err = TallyError::not_found("frequency", "seconds", 69420);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no frequency member found for seconds \"69420\"");
    }

    #[test]
    fn duplicate_value_message() {
        let err = TallyError::DuplicateValue {
            table: "frequency",
            value: 3600,
            first: "HOUR_1",
            second: "MIN_60",
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "frequency: duplicate value 3600 (HOUR_1 and MIN_60)");
    }
}
