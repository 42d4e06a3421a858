//! The value/label pattern shared by every constant table.
//!
//! A member carries a primary numeric value, an optional short label and a
//! symbolic name. Comparison against foreign operands goes through
//! [`matches`], which takes a tagged [`Operand`] instead of overloading on
//! argument type. The per-table `PartialEq` impls are thin wrappers around it.
//!
//! Lookups are linear scans over the table's member slice; no table is large
//! enough for an index to pay off.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::TallyError;

// ---------------------------------------------------------------------------
// Operands
// ---------------------------------------------------------------------------

/// A raw number on the right-hand side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Parse a numeric string. Integers are tried first, then floats, so
    /// `"404"` and `"404.0"` both resolve. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Some(Self::Int(v));
        }
        s.parse::<f64>().ok().map(Self::Float)
    }

    /// Whether this number equals the integer `value`.
    #[inline]
    pub fn eq_value(self, value: i64) -> bool {
        match self {
            Self::Int(v) => v == value,
            Self::Float(f) => f == value as f64,
        }
    }

    /// Whether `value` is strictly greater than this number.
    ///
    /// Always `false` for NaN.
    #[inline]
    pub fn is_below(self, value: i64) -> bool {
        match self {
            Self::Int(v) => value > v,
            Self::Float(f) => (value as f64) > f,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! numeric_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeric {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

numeric_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Numeric {
    fn from(v: u64) -> Self {
        i64::try_from(v).map(Self::Int).unwrap_or(Self::Float(v as f64))
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Right-hand side of a member comparison: another member of the same table,
/// a raw number or a raw string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a, M> {
    Member(M),
    Numeric(Numeric),
    Text(&'a str),
}

impl<'a, M> From<&'a str> for Operand<'a, M> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<M> From<Numeric> for Operand<'_, M> {
    fn from(n: Numeric) -> Self {
        Self::Numeric(n)
    }
}

impl<M> From<i64> for Operand<'_, M> {
    fn from(v: i64) -> Self {
        Self::Numeric(Numeric::Int(v))
    }
}

impl<M> From<f64> for Operand<'_, M> {
    fn from(v: f64) -> Self {
        Self::Numeric(Numeric::Float(v))
    }
}

// ---------------------------------------------------------------------------
// Table trait
// ---------------------------------------------------------------------------

/// A closed table of named constants keyed by a numeric value.
pub trait ValueName: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Table name used in errors and the registry.
    const TABLE: &'static str;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    /// The primary numeric value.
    fn value(self) -> i64;

    /// The short string label, if the table has one.
    fn label(self) -> Option<&'static str>;

    /// The symbolic name fixed at definition time (e.g. `HOUR_1`).
    fn symbol(self) -> &'static str;

    /// Compare a raw string against this member.
    ///
    /// Default: parse `text` as a number and compare with the value; only if
    /// that fails, compare it exactly with the label. `"1"` is therefore
    /// always read as a number, never as a label.
    fn matches_text(self, text: &str) -> bool {
        match Numeric::parse(text) {
            Some(n) => n.eq_value(self.value()),
            None => self.label() == Some(text),
        }
    }
}

/// Compare `member` against any supported operand.
///
/// Total: never fails, unmatched operand kinds are simply unequal.
pub fn matches<M: ValueName>(member: M, other: Operand<'_, M>) -> bool {
    match other {
        Operand::Member(m) => member.value() == m.value(),
        Operand::Numeric(n) => n.eq_value(member.value()),
        Operand::Text(t) => member.matches_text(t),
    }
}

/// First member whose primary value equals `value`.
///
/// Crate-internal: each table wraps it in its own soft or strict lookup.
pub(crate) fn find_by_value<M: ValueName>(value: i64) -> Option<M> {
    M::members().iter().copied().find(|m| m.value() == value)
}

/// `(value, label)` pairs for every labelled member of `M`.
pub fn options<M: ValueName>() -> Vec<(i64, &'static str)> {
    M::members().iter().filter_map(|m| m.label().map(|l| (m.value(), l))).collect()
}

/// Number of members in `M`.
pub fn member_count<M: ValueName>() -> usize {
    M::members().len()
}

/// Check that values, labels and symbolic names are unique within `M`.
pub fn validate<M: ValueName>() -> Result<(), TallyError> {
    let members = M::members();
    let mut values: HashMap<i64, &'static str> = HashMap::with_capacity(members.len());
    let mut labels: HashMap<&'static str, &'static str> = HashMap::with_capacity(members.len());
    let mut symbols: HashSet<&'static str> = HashSet::with_capacity(members.len());

    for m in members.iter().copied() {
        if let Some(first) = values.insert(m.value(), m.symbol()) {
            return Err(TallyError::DuplicateValue {
                table: M::TABLE,
                value: m.value(),
                first,
                second: m.symbol(),
            });
        }
        if let Some(label) = m.label() {
            if let Some(first) = labels.insert(label, m.symbol()) {
                return Err(TallyError::DuplicateLabel {
                    table: M::TABLE,
                    label,
                    first,
                    second: m.symbol(),
                });
            }
        }
        if !symbols.insert(m.symbol()) {
            return Err(TallyError::DuplicateSymbol {
                table: M::TABLE,
                symbol: m.symbol(),
            });
        }
    }

    debug!(table = M::TABLE, members = members.len(), "table validated");
    Ok(())
}

// ---------------------------------------------------------------------------
// Compile-time uniqueness
// ---------------------------------------------------------------------------

/// Byte-wise string equality usable in `const` context.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Fail the build if two members of `$ty::ALL` share `$key()`.
///
/// `values` compares with `!=`, `labels` compares `&'static str` keys.
macro_rules! assert_unique {
    (values $ty:ty, $key:ident) => {
        const _: () = {
            let all = <$ty>::ALL;
            let mut i = 0;
            while i < all.len() {
                let mut j = i + 1;
                while j < all.len() {
                    assert!(
                        all[i].$key() != all[j].$key(),
                        concat!("duplicate ", stringify!($key), " in ", stringify!($ty))
                    );
                    j += 1;
                }
                i += 1;
            }
        };
    };
    (labels $ty:ty, $key:ident) => {
        const _: () = {
            let all = <$ty>::ALL;
            let mut i = 0;
            while i < all.len() {
                let mut j = i + 1;
                while j < all.len() {
                    assert!(
                        !$crate::types::value_name::str_eq(all[i].$key(), all[j].$key()),
                        concat!("duplicate ", stringify!($key), " in ", stringify!($ty))
                    );
                    j += 1;
                }
                i += 1;
            }
        };
    };
}

pub(crate) use assert_unique;
