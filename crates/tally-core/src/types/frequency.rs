//! Sampling resolutions for time-series data.
//!
//! Codes follow the common exchange convention (`"1m"`, `"4h"`, `"1d"`) but
//! are not guaranteed to be valid for any particular API without mapping:
//! Binance, for one, uses `"M"` for month and `"m"` for minute. These are also
//! unrelated to pandas offset aliases.
//!
//! Both keys are unique per table. Seconds are checked as well as codes: a
//! `("60m", 3600)` entry next to `("1h", 3600)` would fail the build.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::value_name::{self, Numeric, Operand, ValueName, assert_unique};
use crate::error::TallyError;

macro_rules! frequencies {
    ($( $variant:ident => $code:literal, $secs:literal, $symbol:literal; )+) => {
        /// Time-series sampling frequency.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Frequency {
            $( #[serde(rename = $code)] $variant, )+
        }

        impl Frequency {
            /// Every frequency, in declaration order.
            pub const ALL: &'static [Frequency] = &[$(Frequency::$variant,)+];

            /// Short code, e.g. `"1h"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Frequency::$variant => $code,)+
                }
            }

            /// Length of one period in seconds, e.g. `3600`.
            pub const fn as_seconds(self) -> u64 {
                match self {
                    $(Frequency::$variant => $secs,)+
                }
            }

            /// Symbolic name, e.g. `"HOUR_1"`.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Frequency::$variant => $symbol,)+
                }
            }
        }
    };
}

frequencies! {
    Min1   => "1m",  60,      "MIN_1";
    Min2   => "2m",  120,     "MIN_2";
    Min3   => "3m",  180,     "MIN_3";
    Min5   => "5m",  300,     "MIN_5";
    Min15  => "15m", 900,     "MIN_15";
    Min30  => "30m", 1800,    "MIN_30";
    Min90  => "90m", 5400,    "MIN_90";
    Hour1  => "1h",  3600,    "HOUR_1";
    Hour2  => "2h",  7200,    "HOUR_2";
    Hour4  => "4h",  14_400,  "HOUR_4";
    Hour6  => "6h",  21_600,  "HOUR_6";
    Hour8  => "8h",  28_800,  "HOUR_8";
    Hour12 => "12h", 43_200,  "HOUR_12";
    Day1   => "1d",  86_400,  "DAY_1";
    Day3   => "3d",  259_200, "DAY_3";
    Day5   => "5d",  432_000, "DAY_5";
    Week1  => "1w",  604_800, "WEEK_1";
}

assert_unique!(values Frequency, as_seconds);
assert_unique!(labels Frequency, as_str);
assert_unique!(labels Frequency, symbol);

impl Frequency {
    /// Frequency for a short code. Case-insensitive: `"1H"` finds `HOUR_1`.
    pub fn from_code(code: &str) -> Result<Self, TallyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| TallyError::not_found(Self::TABLE, "code", code))
    }

    /// Frequency whose period is exactly `secs` seconds.
    pub fn from_secs(secs: u64) -> Result<Self, TallyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_seconds() == secs)
            .ok_or_else(|| TallyError::not_found(Self::TABLE, "seconds", secs))
    }

    #[inline]
    pub const fn as_duration(self) -> Duration {
        Duration::from_secs(self.as_seconds())
    }
}

impl ValueName for Frequency {
    const TABLE: &'static str = "frequency";

    fn members() -> &'static [Self] {
        Self::ALL
    }

    fn value(self) -> i64 {
        // Largest period is one week; always fits.
        self.as_seconds() as i64
    }

    fn label(self) -> Option<&'static str> {
        Some(self.as_str())
    }

    fn symbol(self) -> &'static str {
        Frequency::symbol(self)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl PartialEq<u64> for Frequency {
    fn eq(&self, other: &u64) -> bool {
        value_name::matches(*self, Operand::Numeric(Numeric::from(*other)))
    }
}

impl PartialEq<str> for Frequency {
    fn eq(&self, other: &str) -> bool {
        value_name::matches(*self, Operand::Text(other))
    }
}

impl PartialEq<&str> for Frequency {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Frequency> for u64 {
    fn eq(&self, other: &Frequency) -> bool {
        other == self
    }
}

impl PartialEq<Frequency> for &str {
    fn eq(&self, other: &Frequency) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        let symbols: Vec<_> = Frequency::ALL.iter().map(|f| f.symbol()).collect();
        assert_eq!(
            symbols,
            [
                "MIN_1", "MIN_2", "MIN_3", "MIN_5", "MIN_15", "MIN_30", "MIN_90", "HOUR_1", "HOUR_2", "HOUR_4",
                "HOUR_6", "HOUR_8", "HOUR_12", "DAY_1", "DAY_3", "DAY_5", "WEEK_1",
            ]
        );
        // 90m is declared before 1h, so the table is not sorted by period.
        assert!(Frequency::Min90.as_seconds() > Frequency::Hour1.as_seconds());
        assert_eq!(value_name::validate::<Frequency>(), Ok(()));
    }

    #[test]
    fn as_str_spot_checks() {
        assert_eq!(Frequency::Hour1.as_str(), "1h");
        assert_eq!(Frequency::Day1.as_str(), "1d");
        assert_eq!(Frequency::Min15.as_str(), "15m");
        assert_eq!(Frequency::Week1.as_str(), "1w");
        assert_eq!(Frequency::Min5.as_str(), "5m");
    }

    #[test]
    fn as_seconds_spot_checks() {
        assert_eq!(Frequency::Hour1.as_seconds(), 3600);
        assert_eq!(Frequency::Day1.as_seconds(), 86_400);
        assert_eq!(Frequency::Min15.as_seconds(), 900);
        assert_eq!(Frequency::Week1.as_seconds(), 604_800);
        assert_eq!(Frequency::Min5.as_seconds(), 300);
        assert_eq!(Frequency::Hour4.as_duration(), Duration::from_secs(14_400));
    }

    #[test]
    fn display_is_code() {
        for f in Frequency::ALL.iter().copied() {
            assert_eq!(f.to_string(), f.as_str());
            assert_eq!(f.to_string().parse::<Frequency>(), Ok(f));
        }
    }

    #[test]
    fn from_code_finds_every_member() {
        for f in Frequency::ALL.iter().copied() {
            assert_eq!(Frequency::from_code(f.as_str()), Ok(f));
            assert_eq!(Frequency::from_code(&f.as_str().to_uppercase()), Ok(f));
        }
    }

    #[test]
    fn from_code_unknown_is_not_found() {
        let err = Frequency::from_code("1minutely").unwrap_err();
        assert_eq!(
            err,
            TallyError::NotFound {
                table: "frequency",
                kind: "code",
                key: "1minutely".into(),
            }
        );
    }

    #[test]
    fn from_secs() {
        for f in Frequency::ALL.iter().copied() {
            assert_eq!(Frequency::from_secs(f.as_seconds()), Ok(f));
        }
        assert_eq!(Frequency::from_secs(3600), Ok(Frequency::Hour1));
        assert!(Frequency::from_secs(69_420).unwrap_err().is_not_found());
        assert!(Frequency::from_code("69420").unwrap_err().is_not_found());
    }

    #[test]
    fn from_value_round_trip() {
        for f in Frequency::ALL.iter().copied() {
            assert_eq!(value_name::find_by_value::<Frequency>(f.value()), Some(f));
        }
    }

    #[test]
    fn equality() {
        let h = Frequency::Hour1;
        assert!(h == 3600u64);
        assert!(h != 60u64);
        assert!(h == "1h");
        assert!(3600u64 == h);
        assert!(60u64 != h);
        assert!("1h" == h);
        assert!("3600" == h);
        assert!("1H" != h);
        // Numeric strings are read as seconds before the label is tried.
        assert!(h == "3600");
        assert!(h == "3600.0");
        // Label comparison is exact.
        assert!(h != "1H");
        assert!(h != "hour");
        assert!(value_name::matches(h, Operand::Member(Frequency::Hour1)));
        assert!(!value_name::matches(h, Operand::Member(Frequency::Hour2)));
    }

    #[test]
    fn serde_uses_code() {
        assert_eq!(serde_json::to_string(&Frequency::Min15).unwrap(), "\"15m\"");
        let f: Frequency = serde_json::from_str("\"1w\"").unwrap();
        assert_eq!(f, Frequency::Week1);
    }
}
