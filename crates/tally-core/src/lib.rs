//! # tally-core
//!
//! Named, comparable constants for other systems to share:
//!
//! - **Types** (`types`) — HTTP status codes, trade actions, sampling
//!   frequencies, and the value/label comparison pattern they share
//! - **Registry** (`registry`) — static list of tables, option export, validation
//! - **Configuration** (`config`) — JSON config for the CLI front end
//! - **Error types** (`error`) — `TallyError` via thiserror
//! - **Logging** (`logging`) — tracing-based structured logging
//!
//! ```
//! use tally_core::{Frequency, HttpStatus, TradeAction};
//!
//! assert_eq!(HttpStatus::from_code(404), Some(HttpStatus::NotFound));
//! assert_eq!(HttpStatus::from_code(999), None);
//! assert_eq!(Frequency::from_secs(3600).unwrap(), Frequency::Hour1);
//! assert!(TradeAction::from_name("Hold").is_err());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod types;

pub use error::TallyError;
// Re-export types at crate root for convenience.
pub use types::*;
