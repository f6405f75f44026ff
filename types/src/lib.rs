//! Fundamental types for the CRYP wallet.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! amounts, timestamps, the clock abstraction, transaction records and address kinds.

pub mod address;
pub mod amount;
pub mod error;
pub mod record;
pub mod time;

pub use address::AddressKind;
pub use amount::CrypAmount;
pub use error::TypesError;
pub use record::{Categories, CategoryTag, InstantStatus, RecordKey, TransactionRecord};
pub use time::{Clock, SystemClock, Timestamp};
