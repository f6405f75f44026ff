//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator the wallet core talks to (clock, account service,
//! record store, link opener) is abstracted behind a trait. This crate
//! provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod account;
pub mod clock;
pub mod links;
pub mod store;

pub use account::NullAccountService;
pub use clock::NullClock;
pub use links::NullLinkOpener;
pub use store::NullRecordStore;
