//! CRYP wallet host shell.
//!
//! Wires configuration, the history presenter and the address issuance
//! controller together for the `cryp-wallet` command line.

pub mod config;
pub mod error;
pub mod render;

pub use config::WalletConfig;
pub use error::WalletError;
