//! Error type for the shared CRYP wallet types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid address kind: {0}")]
    InvalidAddressKind(String),
}
