use thiserror::Error;

/// Why an issuance call did not produce an address.
///
/// `Clone` so the last failure can be kept in the per-kind state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IssuanceError {
    #[error("node RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("issuance rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Other(String),
}
