use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation catalog: {0}")]
    Catalog(String),

    #[error("invalid transaction list: {0}")]
    Records(#[from] serde_json::Error),

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}
