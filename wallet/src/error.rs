use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("config error: {0}")]
    Config(String),

    #[error("history error: {0}")]
    History(#[from] cryp_history::HistoryError),

    #[error("issuance error: {0}")]
    Issuance(#[from] cryp_receive::IssuanceError),
}
