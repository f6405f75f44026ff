//! Transaction history layer for the CRYP wallet.
//!
//! Turns already-fetched wallet records into display rows:
//! - classification into received / mined / sent / fee / unknown
//! - amount, date, confirmation and instant-path badge formatting
//! - click-to-expand visibility, keyed by the composite record key
//! - block-explorer links
//!
//! Stores, translators and link openers are injected; nothing here touches
//! the network or the filesystem except explicit catalog loading.

pub mod classify;
pub mod error;
pub mod explorer;
pub mod i18n;
pub mod locale;
pub mod present;
pub mod store;
pub mod visibility;

pub use classify::{classify, is_new, is_received, TxKind};
pub use error::HistoryError;
pub use explorer::{Explorer, ExplorerLink, LinkOpener};
pub use i18n::{Catalog, Translate};
pub use locale::Locale;
pub use present::{BadgeColor, Icon, Presenter, TransactionDetails, TransactionView};
pub use store::TransactionStore;
pub use visibility::{RecordStore, VisibilityToggle};
