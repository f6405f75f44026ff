//! Block-explorer links for a record.

use cryp_types::TransactionRecord;
use serde::{Deserialize, Serialize};

use crate::i18n::Translate;

/// A block explorer the detail view links to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    pub name: String,
    /// Prefix the txid is appended to.
    pub tx_url: String,
    /// Prefix the block hash is appended to.
    pub block_url: String,
    pub tx_label_key: String,
    pub block_label_key: String,
}

impl Explorer {
    /// The hidden-service explorer.
    pub fn onion() -> Self {
        Self {
            name: "onion".into(),
            tx_url: "http://p5rp7jlyjbnhvnp6.onion/tx/".into(),
            block_url: "http://p5rp7jlyjbnhvnp6.onion/block/".into(),
            tx_label_key: "transaction.item.opentransactionsec".into(),
            block_label_key: "transaction.item.openblocksec".into(),
        }
    }

    /// The public explorer.
    pub fn clearnet() -> Self {
        Self {
            name: "crypticcoin.io".into(),
            tx_url: "https://explorer.crypticcoin.io/tx/".into(),
            block_url: "https://explorer.crypticcoin.io/block/".into(),
            tx_label_key: "transaction.item.opentransaction".into(),
            block_label_key: "transaction.item.openblock".into(),
        }
    }

    pub fn defaults() -> Vec<Explorer> {
        vec![Self::onion(), Self::clearnet()]
    }

    /// Links for `record`. The block link is left out until the record has a block hash.
    pub fn links_for(&self, record: &TransactionRecord, t: &dyn Translate) -> Vec<ExplorerLink> {
        let mut links = vec![ExplorerLink {
            label: t.translate(&self.tx_label_key),
            url: format!("{}{}", self.tx_url, record.txid),
        }];
        if !record.blockhash.is_empty() {
            links.push(ExplorerLink {
                label: t.translate(&self.block_label_key),
                url: format!("{}{}", self.block_url, record.blockhash),
            });
        }
        links
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorerLink {
    pub label: String,
    pub url: String,
}

/// Shell collaborator that opens a URL outside the wallet.
pub trait LinkOpener {
    fn open_external(&self, url: &str);
}

impl ExplorerLink {
    pub fn open(&self, opener: &dyn LinkOpener) {
        tracing::debug!(url = %self.url, "opening explorer link");
        opener.open_external(&self.url);
    }
}
