//! Transaction classification.
//!
//! Classification is a pure, total function of `(amount, categories, fee)`.
//! Precedence is significant: a record tagged both `receive` and `generate`
//! is a receive.

use cryp_types::{Categories, CrypAmount, Timestamp};
use serde::Serialize;
use std::fmt;

/// How long a record is flagged as new after its `time`.
pub const FRESHNESS_WINDOW_SECS: u64 = 90 * 60;

/// User-facing category of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Received,
    Mined,
    Sent,
    Fee,
    Unknown,
}

impl TxKind {
    /// Translation key of the label shown for this kind.
    pub fn label_key(&self) -> &'static str {
        match self {
            TxKind::Received => "transaction.item.receive",
            TxKind::Mined => "transaction.item.mined",
            TxKind::Sent => "transaction.item.sent",
            TxKind::Fee => "transaction.item.fee",
            TxKind::Unknown => "transaction.item.unknown",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TxKind::Received => "received",
            TxKind::Mined => "mined",
            TxKind::Sent => "sent",
            TxKind::Fee => "fee",
            TxKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Classify a record by its amount, tags and fee.
pub fn classify(amount: CrypAmount, categories: &Categories, fee: CrypAmount) -> TxKind {
    if !amount.is_zero() {
        if categories.is_receive() {
            TxKind::Received
        } else if categories.is_mined() {
            TxKind::Mined
        } else {
            TxKind::Sent
        }
    } else if fee.is_negative() {
        TxKind::Fee
    } else {
        TxKind::Unknown
    }
}

/// Whether a record with this `time` is still inside the freshness window.
///
/// Exactly `FRESHNESS_WINDOW_SECS` old is no longer new.
pub fn is_new(time: Timestamp, now: Timestamp) -> bool {
    time.as_secs().saturating_add(FRESHNESS_WINDOW_SECS) > now.as_secs()
}

pub fn is_received(categories: &Categories) -> bool {
    categories.is_receive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(v: f64) -> CrypAmount {
        CrypAmount::from_coins(v).unwrap()
    }

    fn tags(t: &[&str]) -> Categories {
        Categories::from_strs(t.iter().copied())
    }

    #[test]
    fn nonzero_amount_rules() {
        assert_eq!(classify(coins(1.0), &tags(&["receive"]), CrypAmount::ZERO), TxKind::Received);
        assert_eq!(classify(coins(3.0), &tags(&["generate"]), CrypAmount::ZERO), TxKind::Mined);
        assert_eq!(classify(coins(3.0), &tags(&["immature"]), CrypAmount::ZERO), TxKind::Mined);
        assert_eq!(classify(coins(-2.0), &tags(&["send"]), coins(-0.0001)), TxKind::Sent);
        assert_eq!(classify(coins(1.0), &tags(&[]), CrypAmount::ZERO), TxKind::Sent);
    }

    #[test]
    fn receive_wins_over_generate() {
        let both = tags(&["generate", "receive"]);
        assert_eq!(classify(coins(5.0), &both, CrypAmount::ZERO), TxKind::Received);
    }

    #[test]
    fn zero_amount_rules() {
        assert_eq!(classify(CrypAmount::ZERO, &tags(&["send"]), coins(-0.0001)), TxKind::Fee);
        assert_eq!(classify(CrypAmount::ZERO, &tags(&["send"]), CrypAmount::ZERO), TxKind::Unknown);
        assert_eq!(classify(CrypAmount::ZERO, &tags(&["receive"]), coins(0.5)), TxKind::Unknown);
    }

    #[test]
    fn freshness_boundary_is_exclusive() {
        let now = Timestamp::new(1_000_000);
        assert!(is_new(Timestamp::new(1_000_000 - 5_399), now));
        assert!(!is_new(Timestamp::new(1_000_000 - 5_400), now));
        assert!(is_new(Timestamp::new(1_000_100), now));
    }

    #[test]
    fn is_received_is_single_containment_test() {
        assert!(is_received(&tags(&["receive", "receive"])));
        assert!(!is_received(&tags(&["send"])));
    }

    #[test]
    fn label_keys() {
        assert_eq!(TxKind::Mined.label_key(), "transaction.item.mined");
        assert_eq!(TxKind::Fee.to_string(), "fee");
    }
}
