//! Wallet transaction records as reported by the node's `listtransactions`.
//!
//! Records are read-only to the history layer except for the `hide` flag,
//! which only the record store mutates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::amount::CrypAmount;
use crate::time::Timestamp;

/// A single category tag attached to a record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryTag {
    Send,
    Receive,
    Generate,
    Immature,
    Orphan,
    /// Any tag the wallet does not know about, kept verbatim.
    Other(String),
}

impl CategoryTag {
    pub fn parse(s: &str) -> Self {
        match s {
            "send" => CategoryTag::Send,
            "receive" => CategoryTag::Receive,
            "generate" => CategoryTag::Generate,
            "immature" => CategoryTag::Immature,
            "orphan" => CategoryTag::Orphan,
            other => CategoryTag::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryTag::Send => "send",
            CategoryTag::Receive => "receive",
            CategoryTag::Generate => "generate",
            CategoryTag::Immature => "immature",
            CategoryTag::Orphan => "orphan",
            CategoryTag::Other(s) => s,
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of tags on a record. Tags are not mutually exclusive.
///
/// The node reports a single string; arrays are accepted as well.
/// Equality and hashing ignore tag order.
#[derive(Clone, Debug, Default)]
pub struct Categories(Vec<CategoryTag>);

impl Categories {
    /// Build from wire spellings, e.g. `Categories::from_strs(["send"])`.
    pub fn from_strs<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        Self(tags.into_iter().map(CategoryTag::parse).collect())
    }

    pub fn contains(&self, tag: &CategoryTag) -> bool {
        self.0.contains(tag)
    }

    pub fn is_receive(&self) -> bool {
        self.contains(&CategoryTag::Receive)
    }

    pub fn is_send(&self) -> bool {
        self.contains(&CategoryTag::Send)
    }

    /// Coinbase output, matured or not.
    pub fn is_mined(&self) -> bool {
        self.contains(&CategoryTag::Immature) || self.contains(&CategoryTag::Generate)
    }

    pub fn tags(&self) -> &[CategoryTag] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn sorted(&self) -> Vec<&CategoryTag> {
        let mut tags: Vec<&CategoryTag> = self.0.iter().collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

impl PartialEq for Categories {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Categories {}

impl Hash for Categories {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(CategoryTag::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [single] => serializer.serialize_str(single.as_str()),
            tags => serializer.collect_seq(tags.iter().map(CategoryTag::as_str)),
        }
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(s) if s.is_empty() => Categories::default(),
            Raw::One(s) => Categories(vec![CategoryTag::parse(&s)]),
            Raw::Many(v) => Categories(v.iter().map(|s| CategoryTag::parse(s)).collect()),
        })
    }
}

/// Finality of an instant-path transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstantStatus {
    #[default]
    Unset,
    /// The node spells this `"commited"`.
    Committed,
    Pending(String),
}

impl InstantStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "" => InstantStatus::Unset,
            "commited" | "committed" => InstantStatus::Committed,
            other => InstantStatus::Pending(other.to_string()),
        }
    }

    /// Wire spelling, also used as the translation key suffix.
    pub fn as_str(&self) -> &str {
        match self {
            InstantStatus::Unset => "",
            InstantStatus::Committed => "commited",
            InstantStatus::Pending(s) => s,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, InstantStatus::Committed)
    }
}

impl Serialize for InstantStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InstantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(InstantStatus::parse).unwrap_or_default())
    }
}

/// A wallet transaction or event entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub txid: String,
    /// Empty for private (shielded) transfers.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub amount: CrypAmount,
    #[serde(default)]
    pub fee: CrypAmount,
    #[serde(default)]
    pub category: Categories,
    /// Zero means unconfirmed; the node reports `-1` for conflicted transactions.
    #[serde(default)]
    pub confirmations: i64,
    #[serde(default)]
    pub time: Timestamp,
    #[serde(default)]
    pub timereceived: Timestamp,
    /// Empty until confirmed.
    #[serde(default)]
    pub blockhash: String,
    /// Collapsed/expanded state, owned by the record store.
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub dpos_instant: bool,
    #[serde(default)]
    pub dpos_status: InstantStatus,
}

impl TransactionRecord {
    /// A record with only a txid set; the remaining fields take their defaults.
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            address: String::new(),
            amount: CrypAmount::ZERO,
            fee: CrypAmount::ZERO,
            category: Categories::default(),
            confirmations: 0,
            time: Timestamp::EPOCH,
            timereceived: Timestamp::EPOCH,
            blockhash: String::new(),
            hide: false,
            dpos_instant: false,
            dpos_status: InstantStatus::Unset,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::of(self)
    }
}

/// Composite identity of a record.
///
/// `txid` alone is not assumed unique: one transaction can produce several
/// wallet events (for example a send and a receive to self).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RecordKey {
    pub txid: String,
    pub category: Categories,
    pub address: String,
    pub timereceived: Timestamp,
}

impl RecordKey {
    pub fn of(record: &TransactionRecord) -> Self {
        Self {
            txid: record.txid.clone(),
            category: record.category.clone(),
            address: record.address.clone(),
            timereceived: record.timereceived,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.txid,
            self.category,
            self.address,
            self.timereceived.as_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_listtransactions_entry() {
        let json = r#"{
            "address": "t1Kx9yQ3ryKpS5Xk5D1f2MJv1KqC7mJ4mZQ",
            "category": "receive",
            "amount": 12.5,
            "confirmations": 3,
            "blockhash": "00000000a1",
            "txid": "ab12",
            "time": 1551801600,
            "timereceived": 1551801605,
            "dpos_instant": true,
            "dpos_status": "commited"
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert!(record.category.is_receive());
        assert_eq!(record.amount.units(), 1_250_000_000);
        assert_eq!(record.fee, CrypAmount::ZERO);
        assert_eq!(record.dpos_status, InstantStatus::Committed);
        assert!(!record.hide);
    }

    #[test]
    fn categories_accept_arrays_and_ignore_order() {
        let a: Categories = serde_json::from_str(r#"["receive","generate"]"#).unwrap();
        let b = Categories::from_strs(["generate", "receive"]);
        assert_eq!(a, b);
        assert!(a.is_receive());
        assert!(a.is_mined());
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let c: Categories = serde_json::from_str(r#""shield""#).unwrap();
        assert_eq!(c.tags(), &[CategoryTag::Other("shield".into())]);
        assert_eq!(serde_json::to_string(&c).unwrap(), r#""shield""#);
    }

    #[test]
    fn null_instant_status_is_unset() {
        let s: InstantStatus = serde_json::from_str("null").unwrap();
        assert_eq!(s, InstantStatus::Unset);
        assert_eq!(InstantStatus::parse("pending"), InstantStatus::Pending("pending".into()));
    }

    #[test]
    fn record_key_distinguishes_categories_of_same_txid() {
        let mut send = TransactionRecord::new("ab12");
        send.category = Categories::from_strs(["send"]);
        let mut receive = send.clone();
        receive.category = Categories::from_strs(["receive"]);
        assert_ne!(send.key(), receive.key());
        assert_eq!(send.key(), RecordKey::of(&send));
    }
}
