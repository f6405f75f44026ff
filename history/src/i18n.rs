//! Translation lookup.
//!
//! Catalogs use the nested JSON layout of the desktop wallet's language
//! files (`{"transaction": {"item": {"receive": "Received"}}}`) and are
//! flattened to dotted keys on load.

use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::HistoryError;

/// Translation collaborator. Unknown keys must translate to something
/// printable; [`Catalog`] returns the key itself.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }
}

const ENGLISH: &str = r#"{
  "transaction": {
    "item": {
      "receive": "Received",
      "mined": "Mined",
      "sent": "Sent",
      "fee": "Fee",
      "unknown": "Unknown",
      "transaction": "transaction",
      "confirmations": "confirmations",
      "outofsync": "Out of sync",
      "to": "to",
      "from": "from",
      "private": "private",
      "commited": "Instant transaction committed",
      "pending": "Instant transaction pending",
      "opentransactionsec": "Open transaction (onion)",
      "openblocksec": "Open block (onion)",
      "opentransaction": "Open transaction",
      "openblock": "Open block"
    }
  },
  "receive": {
    "title": "Receive",
    "address": "Your receive address",
    "generate": "Generate a new address",
    "labelInfo": "Share this address to receive CRYP",
    "taddress": "New transparent address",
    "zaddress": "New private address",
    "inprogress": "request already in progress",
    "failed": "request failed"
  }
}"#;

/// Flattened key → text map.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// The built-in English catalog.
    pub fn english() -> Self {
        Self::from_json_str(ENGLISH).unwrap_or_default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, HistoryError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| HistoryError::Catalog(e.to_string()))?;
        if !value.is_object() {
            return Err(HistoryError::Catalog("top level must be an object".into()));
        }
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self { entries })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HistoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Overlay `other` on top of this catalog; keys in `other` win.
    pub fn merged_with(mut self, other: Catalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::trace!(key, "missing translation");
                key.to_string()
            }
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_catalog_parses() {
        let catalog = Catalog::english();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.translate("transaction.item.receive"), "Received");
        assert_eq!(catalog.translate("receive.zaddress"), "New private address");
    }

    #[test]
    fn unknown_key_translates_to_itself() {
        assert_eq!(Catalog::default().translate("transaction.item.fee"), "transaction.item.fee");
    }

    #[test]
    fn overlay_replaces_only_given_keys() {
        let de = Catalog::from_json_str(r#"{"transaction":{"item":{"receive":"Empfangen"}}}"#)
            .unwrap();
        let catalog = Catalog::english().merged_with(de);
        assert_eq!(catalog.translate("transaction.item.receive"), "Empfangen");
        assert_eq!(catalog.translate("transaction.item.sent"), "Sent");
    }

    #[test]
    fn rejects_non_object_catalog() {
        assert!(matches!(Catalog::from_json_str("[1,2]"), Err(HistoryError::Catalog(_))));
        assert!(Catalog::from_json_str("{").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"receive":{{"title":"Recevoir"}}}}"#).unwrap();
        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.translate("receive.title"), "Recevoir");
        assert!(matches!(
            Catalog::from_json_file("/nonexistent/lang.json"),
            Err(HistoryError::Io { .. })
        ));
    }
}
