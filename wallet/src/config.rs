//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use cryp_history::{Catalog, Explorer, Locale};
use cryp_receive::RpcConfig;
use cryp_utils::LogFormat;

use crate::error::WalletError;

/// Configuration for the wallet shell.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Locale tag selecting number separators, e.g. "en", "de-DE".
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Viewer timezone as minutes east of UTC. Unset follows the system timezone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    /// Currency unit shown next to amounts.
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Optional translation file overlaid on the built-in English catalog.
    #[serde(default)]
    pub translations: Option<PathBuf>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Node JSON-RPC endpoint used for address issuance.
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Block explorers linked from the transaction details.
    #[serde(default = "Explorer::defaults")]
    pub explorers: Vec<Explorer>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_locale() -> String {
    "en".to_string()
}

fn default_unit() -> String {
    "CRYP".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    pub fn locale(&self) -> Result<Locale, WalletError> {
        match self.utc_offset_minutes {
            Some(minutes) => Ok(Locale::new(&self.locale, minutes)?),
            None => Ok(Locale::local(&self.locale)),
        }
    }

    /// The built-in English catalog, overlaid with the configured translation file.
    pub fn catalog(&self) -> Result<Catalog, WalletError> {
        let english = Catalog::english();
        match &self.translations {
            Some(path) => Ok(english.merged_with(Catalog::from_json_file(path)?)),
            None => Ok(english),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            utc_offset_minutes: None,
            unit: default_unit(),
            translations: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            rpc: RpcConfig::default(),
            explorers: Explorer::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = WalletConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = WalletConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = WalletConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.unit, "CRYP");
        assert_eq!(config.locale, "en");
        assert_eq!(config.explorers.len(), 2);
        assert_eq!(config.rpc.timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            locale = "de-DE"
            utc_offset_minutes = 60
            log_format = "json"

            [rpc]
            url = "http://10.0.0.5:23205"
            user = "alice"
            password = "secret"
        "#;
        let config = WalletConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.rpc.url, "http://10.0.0.5:23205");
        assert_eq!(config.rpc.user, "alice");
        assert_eq!(config.rpc.timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.locale().unwrap().tag(), "de-DE");
        assert_eq!(config.unit, "CRYP"); // default
    }

    #[test]
    fn explorers_can_be_replaced() {
        let toml = r#"
            [[explorers]]
            name = "local"
            tx_url = "http://localhost:3001/tx/"
            block_url = "http://localhost:3001/block/"
            tx_label_key = "transaction.item.opentransaction"
            block_label_key = "transaction.item.openblock"
        "#;
        let config = WalletConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.explorers.len(), 1);
        assert_eq!(config.explorers[0].name, "local");
    }

    #[test]
    fn unset_offset_uses_system_zone() {
        let config = WalletConfig::default();
        assert_eq!(config.utc_offset_minutes, None);
        assert_eq!(config.locale().unwrap(), Locale::local("en"));

        let fixed = WalletConfig::from_toml_str("utc_offset_minutes = 0").unwrap();
        assert_eq!(fixed.locale().unwrap(), Locale::english_utc());
    }

    #[test]
    fn bad_offset_is_rejected() {
        let config = WalletConfig::from_toml_str("utc_offset_minutes = 5000").unwrap();
        assert!(matches!(config.locale(), Err(WalletError::History(_))));
    }

    #[test]
    fn translation_file_overlays_english() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"transaction":{{"item":{{"sent":"Gesendet"}}}}}}"#).unwrap();
        let config = WalletConfig {
            translations: Some(file.path().to_path_buf()),
            ..WalletConfig::default()
        };
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.get("transaction.item.sent"), Some("Gesendet"));
        assert_eq!(catalog.get("transaction.item.fee"), Some("Fee"));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = WalletConfig::from_toml_file("/nonexistent/cryp.toml");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }
}
