//! Receive address kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Which kind of receive address to issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// A public `t`-address.
    Transparent,
    /// A private `z`-address.
    Shielded,
}

impl AddressKind {
    /// Translation key for the button that issues this kind.
    pub fn label_key(&self) -> &'static str {
        match self {
            AddressKind::Transparent => "receive.taddress",
            AddressKind::Shielded => "receive.zaddress",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Transparent => write!(f, "transparent"),
            AddressKind::Shielded => write!(f, "shielded"),
        }
    }
}

impl FromStr for AddressKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transparent" | "t" => Ok(AddressKind::Transparent),
            "shielded" | "z" => Ok(AddressKind::Shielded),
            other => Err(TypesError::InvalidAddressKind(other.to_string())),
        }
    }
}
