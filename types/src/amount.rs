//! CRYP amount type.
//!
//! Amounts are represented as fixed-point integers (i64) to avoid floating-point errors.
//! The smallest unit is 1e-8 CRYP, matching the eight fractional digits the node reports.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;

use crate::error::TypesError;

/// Units per whole coin.
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// A signed CRYP quantity.
///
/// Internally stored as units of 1e-8 CRYP. Fees reported by the node are
/// negative, so the sign is significant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrypAmount(i64);

impl CrypAmount {
    pub const ZERO: Self = Self(0);

    pub fn from_units(units: i64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> i64 {
        self.0
    }

    /// Convert a coin value as reported over JSON-RPC, rounding to the nearest unit.
    pub fn from_coins(coins: f64) -> Result<Self, TypesError> {
        if !coins.is_finite() {
            return Err(TypesError::InvalidAmount(coins.to_string()));
        }
        let units = (coins * UNITS_PER_COIN as f64).round();
        if units > i64::MAX as f64 || units < i64::MIN as f64 {
            return Err(TypesError::InvalidAmount(coins.to_string()));
        }
        Ok(Self(units as i64))
    }

    pub fn as_coins(&self) -> f64 {
        self.0 as f64 / UNITS_PER_COIN as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Whole-coin part and fractional units of the magnitude.
    pub fn split_magnitude(&self) -> (u64, u64) {
        let magnitude = self.0.unsigned_abs();
        let per_coin = UNITS_PER_COIN as u64;
        (magnitude / per_coin, magnitude % per_coin)
    }

    /// Render the magnitude with exactly eight fractional digits and no grouping.
    pub fn to_fixed_8(&self) -> String {
        let (whole, frac) = self.split_magnitude();
        format!("{whole}.{frac:08}")
    }
}

impl Add for CrypAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl fmt::Display for CrypAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{} CRYP", self.to_fixed_8())
    }
}

impl Serialize for CrypAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_coins())
    }
}

impl<'de> Deserialize<'de> for CrypAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coins = f64::deserialize(deserializer)?;
        Self::from_coins(coins).map_err(serde::de::Error::custom)
    }
}
