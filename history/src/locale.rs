//! Viewer locale: number grouping, decimal mark and timezone.
//!
//! Month and weekday names are English regardless of the locale tag; the tag
//! selects separators only. Without an explicit UTC offset, dates follow the
//! system's local timezone.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use cryp_types::{CrypAmount, Timestamp};
use separator::{separated_float, separated_int, separated_uint_with_output};

use crate::error::HistoryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    /// The system timezone, resolved per timestamp so DST is honoured.
    System,
    Fixed(FixedOffset),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    group_separator: &'static str,
    decimal_separator: &'static str,
    zone: Zone,
}

fn separators(tag: &str) -> (&'static str, &'static str) {
    let language = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match language.as_str() {
        "de" | "nl" | "it" | "es" | "id" | "tr" => (".", ","),
        "fr" | "ru" | "uk" | "pl" | "cs" | "sv" => ("\u{a0}", ","),
        _ => (",", "."),
    }
}

impl Locale {
    /// Build a locale from a BCP-47-ish tag (`"en"`, `"de-DE"`, ...) and a fixed UTC offset.
    ///
    /// Unknown languages fall back to English separators.
    pub fn new(tag: &str, utc_offset_minutes: i32) -> Result<Self, HistoryError> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(HistoryError::InvalidOffset(utc_offset_minutes))?;
        Ok(Self::with_zone(tag, Zone::Fixed(offset)))
    }

    /// A locale whose dates follow the system timezone.
    pub fn local(tag: &str) -> Self {
        Self::with_zone(tag, Zone::System)
    }

    /// English separators in UTC.
    pub fn english_utc() -> Self {
        Self::with_zone("en", Zone::Fixed(Utc.fix()))
    }

    fn with_zone(tag: &str, zone: Zone) -> Self {
        let (group_separator, decimal_separator) = separators(tag);
        Self {
            tag: tag.to_string(),
            group_separator,
            decimal_separator,
            zone,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Magnitude with exactly eight fractional digits, grouped.
    pub fn format_fixed_8(&self, amount: CrypAmount) -> String {
        let fixed = amount.to_fixed_8();
        self.localize(&separated_float!(fixed))
    }

    /// Grouped magnitude at full precision, without trailing fractional zeros.
    pub fn format_compact(&self, amount: CrypAmount) -> String {
        let fixed = amount.to_fixed_8();
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.').to_string();
        self.localize(&separated_float!(trimmed))
    }

    /// Swap the `,` / `.` marks of an English-grouped number for this locale's.
    fn localize(&self, grouped: &str) -> String {
        let mut out = String::with_capacity(grouped.len());
        for ch in grouped.chars() {
            match ch {
                ',' => out.push_str(self.group_separator),
                '.' => out.push_str(self.decimal_separator),
                other => out.push(other),
            }
        }
        out
    }

    /// `time` in the viewer's timezone. Out-of-range values read as the epoch.
    pub fn local_time(&self, time: Timestamp) -> DateTime<FixedOffset> {
        let utc = i64::try_from(time.as_secs())
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_default();
        match self.zone {
            Zone::System => utc.with_timezone(&Local).fixed_offset(),
            Zone::Fixed(offset) => utc.with_timezone(&offset),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::local("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let en = Locale::english_utc();
        assert_eq!(en.format_fixed_8(CrypAmount::ZERO), "0.00000000");
        assert_eq!(en.format_fixed_8(CrypAmount::from_units(99_900_000_000)), "999.00000000");
        assert_eq!(
            en.format_fixed_8(CrypAmount::from_units(1_234_567_800_000_000)),
            "12,345,678.00000000"
        );
    }

    #[test]
    fn fixed_uses_locale_separators() {
        let de = Locale::new("de-DE", 0).unwrap();
        let amount = CrypAmount::from_units(123_456_789_000);
        assert_eq!(de.format_fixed_8(amount), "1.234,56789000");
        assert_eq!(Locale::english_utc().format_fixed_8(amount), "1,234.56789000");
        let fr = Locale::new("fr", 0).unwrap();
        assert_eq!(fr.format_fixed_8(amount), "1\u{a0}234,56789000");
    }

    #[test]
    fn compact_keeps_full_precision_without_trailing_zeros() {
        let en = Locale::english_utc();
        assert_eq!(en.format_compact(CrypAmount::from_units(150_000_000)), "1.5");
        assert_eq!(en.format_compact(CrypAmount::from_units(123_446_789)), "1.23446789");
        assert_eq!(en.format_compact(CrypAmount::from_units(-99_995_000)), "0.99995");
        assert_eq!(en.format_compact(CrypAmount::from_units(1_000_000_000)), "10");
        assert_eq!(en.format_compact(CrypAmount::ZERO), "0");
        let de = Locale::new("de", 0).unwrap();
        assert_eq!(de.format_compact(CrypAmount::from_units(123_450_000_000)), "1.234,5");
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert!(Locale::new("en", 24 * 60).is_err());
        assert!(Locale::new("en", -300).is_ok());
    }

    #[test]
    fn local_time_applies_offset() {
        let est = Locale::new("en-US", -300).unwrap();
        // 2019-03-05 02:00:00 UTC is still March 4th in UTC-5.
        let t = est.local_time(Timestamp::new(1_551_751_200));
        assert_eq!(t.format("%Y-%m-%d %H").to_string(), "2019-03-04 21");
    }

    #[test]
    fn unset_offset_follows_system_zone() {
        let secs = 1_551_751_200;
        let expected = DateTime::<Utc>::from_timestamp(secs, 0)
            .unwrap()
            .with_timezone(&Local);
        let local = Locale::default().local_time(Timestamp::new(secs as u64));
        assert_eq!(local.offset().local_minus_utc(), expected.offset().fix().local_minus_utc());
        assert_eq!(local.naive_local(), expected.naive_local());
        assert_eq!(Locale::local("de").tag(), "de");
    }
}
