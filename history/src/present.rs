//! Display fields for a transaction row and its expanded details.
//!
//! Presentation is pure: the same record, locale, catalog and `now` always
//! produce the same view.

use chrono::Datelike;
use cryp_types::{RecordKey, Timestamp, TransactionRecord};
use cryp_utils::format_relative;
use serde::Serialize;

use crate::classify::{classify, is_new, TxKind};
use crate::explorer::{Explorer, ExplorerLink};
use crate::i18n::Translate;
use crate::locale::Locale;

pub const SEND_RED: &str = "#dc2b3d";
pub const RECEIVE_GREEN: &str = "#00917a";
pub const NEUTRAL_GRAY: &str = "rgb(222,222,222)";
pub const ATTENTION_ORANGE: &str = "orange";

/// Suffix appended to the type label of instant-path records.
pub const INSTANT_SUFFIX: &str = " InstantTX";

/// Direction icon of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowDown,
    ArrowUp,
    Work,
}

/// Instant-path badge colour: finalized or still pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Neutral,
    Attention,
}

impl BadgeColor {
    pub fn css(&self) -> &'static str {
        match self {
            BadgeColor::Neutral => NEUTRAL_GRAY,
            BadgeColor::Attention => ATTENTION_ORANGE,
        }
    }
}

/// The collapsed row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionView {
    pub key: RecordKey,
    pub kind: TxKind,
    pub hidden: bool,
    pub is_new: bool,
    /// Uppercase three-letter month.
    pub month: String,
    /// Zero-padded day of month.
    pub day: String,
    pub icon: Icon,
    /// True for every icon except the receive arrow.
    pub up: bool,
    pub icon_background: &'static str,
    pub instant_badge: Option<BadgeColor>,
    pub sign: &'static str,
    pub amount: String,
    pub unit: String,
    pub amount_color: &'static str,
    pub type_label: String,
    pub confirmations: String,
    pub details: TransactionDetails,
}

impl TransactionView {
    /// `"-1.23446789 CRYP"`
    pub fn signed_amount(&self) -> String {
        format!("{}{} {}", self.sign, self.amount, self.unit)
    }
}

/// The expanded body of a row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionDetails {
    pub header: String,
    pub amount: String,
    pub counterparty: String,
    pub timestamp: String,
    pub instant_status: Option<String>,
    pub links: Vec<ExplorerLink>,
}

/// Formats records for display.
pub struct Presenter<'a> {
    locale: &'a Locale,
    translator: &'a dyn Translate,
    explorers: &'a [Explorer],
    unit: &'a str,
}

impl<'a> Presenter<'a> {
    pub fn new(
        locale: &'a Locale,
        translator: &'a dyn Translate,
        explorers: &'a [Explorer],
        unit: &'a str,
    ) -> Self {
        Self {
            locale,
            translator,
            explorers,
            unit,
        }
    }

    /// Classify and present one record.
    pub fn present(&self, record: &TransactionRecord, now: Timestamp) -> TransactionView {
        let kind = classify(record.amount, &record.category, record.fee);
        self.present_as(record, kind, now)
    }

    /// Present a record whose classification is already known.
    pub fn present_as(
        &self,
        record: &TransactionRecord,
        kind: TxKind,
        now: Timestamp,
    ) -> TransactionView {
        let categories = &record.category;
        let local = self.locale.local_time(record.time);
        let net = (record.amount + record.fee).abs();

        let (icon, up) = if categories.is_receive() {
            (Icon::ArrowDown, false)
        } else if categories.is_send() {
            (Icon::ArrowUp, true)
        } else {
            (Icon::Work, true)
        };

        let instant_badge = record.dpos_instant.then(|| {
            if record.dpos_status.is_committed() {
                BadgeColor::Neutral
            } else {
                BadgeColor::Attention
            }
        });

        let mut type_label = self.translator.translate(kind.label_key());
        if record.dpos_instant {
            type_label.push_str(INSTANT_SUFFIX);
        }

        TransactionView {
            key: record.key(),
            kind,
            hidden: record.hide,
            is_new: is_new(record.time, now),
            month: local.format("%b").to_string().to_uppercase(),
            day: format!("{:02}", local.day()),
            icon,
            up,
            icon_background: if up { NEUTRAL_GRAY } else { RECEIVE_GREEN },
            instant_badge,
            sign: if categories.is_send() { "-" } else { "+" },
            amount: self.locale.format_fixed_8(net),
            unit: self.unit.to_string(),
            amount_color: if categories.is_send() {
                SEND_RED
            } else {
                RECEIVE_GREEN
            },
            type_label,
            confirmations: self.confirmations(record.confirmations),
            details: self.details(record, kind, now),
        }
    }

    /// Present a list in input order.
    pub fn render(&self, records: &[TransactionRecord], now: Timestamp) -> Vec<TransactionView> {
        let views: Vec<TransactionView> = records.iter().map(|r| self.present(r, now)).collect();
        tracing::debug!(
            count = views.len(),
            fresh = views.iter().filter(|v| v.is_new).count(),
            "rendered transaction history"
        );
        views
    }

    /// Conflicted transactions report a negative count and read as out of sync.
    pub fn confirmations(&self, confirmations: i64) -> String {
        if confirmations > 0 {
            format!(
                "{confirmations} {}",
                self.translator.translate("transaction.item.confirmations")
            )
        } else {
            self.translator.translate("transaction.item.outofsync")
        }
    }

    pub fn details(
        &self,
        record: &TransactionRecord,
        kind: TxKind,
        now: Timestamp,
    ) -> TransactionDetails {
        let t = self.translator;
        let categories = &record.category;
        let net = (record.amount + record.fee).abs();

        let header = format!(
            "{} {} · {}",
            t.translate(kind.label_key()),
            t.translate("transaction.item.transaction"),
            format_relative(record.time, now)
        );

        let direction = if categories.is_receive() || categories.is_send() {
            t.translate("transaction.item.to")
        } else {
            t.translate("transaction.item.from")
        };
        let address = if record.address.is_empty() {
            t.translate("transaction.item.private")
        } else {
            record.address.clone()
        };

        let instant_status = record.dpos_instant.then(|| {
            t.translate(&format!("transaction.item.{}", record.dpos_status.as_str()))
        });

        TransactionDetails {
            header,
            amount: format!("{} {}", self.unit, self.locale.format_compact(net)),
            counterparty: format!("{direction} {address}"),
            timestamp: self.long_timestamp(record.time),
            instant_status,
            links: self
                .explorers
                .iter()
                .flat_map(|e| e.links_for(record, t))
                .collect(),
        }
    }

    /// `"March 5th 2019, 4:07:09 pm"` in the viewer's timezone.
    pub fn long_timestamp(&self, time: Timestamp) -> String {
        let local = self.locale.local_time(time);
        format!(
            "{} {}{} {}",
            local.format("%B"),
            local.day(),
            ordinal_suffix(local.day()),
            local.format("%Y, %-I:%M:%S %P")
        )
    }
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use cryp_types::{Categories, CrypAmount, InstantStatus};

    // 2019-03-05 16:07:09 UTC
    const MARCH_5TH: u64 = 1_551_802_029;

    fn record(tags: &[&str], amount: f64, fee: f64) -> TransactionRecord {
        let mut r = TransactionRecord::new("ab12");
        r.category = Categories::from_strs(tags.iter().copied());
        r.amount = CrypAmount::from_coins(amount).unwrap();
        r.fee = CrypAmount::from_coins(fee).unwrap();
        r.time = Timestamp::new(MARCH_5TH);
        r.timereceived = Timestamp::new(MARCH_5TH);
        r
    }

    fn present(r: &TransactionRecord) -> TransactionView {
        let locale = Locale::english_utc();
        let catalog = Catalog::english();
        let explorers = Explorer::defaults();
        let presenter = Presenter::new(&locale, &catalog, &explorers, "CRYP");
        presenter.present(r, Timestamp::new(MARCH_5TH + 600))
    }

    #[test]
    fn send_nets_fee_and_is_negative() {
        let view = present(&record(&["send"], 1.23456789, -0.0001));
        assert_eq!(view.kind, TxKind::Sent);
        assert_eq!(view.sign, "-");
        assert_eq!(view.amount, "1.23446789");
        assert_eq!(view.signed_amount(), "-1.23446789 CRYP");
        assert_eq!(view.amount_color, SEND_RED);
        assert_eq!(view.icon, Icon::ArrowUp);
        assert!(view.up);
    }

    #[test]
    fn receive_nets_fee_too() {
        let view = present(&record(&["receive"], 2.0, -0.5));
        assert_eq!(view.sign, "+");
        assert_eq!(view.amount, "1.50000000");
        assert_eq!(view.icon, Icon::ArrowDown);
        assert!(!view.up);
        assert_eq!(view.icon_background, RECEIVE_GREEN);
        assert_eq!(view.type_label, "Received");
    }

    #[test]
    fn mined_record_uses_work_icon() {
        let view = present(&record(&["generate"], 3.0, 0.0));
        assert_eq!(view.kind, TxKind::Mined);
        assert_eq!(view.icon, Icon::Work);
        assert!(view.up);
        assert_eq!(view.icon_background, NEUTRAL_GRAY);
        assert_eq!(view.details.counterparty, "from private");
    }

    #[test]
    fn large_amounts_are_grouped() {
        let view = present(&record(&["receive"], 12_345.5, 0.0));
        assert_eq!(view.amount, "12,345.50000000");
        assert_eq!(view.details.amount, "CRYP 12,345.5");
    }

    #[test]
    fn month_and_day_labels() {
        let view = present(&record(&["send"], 1.0, 0.0));
        assert_eq!(view.month, "MAR");
        assert_eq!(view.day, "05");
    }

    #[test]
    fn confirmation_text() {
        let mut r = record(&["receive"], 1.0, 0.0);
        assert_eq!(present(&r).confirmations, "Out of sync");
        r.confirmations = 12;
        assert_eq!(present(&r).confirmations, "12 confirmations");
        r.confirmations = -1;
        assert_eq!(present(&r).confirmations, "Out of sync");
    }

    #[test]
    fn instant_badge_tracks_commit_state() {
        let mut r = record(&["receive"], 1.0, 0.0);
        assert_eq!(present(&r).instant_badge, None);

        r.dpos_instant = true;
        r.dpos_status = InstantStatus::Pending("pending".into());
        let pending = present(&r);
        assert_eq!(pending.instant_badge, Some(BadgeColor::Attention));
        assert_eq!(pending.type_label, "Received InstantTX");
        assert_eq!(
            pending.details.instant_status.as_deref(),
            Some("Instant transaction pending")
        );

        r.dpos_status = InstantStatus::Committed;
        let committed = present(&r);
        assert_eq!(committed.instant_badge, Some(BadgeColor::Neutral));
        assert_eq!(committed.instant_badge.map(|b| b.css()), Some(NEUTRAL_GRAY));
    }

    #[test]
    fn details_block() {
        let mut r = record(&["send"], 1.23456789, -0.0001);
        r.address = "t1Kx9yQ3ryKpS5Xk5D1f2MJv1KqC7mJ4mZQ".into();
        r.blockhash = "00ff".into();
        let details = present(&r).details;
        assert_eq!(details.header, "Sent transaction · 10 minutes ago");
        assert_eq!(details.amount, "CRYP 1.23446789");
        assert_eq!(details.counterparty, "to t1Kx9yQ3ryKpS5Xk5D1f2MJv1KqC7mJ4mZQ");
        assert_eq!(details.timestamp, "March 5th 2019, 4:07:09 pm");
        assert_eq!(details.instant_status, None);
        assert_eq!(details.links.len(), 4);
    }

    #[test]
    fn freshness_flag() {
        let r = record(&["receive"], 1.0, 0.0);
        assert!(present(&r).is_new);

        let locale = Locale::english_utc();
        let catalog = Catalog::english();
        let presenter = Presenter::new(&locale, &catalog, &[], "CRYP");
        let later = presenter.present(&r, Timestamp::new(MARCH_5TH + 5_400));
        assert!(!later.is_new);
        assert!(later.details.links.is_empty());
    }

    #[test]
    fn ordinals() {
        let got: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            got,
            ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }
}
