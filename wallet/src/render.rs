//! Plain-text rendering of history rows and issuance results.

use cryp_history::{Icon, TransactionView, Translate};
use cryp_receive::IssueOutcome;
use cryp_types::AddressKind;

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ArrowDown => "↓",
        Icon::ArrowUp => "↑",
        Icon::Work => "⚒",
    }
}

/// One line per row: date, direction, instant marker, amount, label, confirmations.
pub fn row(view: &TransactionView) -> String {
    let instant = match view.instant_badge {
        Some(_) => "⚡",
        None => " ",
    };
    let fresh = if view.is_new { "*" } else { " " };
    format!(
        "{fresh}{} {} {} {} {:>24}  {:<22} {}",
        view.month,
        view.day,
        icon_glyph(view.icon),
        instant,
        view.signed_amount(),
        view.type_label,
        view.confirmations
    )
}

/// Indented detail lines for an expanded row.
pub fn details(view: &TransactionView) -> Vec<String> {
    let d = &view.details;
    let mut lines = vec![
        format!("    {}", d.header),
        format!("    {}", d.amount),
        format!("    {}", d.counterparty),
        format!("    {}", d.timestamp),
    ];
    if let Some(status) = &d.instant_status {
        lines.push(format!("    {status}"));
    }
    lines.extend(d.links.iter().map(|l| format!("    {}: {}", l.label, l.url)));
    lines
}

/// The full listing, newest first as supplied by the caller.
pub fn listing(views: &[TransactionView], expanded: bool) -> String {
    let mut out = String::new();
    for view in views {
        out.push_str(&row(view));
        out.push('\n');
        if expanded {
            for line in details(view) {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out
}

/// One status line, labelled with the translated button text for `kind`.
pub fn issue_outcome(kind: AddressKind, outcome: &IssueOutcome, t: &dyn Translate) -> String {
    let label = t.translate(kind.label_key());
    match outcome {
        IssueOutcome::Issued(address) => format!("{label}: {address}"),
        IssueOutcome::Suppressed => format!("{label}: {}", t.translate("receive.inprogress")),
        IssueOutcome::Failed(e) => format!("{label}: {}: {e}", t.translate("receive.failed")),
    }
}
