//! Time formatting helpers.

use cryp_types::Timestamp;

/// Render `then` relative to `now` the way wallet history lists do:
/// "a few seconds ago", "3 hours ago", "in 2 days".
///
/// Each unit is rounded to the nearest whole value before the thresholds
/// are applied, so 89 seconds reads "a minute ago" and 90 reads "2 minutes ago".
pub fn format_relative(then: Timestamp, now: Timestamp) -> String {
    let (secs, future) = if then > now {
        (then.as_secs() - now.as_secs(), true)
    } else {
        (now.as_secs() - then.as_secs(), false)
    };

    let phrase = relative_phrase(secs);
    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(secs: u64) -> String {
    let secs_f = secs as f64;
    let minutes = (secs_f / 60.0).round() as u64;
    let hours = (secs_f / 3_600.0).round() as u64;
    let days_f = secs_f / 86_400.0;
    let days = days_f.round() as u64;
    // Average Gregorian month: 146097 days per 4800 months.
    let months_f = days_f * 4_800.0 / 146_097.0;
    let months = months_f.round() as u64;
    let years = (months_f / 12.0).round() as u64;

    if secs < 45 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if days <= 1 {
        "a day".to_string()
    } else if days < 26 {
        format!("{days} days")
    } else if months <= 1 {
        "a month".to_string()
    } else if months < 11 {
        format!("{months} months")
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
