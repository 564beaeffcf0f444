//! Utility functions for inkpost.

use std::time::{SystemTime, UNIX_EPOCH};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Derives a URL slug from a post title.
///
/// Lowercases the title and joins alphanumeric runs with single hyphens;
/// all other characters are separators. A title with no alphanumeric
/// characters yields an empty slug.
///
/// # Arguments
///
/// * `title`: Post title text
///
/// # Returns
///
/// Slug suitable for a `post/<slug>` route and output filename
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Formats an ISO-style date string for display.
///
/// Accepts `YYYY-MM-DD` with an optional time suffix and renders it as
/// "Mon D, YYYY". Unparseable input is returned verbatim rather than
/// failing, so a hand-edited store never breaks page generation.
///
/// # Arguments
///
/// * `date`: ISO-style date string, e.g. "2026-08-24" or "2026-08-24T10:00:00Z"
///
/// # Returns
///
/// Human readable date string
pub fn format_date(date: &str) -> String {
    let parsed = (|| {
        let mut parts = date.get(..10)?.split('-');
        let year: i64 = parts.next()?.parse().ok()?;
        let month: usize = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some((year, month, day))
    })();

    match parsed {
        Some((year, month, day)) => format!("{} {}, {}", MONTH_NAMES[month - 1], day, year),
        None => date.to_string(),
    }
}

/// Returns today's date as a `YYYY-MM-DD` string.
///
/// Used when seeding the welcome post. Computed from the system clock via
/// civil-from-days conversion; a clock before the Unix epoch falls back
/// to the epoch date.
pub fn current_date() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Converts days since the Unix epoch to a civil (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
