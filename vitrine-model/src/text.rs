//! Text helpers shared by card renderers.

use chrono::{DateTime, Datelike, Utc};

const ELLIPSIS: &str = "...";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cut `text` down to `max_chars` characters, appending `...` when anything
/// was dropped. Counts `char`s, so multi-byte text is never split mid code
/// point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
    }
}

/// Long-form date such as `5 March 2024`.
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
