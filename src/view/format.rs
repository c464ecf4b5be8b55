//! Text formatting shared by the renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Escape text for interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Group digits in threes: `1650000` becomes `1,650,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Plain number as the gateway sent it; whole values print without a fraction.
pub fn number(value: f64) -> String {
    format!("{}", value)
}

/// Amount in rupees.
pub fn rupees(amount: f64) -> String {
    format!("₹{}", number(amount))
}

/// Amount in crore with one decimal, e.g. `₹2.5Cr`.
pub fn crore(amount: f64) -> String {
    format!("₹{:.1}Cr", amount / 10_000_000.0)
}

/// Amount in lakh with one decimal, e.g. `₹3.2L`.
pub fn lakh(amount: f64) -> String {
    format!("₹{:.1}L", amount / 100_000.0)
}

/// Render a gateway date as `M/D/YYYY`.
///
/// Accepts plain dates, RFC 3339 timestamps and naive timestamps. Anything
/// else is shown unchanged.
pub fn short_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_utc().date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => trimmed.to_string(),
    }
}
