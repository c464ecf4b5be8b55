//! Page model and markup helpers.

mod document;
pub mod format;

pub use document::{ids, Document, Modal};

use format::escape_html;

/// Inline status message used for placeholders and passive-load errors.
pub fn loading_message(text: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, escape_html(text))
}

/// Placeholder for an empty admin list.
pub fn empty_list_message(text: &str) -> String {
    format!(r#"<div class="empty-list">{}</div>"#, escape_html(text))
}

/// Summary tile used by the home and admin statistics.
pub fn stat_card(value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat-card"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
        escape_html(value),
        escape_html(label)
    )
}
