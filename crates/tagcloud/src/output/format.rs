//! Pure formatting helpers for headings, counts, and markup.

use owo_colors::OwoColorize;

use crate::cloud::Cloud;

/// Format a number with thousands separators (commas).
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let digits: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let len = digits.len();
    for (i, &c) in digits.iter().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `"Top {n} words in {label}"`, shared by every output format.
pub(super) fn heading(cloud: &Cloud) -> String {
    format!("Top {} words in {}", cloud.requested, cloud.label)
}

/// Escape the five HTML-significant characters.
pub(super) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `<span>` per word; the class selects the stylesheet's font size.
pub(super) fn html_span(word: &str, count: usize, size: u32) -> String {
    format!(
        "<span style=\"cursor:default\" class=\"f{size}\" title=\"count: {count}\">{}</span>",
        escape_html(word)
    )
}

pub(super) fn bold(s: &str, color: bool) -> String {
    if color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

pub(super) fn dim(s: &str, color: bool) -> String {
    if color {
        s.dimmed().to_string()
    } else {
        s.to_string()
    }
}
