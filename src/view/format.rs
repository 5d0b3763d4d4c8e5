//! Number and text formatting shared by the widgets and the text report.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder for a mean over an empty subset.
pub const UNDEFINED: &str = "—";

/// Format an integer with thousands separators.
///
/// Examples:
/// - `format_thousands(0)` → "0"
/// - `format_thousands(1234)` → "1,234"
/// - `format_thousands(20411000)` → "20,411,000"
pub fn format_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Format a float with `decimals` places and thousands separators.
///
/// `format_decimal(4355.5, 1)` → "4,355.5"
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    match unsigned.split_once('.') {
        Some((int, frac)) => format!("{sign}{}.{frac}", group_digits(int)),
        None => format!("{sign}{}", group_digits(unsigned)),
    }
}

/// Format an optional mean, rendering `None` as [`UNDEFINED`].
pub fn format_mean(value: Option<f64>, decimals: usize, suffix: &str) -> String {
    match value {
        Some(v) => format!("{}{suffix}", format_decimal(v, decimals)),
        None => UNDEFINED.to_string(),
    }
}

/// Result count line shared by the tiles, status bar and text report.
pub fn showing_count(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} cities")
}

/// Short population label for chart bars: "20.4M", "950K", "812".
pub fn format_compact(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{}K", v / 1_000),
        v => v.to_string(),
    }
}

/// Percentage with one decimal and an explicit sign: "+2.3%", "-0.4%".
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Truncate `text` to at most `max_width` terminal columns, ending in "…"
/// when something was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad `text` on the right to `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

fn group_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result
}
