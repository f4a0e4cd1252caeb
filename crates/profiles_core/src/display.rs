//! Derived display values for professional rows.
//!
//! Every function here is a pure function of its input so rows render the
//! same avatar and labels on every pass.

use chrono::{DateTime, Utc};

/// Initials shown when a record has no usable name.
pub const UNKNOWN_INITIALS: &str = "?";
/// Avatar palette; `color_index` selects into this.
pub const AVATAR_PALETTE: [&str; 6] = ["blue", "violet", "emerald", "amber", "rose", "cyan"];
pub const NO_CONTACT_NOTICE: &str = "No contact info";

const COMPANY_PLACEHOLDER: &str = "na";

/// Avatar initials for a display name.
///
/// - blank name: `"?"`
/// - one token: first two characters, uppercased
/// - several tokens: first character of the first and last token, uppercased
pub fn initials(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(first) = tokens.next() else {
        return UNKNOWN_INITIALS.to_string();
    };

    match tokens.last() {
        None => first.chars().take(2).flat_map(char::to_uppercase).collect(),
        Some(last) => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
    }
}

/// Palette index from the first character's code point; `0` for an empty name.
pub fn color_index(name: &str) -> usize {
    name.chars()
        .next()
        .map_or(0, |ch| ch as usize % AVATAR_PALETTE.len())
}

pub fn avatar_color(name: &str) -> &'static str {
    AVATAR_PALETTE[color_index(name)]
}

/// Company name to show, hiding absent and `NA` placeholder values.
pub fn company_display(company_name: Option<&str>) -> Option<&str> {
    company_name
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(COMPANY_PLACEHOLDER))
}

/// Contact lines for a row: email then phone, or the no-contact notice.
pub fn contact_lines<'a>(email: Option<&'a str>, phone: Option<&'a str>) -> Vec<&'a str> {
    let lines = [email, phone]
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .collect::<Vec<_>>();
    if lines.is_empty() {
        vec![NO_CONTACT_NOTICE]
    } else {
        lines
    }
}

/// Short creation date, e.g. `Oct 19, 2026`.
pub fn format_created_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}

/// Header line above the list.
pub fn records_summary(count: usize, loading: bool) -> String {
    if loading {
        return "Loading...".to_string();
    }
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} professional{plural} registered")
}
