//! Text helpers for fitting content into terminal cells.

use ratatui::text::Line;

/// Avatar fallback: first character of each whitespace-separated word
///
/// ```
/// use adminboard::utils::text::initials;
/// assert_eq!(initials("Olivia Martin"), "OM");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Truncate to at most `max` characters, marking the cut with an ellipsis
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Number of spaces needed to right-align `right` after `left` within `width`
#[must_use]
pub fn gap_between(left: &Line<'_>, right: &Line<'_>, width: usize) -> usize {
    width.saturating_sub(left.width() + right.width())
}
