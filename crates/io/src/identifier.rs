//! Canonical form of title identifiers.

/// Normalizes a raw identifier cell.
///
/// Trims, drops a trailing `.0` left by spreadsheet number formatting, and
/// removes hyphens and spaces. Returns `None` when nothing usable remains.
#[must_use]
pub fn canonical_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(".0").unwrap_or(trimmed);

    let canonical: String = trimmed
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if canonical.is_empty() || canonical.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(canonical)
    }
}
