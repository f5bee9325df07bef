//! Normalization of raw form input before it reaches a service call.
//!
//! Text inputs hand back strings even for numeric and optional fields, so
//! services receive typed, explicitly-absent values instead of empty
//! strings or zeroes.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trim a free-text field; blank becomes an explicit absent value.
#[must_use]
pub fn blank_to_none(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Parse a numeric identifier typed into a text input or picked from a
/// select. Blank or non-numeric input is absent, never zero.
#[must_use]
pub fn parse_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Expand a date-only form value (`YYYY-MM-DD`) into the ISO timestamp the
/// backend stores. Values that already carry a time component pass through
/// unchanged; blank or unrecognized input is absent.
#[must_use]
pub fn date_input_to_timestamp(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains('T') {
        return Some(trimmed.to_owned());
    }
    if is_date_only(trimmed) {
        return Some(format!("{trimmed}T00:00:00.000Z"));
    }
    None
}

fn is_date_only(value: &str) -> bool {
    value.len() == 10
        && value
            .char_indices()
            .all(|(i, c)| if matches!(i, 4 | 7) { c == '-' } else { c.is_ascii_digit() })
}
