//! Single-line metadata field parsing
//!
//! Two textual shapes carry metadata in the governed documents:
//!
//! - bold-label declarations, `**Label:** value`, used by the roadmap
//! - bullet declarations, `- Label: value`, used by the changelog's
//!   Roadmap Alignment block
//!
//! Parsers here never error; they return optionality. Whether an absent
//! field is a finding is the caller's decision. A date-typed field whose
//! value fails the `YYYY-MM-DD` shape is treated as absent, not as a
//! different outcome.

/// Whether a trimmed value matches the `YYYY-MM-DD` calendar-date shape.
///
/// Shape only: ten characters, ASCII digits with dashes at offsets 4 and 7.
/// Calendar plausibility is not checked, matching the upstream documents'
/// contract.
#[must_use]
pub fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
}

fn field_value<'a>(text: &'a str, prefix: &str, date_shaped: bool) -> Option<&'a str> {
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(prefix) {
            let value = rest.trim();
            if value.is_empty() {
                continue;
            }
            if date_shaped && !is_date_shaped(value) {
                continue;
            }
            return Some(value);
        }
    }
    None
}

fn field_present(text: &str, prefix: &str) -> bool {
    text.lines().any(|line| line.starts_with(prefix))
}

/// First value of a line-anchored `**Label:** value` declaration.
///
/// The value is trimmed; lines carrying the label with an empty value are
/// skipped. First match wins.
#[must_use]
pub fn bold_field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    field_value(text, &format!("**{label}:**"), false)
}

/// Like [`bold_field`], but the value must additionally match `YYYY-MM-DD`.
///
/// Lines whose value fails the shape are skipped, so a later well-formed
/// declaration still matches.
#[must_use]
pub fn bold_date_field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    field_value(text, &format!("**{label}:**"), true)
}

/// Whether any line carries the bold label at all, regardless of value.
///
/// Lets callers distinguish a malformed value from a missing declaration.
#[must_use]
pub fn bold_field_present(text: &str, label: &str) -> bool {
    field_present(text, &format!("**{label}:**"))
}

/// First value of a line-anchored `- Label: value` bullet declaration.
#[must_use]
pub fn bullet_field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    field_value(text, &format!("- {label}:"), false)
}

/// Like [`bullet_field`], but the value must additionally match `YYYY-MM-DD`.
#[must_use]
pub fn bullet_date_field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    field_value(text, &format!("- {label}:"), true)
}

/// Whether any line carries the bullet label at all, regardless of value.
#[must_use]
pub fn bullet_field_present(text: &str, label: &str) -> bool {
    field_present(text, &format!("- {label}:"))
}
