//! Heading-delimited section extraction
//!
//! A section body is the verbatim slice between a heading line and the next
//! heading of equal or higher rank. Rank is the number of leading `#` markers;
//! fewer markers means higher rank, so a `##` section swallows its `###`
//! subsections but stops at the next `##` or `#`.

/// Heading rank of a line, if the line is a heading.
///
/// A heading is one or more `#` markers followed by a space. Returns the
/// marker count (`## Foo` → 2). Lines that are all `#` or have no space after
/// the markers are not headings.
#[must_use]
pub fn heading_rank(line: &str) -> Option<usize> {
    let trimmed = line.trim_end();
    let marks = trimmed.bytes().take_while(|b| *b == b'#').count();
    if marks == 0 {
        return None;
    }
    match trimmed.as_bytes().get(marks) {
        Some(b' ') => Some(marks),
        _ => None,
    }
}

/// Extract the body of the section introduced by `heading`.
///
/// Matching is line-anchored and case-sensitive: a line matches when it
/// equals `heading` after right-trimming. The body spans from immediately
/// after the matched line to just before the next heading of equal or higher
/// rank, or to end of text. The returned slice borrows from `text`; nothing
/// is copied.
///
/// Duplicate headings are not an error: the first match wins and later
/// occurrences are ignored. This mirrors the permissiveness of the documents
/// being validated.
///
/// Returns `None` when the heading is absent or `heading` is itself not a
/// heading line.
#[must_use]
pub fn extract_section<'a>(text: &'a str, heading: &str) -> Option<&'a str> {
    let target = heading.trim_end();
    let rank = heading_rank(target)?;

    let mut offset = 0usize;
    let mut body_start: Option<usize> = None;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let content = line.strip_suffix('\n').unwrap_or(line);
        match body_start {
            None => {
                if content.trim_end() == target {
                    body_start = Some(offset);
                }
            }
            Some(start) => {
                if let Some(r) = heading_rank(content) {
                    if r <= rank {
                        return Some(&text[start..line_start]);
                    }
                }
            }
        }
    }

    body_start.map(|start| &text[start..])
}
