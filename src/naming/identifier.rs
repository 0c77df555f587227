//! Canonical folder identifier rendering and parsing.
//!
//! An identifier is `Last__First` for occurrence 0 and `Last__FirstN` for
//! occurrence N >= 1. Spaces inside a single name render as `~`, never as the
//! separator, so the segments parse back unambiguously.

/// Separator between the last-name and first-name segments (doubled).
pub const SEP: char = '_';

/// Stands in for a space inside a single name.
pub const SPACE_MARKER: char = '~';

/// The full segment boundary.
pub const SEGMENT_SEP: &str = "__";

/// Replace spaces with the marker for use inside an identifier.
pub fn encode_name(name: &str) -> String {
    name.replace(' ', "~")
}

/// Replace markers with spaces for human-facing rendering.
pub fn decode_name(name: &str) -> String {
    name.replace(SPACE_MARKER, " ")
}

/// An identifier parsed back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    pub last: String,
    pub first: String,
    pub occurrence: usize,
}

/// Render the canonical identifier for a (last, first, occurrence) triple.
///
/// Pure function of its inputs. A first name whose encoded form ends in a
/// digit cannot round-trip through [`parse`]; that case is logged, not fixed.
pub fn render(last: &str, first: &str, occurrence: usize) -> String {
    let first_enc = encode_name(first);
    if first_enc.ends_with(|c: char| c.is_ascii_digit()) {
        tracing::warn!(
            "First name '{}' ends in a digit; identifier will not parse back to the same occurrence",
            first
        );
    }
    if occurrence == 0 {
        format!("{}{}{}", encode_name(last), SEGMENT_SEP, first_enc)
    } else {
        format!(
            "{}{}{}{}",
            encode_name(last),
            SEGMENT_SEP,
            first_enc,
            occurrence
        )
    }
}

/// Parse a folder name in canonical identifier form.
///
/// Returns `None` when the name does not follow the grammar. Trailing digits
/// on the first-name segment are the occurrence number, defaulting to 0.
pub fn parse(name: &str) -> Option<ParsedIdentifier> {
    if name.contains(char::is_whitespace) {
        return None;
    }
    let (last, first_raw) = name.split_once(SEGMENT_SEP)?;
    if last.is_empty() || first_raw.is_empty() {
        return None;
    }

    let stem_len = first_raw.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (stem, digits) = first_raw.split_at(stem_len);
    if stem.is_empty() {
        // First-name segment is all digits; not a name.
        return None;
    }
    let occurrence = if digits.is_empty() {
        0
    } else {
        digits.parse().ok()?
    };

    Some(ParsedIdentifier {
        last: decode_name(last),
        first: decode_name(stem),
        occurrence,
    })
}
