//! Tag parsing.

use super::model::Tag;

/// Separator between tags in the raw tag string.
pub const TAG_SEPARATOR: char = ';';

/// Byte order mark; pasted text often starts with one.
const BOM: char = '\u{feff}';

/// Parse a raw `;`-delimited tag string.
///
/// Each piece is trimmed of whitespace and byte order marks, and empty
/// pieces are dropped. Order and duplicates are preserved.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<Tag> {
    raw.split(TAG_SEPARATOR)
        .map(trim_tag)
        .filter(|tag| !tag.is_empty())
        .map(Tag::new)
        .collect()
}

fn trim_tag(piece: &str) -> &str {
    piece.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Render tags back into display form (`"a; b"`).
#[must_use]
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.text.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
