//! Field annotation parsing.

/// Constraint tag attached to a record field.
///
/// Unknown annotation tokens map to [`Tag::None`] so that record types can
/// carry annotations meant for other tooling without failing extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// No recognized constraint
    None,
    /// Non-unique secondary index
    Index,
    /// Table primary key
    PrimaryKey,
    /// Uniqueness constraint
    Unique,
}

/// Parses a raw annotation string into its constraint tags.
///
/// The annotation is comma-separated and case-insensitive; each token is
/// trimmed of surrounding whitespace before matching. Tags are returned in
/// discovery order and are not deduplicated; a field annotated
/// `"primarykey,unique"` keeps both.
pub fn parse_annotation(raw: &str) -> Vec<Tag> {
    raw.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> Tag {
    match token.trim().to_ascii_lowercase().as_str() {
        "index" => Tag::Index,
        "primarykey" => Tag::PrimaryKey,
        "unique" => Tag::Unique,
        _ => Tag::None,
    }
}
