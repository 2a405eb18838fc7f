/// Row limit applied to history reads when the caller does not supply one.
pub const DEFAULT_HISTORY_LIMIT: u64 = 100;

/// Parses a caller supplied row limit.
///
/// Missing, non-numeric and zero values fall back to [`DEFAULT_HISTORY_LIMIT`].
/// There is no upper bound, an operator may request the whole table.
///
/// # Arguments
/// - `value` - Raw `limit` query parameter, if present
///
/// # Returns
/// - `u64` - The limit to apply to the query
pub fn parse_limit(value: Option<&str>) -> u64 {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
}

/// Trims a required text field, returning `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Normalizes an optional text field so blank input is stored as absent.
///
/// Non-blank values are kept verbatim.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| non_blank(v).is_some())
}
