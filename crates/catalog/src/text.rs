use std::borrow::Cow;

/// Longest description shown on a product card, in characters.
pub const DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Cut `description` to [`DESCRIPTION_LIMIT`] characters followed by `...`.
///
/// Text at or under the limit is returned as-is.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &description[..cut])),
        None => Cow::Borrowed(description),
    }
}
