//! Query validation performed before any fetch is issued

use super::errors::{SessionError, SessionResult};
use crate::gallery_search::SearchQuery;
use crate::utils::MAX_KEYWORD_LENGTH;

/// Check that a gallery id has the shape the backend accepts
///
/// Gallery ids are ASCII letters, digits, `_` and `-`.
#[must_use]
pub fn is_valid_gallery_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate a query before it reaches the backend
///
/// # Errors
///
/// Returns `SessionError::InvalidQuery` for an empty or overlong keyword and
/// for a malformed gallery id.
pub fn validate_query(query: &SearchQuery) -> SessionResult<()> {
    let keyword = query.keyword();
    if keyword.is_empty() {
        return Err(SessionError::InvalidQuery(
            "Search keyword cannot be empty or whitespace-only".to_string(),
        ));
    }

    let length = keyword.chars().count();
    if length > MAX_KEYWORD_LENGTH {
        return Err(SessionError::InvalidQuery(format!(
            "Search keyword is too long ({length} characters, maximum {MAX_KEYWORD_LENGTH})"
        )));
    }

    if !is_valid_gallery_id(query.gallery_source()) {
        return Err(SessionError::InvalidQuery(format!(
            "Unknown gallery source '{}'",
            query.gallery_source()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_keyword_rejected() {
        let query = SearchQuery::new("owgenji", "   ");
        assert!(matches!(
            validate_query(&query),
            Err(SessionError::InvalidQuery(_))
        ));
    }

    #[test]
    fn gallery_id_shape() {
        assert!(is_valid_gallery_id("overwatch2_tv"));
        assert!(is_valid_gallery_id("some-gallery"));
        assert!(!is_valid_gallery_id(""));
        assert!(!is_valid_gallery_id("id=x&y"));
    }

    #[test]
    fn multibyte_keyword_counts_characters() {
        let query = SearchQuery::new("owgenji", "겐지".repeat(50));
        assert!(validate_query(&query).is_ok());
        let query = SearchQuery::new("owgenji", "겐".repeat(MAX_KEYWORD_LENGTH + 1));
        assert!(validate_query(&query).is_err());
    }
}
