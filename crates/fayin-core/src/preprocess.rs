use unicode_normalization::UnicodeNormalization;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
}

/// Normalize raw search input: trim, NFKC, drop line breaks.
///
/// NFKC folds full-width Latin and compatibility ideographs into their
/// canonical forms so that IME output and pasted text hit the same keys.
pub fn normalize(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], "").trim().to_string()
}

/// Validate a user query before it reaches the search engine.
///
/// The engine itself tolerates empty queries; this is the UI-layer check
/// that turns them into an inline error instead.
pub fn clean_query(text: &str) -> Result<String, QueryError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(QueryError::Empty);
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize("  汝 "), "汝");
    }

    #[test]
    fn folds_fullwidth_latin() {
        assert_eq!(normalize("ｒｕ２"), "ru2");
    }

    #[test]
    fn strips_line_breaks() {
        assert_eq!(normalize("汝\n城\r"), "汝城");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn clean_query_rejects_blank_input() {
        assert_eq!(clean_query("  \n "), Err(QueryError::Empty));
        assert_eq!(clean_query(""), Err(QueryError::Empty));
    }

    #[test]
    fn clean_query_passes_real_input() {
        assert_eq!(clean_query(" 汝城 ").unwrap(), "汝城");
    }
}
