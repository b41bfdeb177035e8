use crate::utils::error::{CardError, Result};
use std::fmt;

/// 出現任一字元即視為使用者自行撰寫的結構化查詢
pub const QUALIFIER_CHARS: [char; 4] = [':', '>', '<', '='];

/// 已整理好、尚未 URL 編碼的搜尋字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// 結構化查詢原樣送出，純名稱包成精確名稱篩選 `!"name"`
    pub fn from_input(raw: &str) -> Result<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(CardError::ValidationError {
                message: "Please enter a card name.".to_string(),
            });
        }

        if input.contains(QUALIFIER_CHARS) {
            tracing::debug!("Passing structured query through: {}", input);
            Ok(Self(input.to_string()))
        } else {
            Ok(Self(format!("!\"{}\"", input.replace('"', ""))))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_exact_name(&self) -> bool {
        self.0.starts_with("!\"")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_becomes_exact_filter() {
        let query = SearchQuery::from_input("lightning bolt").unwrap();
        assert_eq!(query.as_str(), "!\"lightning bolt\"");
        assert!(query.is_exact_name());
    }

    #[test]
    fn test_structured_query_passes_through() {
        for input in ["cmc>=5", "t:dragon", "pow<2", "c=r", "o:\"draw a card\""] {
            let query = SearchQuery::from_input(input).unwrap();
            assert_eq!(query.as_str(), input);
            assert!(!query.is_exact_name());
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let query = SearchQuery::from_input("  Opt \n").unwrap();
        assert_eq!(query.to_string(), "!\"Opt\"");
    }

    #[test]
    fn test_stray_quotes_removed_from_exact_name() {
        let query = SearchQuery::from_input("\"Ponder\"").unwrap();
        assert_eq!(query.as_str(), "!\"Ponder\"");
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = SearchQuery::from_input("   ").unwrap_err();
        assert!(matches!(err, CardError::ValidationError { .. }));
    }
}
