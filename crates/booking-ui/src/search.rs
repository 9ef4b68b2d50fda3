//! Card text matching for the live filters

/// Lower-cased search term read from a filter input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize raw input text into a search term
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// The normalized term
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty term matches every card
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a card's rendered text contains the term (case-insensitive)
    ///
    /// Whole-text substring containment; no tokenizing or fuzzy matching.
    #[must_use]
    pub fn matches(&self, card_text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        card_text.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_is_lowercased() {
        assert_eq!(SearchTerm::new("DeLHi").as_str(), "delhi");
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let term = SearchTerm::new("");
        assert!(term.matches("Express 101 Delhi-Mumbai"));
        assert!(term.matches(""));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let term = SearchTerm::new("delhi");
        assert!(term.matches("Express 101 Delhi-Mumbai"));
        assert!(!term.matches("Local 202 Pune-Nagpur"));
    }

    #[test]
    fn test_match_spans_word_boundaries() {
        let term = SearchTerm::new("1 del");
        assert!(term.matches("Express 101 Delhi-Mumbai"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let term = SearchTerm::new(" 202 ");
        assert!(term.matches("Local 202 Pune-Nagpur"));
        assert!(!term.matches("Local202Pune"));
    }
}
