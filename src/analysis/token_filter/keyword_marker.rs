//! Keyword marker filter implementation.
//!
//! Sets the keyword flag on every token whose text is in a [`WordSet`].
//! Keyword tokens pass through stemming untouched. Tokens that are already
//! keywords stay keywords; other tokens are passed on unchanged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rustem::analysis::token::Token;
//! use rustem::analysis::token_filter::Filter;
//! use rustem::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
//! use rustem::analysis::word_set::WordSet;
//!
//! let filter = KeywordMarkerFilter::new(Arc::new(WordSet::new(["бегать"], true)));
//! let tokens = vec![Token::new("бегать", 0), Token::new("ходить", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert!(result[0].is_keyword());
//! assert!(!result[1].is_keyword());
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::word_set::WordSet;
use crate::error::Result;

/// Marks tokens found in a keyword set so later stages leave them alone.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    keywords: Arc<WordSet>,
}

impl KeywordMarkerFilter {
    pub fn new(keywords: Arc<WordSet>) -> Self {
        KeywordMarkerFilter { keywords }
    }

    pub fn keywords(&self) -> &Arc<WordSet> {
        &self.keywords
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let keywords = Arc::clone(&self.keywords);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.keyword && keywords.contains(&token.text) {
                token.keyword = true;
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_marks_members_only() {
        let filter = KeywordMarkerFilter::new(Arc::new(WordSet::new(["Бегать"], true)));
        let tokens = vec![
            Token::new("бегать", 0),
            Token::new("БЕГАТЬ", 1),
            Token::new("бегала", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert!(result[0].is_keyword());
        assert!(result[1].is_keyword());
        assert!(!result[2].is_keyword());
        assert_eq!(result[1].text, "БЕГАТЬ");
    }

    #[test]
    fn test_existing_keywords_are_kept() {
        let filter = KeywordMarkerFilter::new(WordSet::empty());
        let tokens = vec![Token::new("окно", 0).with_keyword(true)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert!(result[0].is_keyword());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(KeywordMarkerFilter::new(WordSet::empty()).name(), "keyword_marker");
    }
}
