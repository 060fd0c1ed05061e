//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Membership is tested with
//! the [`WordSet`]'s own case policy.
//!
//! By default the position increments of removed tokens are added to the
//! next surviving token, so positions stay faithful to the original text.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token_filter::Filter;
//! use rustem::analysis::token_filter::stop::StopFilter;
//! use rustem::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["и", "на"]);
//! let tokens = vec![
//!     Token::new("кошка", 0),
//!     Token::new("на", 1),
//!     Token::new("окне", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "окне");
//! assert_eq!(result[1].position_increment, 2);
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::word_set::WordSet;
use crate::analysis::wordlist::default_russian_stop_set;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<WordSet>,
    /// Whether removed tokens' position increments carry over to the next token
    preserve_position_increments: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default Russian stop words.
    pub fn new() -> Self {
        Self::with_stop_words(default_russian_stop_set())
    }

    /// Create a new stop filter with a shared stop word set.
    pub fn with_stop_words(stop_words: Arc<WordSet>) -> Self {
        StopFilter {
            stop_words,
            preserve_position_increments: true,
        }
    }

    /// Create a new case-insensitive stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(Arc::new(WordSet::new(words, true)))
    }

    /// Set whether removed tokens' position increments carry over.
    pub fn preserve_position_increments(mut self, preserve: bool) -> Self {
        self.preserve_position_increments = preserve;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// The stop word set used by this filter.
    pub fn stop_words(&self) -> &Arc<WordSet> {
        &self.stop_words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(StopFilterStream {
            upstream: tokens,
            stop_words: Arc::clone(&self.stop_words),
            preserve_position_increments: self.preserve_position_increments,
        }))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

struct StopFilterStream {
    upstream: TokenStream,
    stop_words: Arc<WordSet>,
    preserve_position_increments: bool,
}

impl Iterator for StopFilterStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut skipped = 0;
        for mut token in self.upstream.by_ref() {
            if self.stop_words.contains(&token.text) {
                skipped += token.position_increment;
                continue;
            }
            if self.preserve_position_increments {
                token.position_increment += skipped;
            }
            return Some(token);
        }
        None
    }
}
