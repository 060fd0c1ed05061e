//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, offsets and attributes
//! - [`TokenType`] - Classification of token content (alphanumeric, numeric, etc.)
//! - [`TokenStream`] - Type alias for a boxed, lazily evaluated iterator of tokens
//!
//! # Positions
//!
//! Every token carries a `position_increment`, the gap from the previous
//! token. A filter that removes tokens adds the removed increments to the
//! next surviving token, so that phrase positions stay correct:
//!
//! ```text
//! Input:  "кошка на окне"   with "на" as a stop word
//!
//!   "кошка" (pos_inc=1)
//!   "окне"  (pos_inc=2)  ← skips the removed "на"
//! ```
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::token::Token;
//!
//! let token = Token::with_offsets("окне", 2, 25, 33);
//! assert_eq!(token.text, "окне");
//! assert_eq!(token.start_offset, 25);
//! assert_eq!(token.end_offset, 33);
//! assert!(!token.is_keyword());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Created by a tokenizer per lexical unit; downstream filters mutate its
/// attributes in place as it is pulled through the chain.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in original text
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `position_length` - Number of positions this token spans (default: 1)
/// - `keyword` - Whether the token is protected from stemming
/// - `token_type` - Lexical class assigned by the tokenizer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - 0: Same position as previous token
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,

    /// Marks the token as a keyword; stemmers leave keyword text untouched.
    pub keyword: bool,

    /// Token type classification
    pub token_type: TokenType,
}

/// Token type classification for different kinds of tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphabetic or mixed alphanumeric text in any script
    #[default]
    Alphanum,
    /// Numeric values
    Num,
    /// Han ideographs
    Ideographic,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hangul characters (Korean)
    Hangul,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a word by its characters.
    pub fn detect(word: &str) -> Self {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
                '\u{20000}'..='\u{2A6DF}'  // CJK Extension B
            )
        }) {
            return TokenType::Ideographic;
        }

        if word.chars().any(|c| c.is_alphanumeric()) {
            return TokenType::Alphanum;
        }

        TokenType::Other
    }

    /// Lucene-style type name, e.g. `<ALPHANUM>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Alphanum => "<ALPHANUM>",
            TokenType::Num => "<NUM>",
            TokenType::Ideographic => "<IDEOGRAPHIC>",
            TokenType::Hiragana => "<HIRAGANA>",
            TokenType::Katakana => "<KATAKANA>",
            TokenType::Hangul => "<HANGUL>",
            TokenType::Other => "<OTHER>",
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Self::with_offsets(text, position, 0, end_offset)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
            keyword: false,
            token_type: TokenType::Alphanum,
        }
    }

    /// Check if this token is protected from stemming.
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    /// Mark (or unmark) this token as a keyword.
    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a lazy sequence of tokens from the analysis pipeline.
///
/// Dropping the stream releases everything the run holds (input copy,
/// upstream stages); nothing is shared with other runs.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
