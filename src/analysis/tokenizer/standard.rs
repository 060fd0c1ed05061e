//! Standard tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps only the
//! segments that contain at least one letter or digit. Segments longer than
//! the maximum token length are dropped, and the positions they would have
//! taken are carried onto the next token's position increment.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::tokenizer::Tokenizer;
//! use rustem::analysis::tokenizer::standard::StandardTokenizer;
//!
//! let tokenizer = StandardTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("И кошка сидела на окне.").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "И");
//! assert_eq!(tokens[4].text, "окне");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::{DEFAULT_MAX_TOKEN_LENGTH, Tokenizer};
use crate::error::{Result, RustemError};

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug)]
pub struct StandardTokenizer {
    max_token_length: usize,
}

impl StandardTokenizer {
    /// Create a tokenizer with the default maximum token length (255).
    pub fn new() -> Self {
        StandardTokenizer {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a tokenizer that drops words longer than `max_token_length` characters.
    pub fn with_max_token_length(max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(RustemError::invalid_config(
                "max_token_length must be greater than zero",
            ));
        }
        Ok(StandardTokenizer { max_token_length })
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(StandardTokenStream::new(text, self.max_token_length)))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// The lazy stream behind [`StandardTokenizer`].
#[derive(Clone, Debug)]
pub struct StandardTokenStream {
    text: String,
    cursor: usize,
    next_position: usize,
    skipped_positions: usize,
    max_token_length: usize,
}

impl StandardTokenStream {
    /// A `max_token_length` of zero is treated as one.
    pub fn new(text: &str, max_token_length: usize) -> Self {
        StandardTokenStream {
            text: text.to_owned(),
            cursor: 0,
            next_position: 0,
            skipped_positions: 0,
            max_token_length: max_token_length.max(1),
        }
    }

    /// Restart the stream over new input, discarding all state from the previous run.
    pub fn reset(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
        self.next_position = 0;
        self.skipped_positions = 0;
    }
}

impl Iterator for StandardTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.cursor < self.text.len() {
            let start = self.cursor;
            let (len, is_word, char_len) = {
                let rest = &self.text[start..];
                let segment = rest.split_word_bounds().next()?;
                (
                    segment.len(),
                    segment.chars().any(char::is_alphanumeric),
                    segment.chars().count(),
                )
            };
            let end = start + len;
            self.cursor = end;

            if !is_word {
                continue;
            }

            if char_len > self.max_token_length {
                self.skipped_positions += 1;
                self.next_position += 1;
                continue;
            }

            let word = &self.text[start..end];
            let token = Token::with_offsets(word, self.next_position, start, end)
                .with_position_increment(1 + self.skipped_positions)
                .with_token_type(TokenType::detect(word));

            self.next_position += 1;
            self.skipped_positions = 0;
            return Some(token);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tokenizer() {
        let tokenizer = StandardTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_cyrillic_offsets_are_bytes() {
        let text = "И кошка";
        let tokens: Vec<Token> = StandardTokenizer::new().tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "кошка");
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "кошка");
        assert_eq!(tokens[1].end_offset, text.len());
    }

    #[test]
    fn test_numbers_and_types() {
        let tokens: Vec<Token> = StandardTokenizer::new()
            .tokenize("в 2024 году")
            .unwrap()
            .collect();

        assert_eq!(tokens[1].text, "2024");
        assert_eq!(tokens[1].token_type, TokenType::Num);
        assert_eq!(tokens[2].token_type, TokenType::Alphanum);
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        let tokenizer = StandardTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" ,.;!? ").unwrap().count(), 0);
    }

    #[test]
    fn test_overlong_tokens_are_skipped() {
        let tokenizer = StandardTokenizer::with_max_token_length(5).unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("кот длинноеслово окно")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "кот");
        assert_eq!(tokens[0].position_increment, 1);
        assert_eq!(tokens[1].text, "окно");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[1].position_increment, 2);
    }

    #[test]
    fn test_zero_max_token_length_is_rejected() {
        assert!(matches!(
            StandardTokenizer::with_max_token_length(0),
            Err(RustemError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_max_token_length_stream_keeps_short_words() {
        let tokens: Vec<Token> = StandardTokenStream::new("я и кот", 0).collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["я", "и"]);
        assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn test_stream_is_lazy_and_restartable() {
        let mut stream = StandardTokenStream::new("один два три", 255);
        assert_eq!(stream.next().unwrap().text, "один");

        stream.reset("окно");
        let rest: Vec<Token> = stream.by_ref().collect();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].text, "окно");
        assert_eq!(rest[0].position, 0);
        assert_eq!(rest[0].start_offset, 0);
    }

    #[test]
    fn test_independent_runs() {
        let tokenizer = StandardTokenizer::new();
        let mut first = tokenizer.tokenize("a b c").unwrap();
        let second: Vec<Token> = tokenizer.tokenize("x y").unwrap().collect();

        assert_eq!(first.next().unwrap().text, "a");
        assert_eq!(second.len(), 2);
        assert_eq!(first.next().unwrap().text, "b");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(StandardTokenizer::new().name(), "standard");
    }
}
