//! Letter tokenizer implementation.
//!
//! Emits maximal runs of letters and decimal digits; every other character is
//! a separator. Number forms that are not decimal digits (fractions such as
//! `½`, Roman numerals such as `Ⅻ`, superscripts, circled numbers) are
//! separators too. Runs longer than the maximum token length are split into
//! consecutive tokens. This is the token source for analyzers configured with
//! a compatibility version before 3.1.

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::{DEFAULT_MAX_TOKEN_LENGTH, Tokenizer};
use crate::error::{Result, RustemError};

/// Code point ranges of letter numbers (`Nl`) and other numbers (`No`) that
/// `char::is_alphanumeric` accepts but a letter tokenizer does not.
const NON_DECIMAL_NUMBERS: &[(char, char)] = &[
    ('\u{00B2}', '\u{00B3}'),
    ('\u{00B9}', '\u{00B9}'),
    ('\u{00BC}', '\u{00BE}'),
    ('\u{16EE}', '\u{16F0}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2150}', '\u{2182}'),
    ('\u{2185}', '\u{2189}'),
    ('\u{2460}', '\u{24FF}'),
    ('\u{2776}', '\u{2793}'),
    ('\u{3007}', '\u{3007}'),
    ('\u{3021}', '\u{3029}'),
    ('\u{3038}', '\u{303A}'),
    ('\u{3192}', '\u{3195}'),
    ('\u{3220}', '\u{3229}'),
    ('\u{3248}', '\u{325F}'),
    ('\u{3280}', '\u{3289}'),
    ('\u{32B1}', '\u{32BF}'),
];

/// Whether `c` belongs to a token: a letter or a decimal digit.
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric()
        && !NON_DECIMAL_NUMBERS
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// A tokenizer that splits text into runs of letters and digits.
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    max_token_length: usize,
}

impl LetterTokenizer {
    pub fn new() -> Self {
        LetterTokenizer {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a tokenizer that splits runs longer than `max_token_length` characters.
    pub fn with_max_token_length(max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(RustemError::invalid_config(
                "max_token_length must be greater than zero",
            ));
        }
        Ok(LetterTokenizer { max_token_length })
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(LetterTokenStream::new(text, self.max_token_length)))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

/// The lazy stream behind [`LetterTokenizer`].
#[derive(Clone, Debug)]
pub struct LetterTokenStream {
    text: String,
    cursor: usize,
    position: usize,
    max_token_length: usize,
}

impl LetterTokenStream {
    /// A `max_token_length` of zero is treated as one.
    pub fn new(text: &str, max_token_length: usize) -> Self {
        LetterTokenStream {
            text: text.to_owned(),
            cursor: 0,
            position: 0,
            max_token_length: max_token_length.max(1),
        }
    }

    /// Restart the stream over new input.
    pub fn reset(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
        self.position = 0;
    }
}

impl Iterator for LetterTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.cursor..];
        let (skip, _) = rest.char_indices().find(|&(_, c)| is_token_char(c))?;
        let start = self.cursor + skip;

        let mut end = start;
        let mut chars = 0;
        for c in self.text[start..].chars() {
            if !is_token_char(c) || chars == self.max_token_length {
                break;
            }
            end += c.len_utf8();
            chars += 1;
        }
        self.cursor = end;

        let word = &self.text[start..end];
        let token = Token::with_offsets(word, self.position, start, end)
            .with_token_type(TokenType::detect(word));
        self.position += 1;
        Some(token)
    }
}
