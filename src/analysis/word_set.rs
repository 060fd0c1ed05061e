//! Immutable word sets used for stop words and stem exclusions.
//!
//! A [`WordSet`] remembers the case policy it was built with: when
//! `ignore_case` is set, entries are lowercased on construction and every
//! probe is lowercased before lookup.
//!
//! Sets are built once and shared behind an [`Arc`](std::sync::Arc) by every
//! analyzer and every analysis run that uses them.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::word_set::WordSet;
//!
//! let set = WordSet::new(["И", "на"], true);
//! assert!(set.contains("и"));
//! assert!(set.contains("НА"));
//! assert!(!set.contains("окно"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token_filter::lowercase::{lowercase, needs_lowercase};

static EMPTY: LazyLock<Arc<WordSet>> = LazyLock::new(|| Arc::new(WordSet::default()));

/// An immutable set of words with a case policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
    ignore_case: bool,
}

impl WordSet {
    /// Build a set from words, lowercasing them when `ignore_case` is set.
    pub fn new<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.into();
                if ignore_case { lowercase(&word) } else { word }
            })
            .collect();

        WordSet { words, ignore_case }
    }

    /// The shared empty set.
    pub fn empty() -> Arc<WordSet> {
        Arc::clone(&EMPTY)
    }

    /// Check membership, applying the set's case policy to `word`.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        if self.ignore_case && needs_lowercase(word) {
            self.words.contains(&lowercase(word))
        } else {
            self.words.contains(word)
        }
    }

    /// Whether lookups are case-insensitive.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the (normalized) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Entries in sorted order, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl Default for WordSet {
    fn default() -> Self {
        WordSet::new(Vec::<String>::new(), false)
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    /// Collects into a case-sensitive set.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSet::new(iter, false)
    }
}
