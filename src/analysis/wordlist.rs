//! Wordlist loading.
//!
//! Stop word and stem exclusion lists are plain UTF-8 text resources:
//!
//! - blank lines are ignored
//! - lines whose first non-blank character is `#` are ignored
//! - anything after a `|` on a line is a comment
//! - the remaining text is split on whitespace, each piece is one entry
//!
//! ```text
//! # Russian stop words
//! и              | and
//! в  во          | in/into
//! ```
//!
//! Resources are fetched through a [`ResourceLoader`]; all loading happens
//! while an analyzer is being built, never while tokens are produced.
//!
//! The built-in Russian stop set is loaded at most once per process, the
//! first time [`default_russian_stop_set`] or [`try_default_russian_stop_set`]
//! is called, and shared by every analyzer afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use log::{debug, info, warn};

use crate::analysis::word_set::WordSet;
use crate::error::{Result, RustemError};

/// Name of the built-in Russian stop word resource.
pub const DEFAULT_RUSSIAN_STOPWORD_FILE: &str = "russian_stop.txt";

const RUSSIAN_STOP_TXT: &str = include_str!("../resources/russian_stop.txt");

/// Comment marker for whole lines.
const LINE_COMMENT: char = '#';

/// Comment marker for the rest of a line (Snowball format).
const TRAILING_COMMENT: char = '|';

/// Source of named byte resources.
pub trait ResourceLoader: Send + Sync {
    /// Read the whole resource.
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// Loads resources from files under a base directory.
#[derive(Clone, Debug, Default)]
pub struct FileResourceLoader {
    base_dir: Option<PathBuf>,
}

impl FileResourceLoader {
    /// Resolve names relative to the current directory (or absolute paths).
    pub fn new() -> Self {
        FileResourceLoader { base_dir: None }
    }

    /// Resolve names relative to `base_dir`.
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        FileResourceLoader {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl ResourceLoader for FileResourceLoader {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name);
        fs::read(&path)
            .map_err(|e| RustemError::resource_load(path.display().to_string(), e.to_string()))
    }
}

/// Serves the resources compiled into the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedResourceLoader;

impl ResourceLoader for EmbeddedResourceLoader {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        match name {
            DEFAULT_RUSSIAN_STOPWORD_FILE => Ok(RUSSIAN_STOP_TXT.as_bytes().to_vec()),
            _ => Err(RustemError::resource_load(name, "no such embedded resource")),
        }
    }
}

/// Parse wordlist text into its entries, in file order.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with(LINE_COMMENT))
        .flat_map(|line| {
            let content = match line.find(TRAILING_COMMENT) {
                Some(idx) => &line[..idx],
                None => line,
            };
            content.split_whitespace()
        })
        .map(str::to_string)
        .collect()
}

/// Decode wordlist bytes and build a set from them.
pub fn wordset_from_bytes(resource: &str, bytes: &[u8], ignore_case: bool) -> Result<WordSet> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| RustemError::resource_load(resource, format!("invalid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let entries = parse_wordlist(text);
    if entries.is_empty() {
        warn!("Wordlist '{resource}' contains no entries");
    }

    let set = WordSet::new(entries, ignore_case);
    debug!("Loaded {} words from '{resource}'", set.len());
    Ok(set)
}

/// Load a word set through `loader`.
pub fn load_wordset(loader: &dyn ResourceLoader, name: &str, ignore_case: bool) -> Result<WordSet> {
    let bytes = loader.read(name)?;
    wordset_from_bytes(name, &bytes, ignore_case)
}

/// Load a word set from a file path.
pub fn load_wordset_file<P: AsRef<Path>>(path: P, ignore_case: bool) -> Result<WordSet> {
    let path = path.as_ref();
    load_wordset(&FileResourceLoader::new(), &path.to_string_lossy(), ignore_case)
}

static DEFAULT_RUSSIAN_STOP_SET: LazyLock<std::result::Result<Arc<WordSet>, String>> =
    LazyLock::new(|| {
        let loaded = load_wordset(&EmbeddedResourceLoader, DEFAULT_RUSSIAN_STOPWORD_FILE, true);
        match loaded {
            Ok(set) => {
                info!("Initialized default Russian stop set ({} words)", set.len());
                Ok(Arc::new(set))
            }
            Err(e) => Err(e.to_string()),
        }
    });

/// The built-in Russian stop set, case-insensitive.
///
/// The set ships with the crate, so failing to load it means the build is
/// broken; that is reported by panicking on first use.
pub fn default_russian_stop_set() -> Arc<WordSet> {
    match try_default_russian_stop_set() {
        Ok(set) => set,
        Err(e) => panic!("Unable to load default stopword set: {e}"),
    }
}

/// Like [`default_russian_stop_set`], but returns the load failure instead of panicking.
pub fn try_default_russian_stop_set() -> Result<Arc<WordSet>> {
    match &*DEFAULT_RUSSIAN_STOP_SET {
        Ok(set) => Ok(Arc::clone(set)),
        Err(message) => Err(RustemError::resource_load(
            DEFAULT_RUSSIAN_STOPWORD_FILE,
            message.clone(),
        )),
    }
}
