//! Compatibility version tag.
//!
//! A [`Version`] selects between behaviours that changed over time. The only
//! behaviour currently governed by it is the choice of token source:
//! analyzers built for versions before 3.1 split text into runs of letters
//! and digits, newer ones follow Unicode word boundaries.
//!
//! # Examples
//!
//! ```
//! use rustem::analysis::version::Version;
//!
//! let version: Version = "LUCENE_30".parse().unwrap();
//! assert_eq!(version, Version::new(3, 0));
//! assert!(!version.on_or_after(Version::LUCENE_3_1));
//!
//! assert!("4.x".parse::<Version>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RustemError};

/// A `major.minor` compatibility tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
}

impl Version {
    /// Last version using the letter tokenizer.
    pub const LUCENE_3_0: Version = Version::new(3, 0);

    /// First version using Unicode word boundaries.
    pub const LUCENE_3_1: Version = Version::new(3, 1);

    /// The newest supported behaviour.
    pub const CURRENT: Version = Version::new(4, 7);

    pub const fn new(major: u32, minor: u32) -> Self {
        Version { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Whether this version is the same as or newer than `other`.
    pub fn on_or_after(&self, other: Version) -> bool {
        *self >= other
    }

    /// Parse a tag such as `4.7`, `LUCENE_47`, `LUCENE_4_7` or `current`.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.eq_ignore_ascii_case("current") || trimmed.eq_ignore_ascii_case("latest") {
            return Ok(Version::CURRENT);
        }

        let invalid = || RustemError::invalid_config(format!("invalid version tag: '{tag}'"));

        let (major, minor) = match trimmed
            .strip_prefix("LUCENE_")
            .or_else(|| trimmed.strip_prefix("lucene_"))
        {
            Some(rest) if rest.contains('_') => rest.split_once('_').ok_or_else(invalid)?,
            Some(rest) => {
                // LUCENE_47: one major digit followed by the minor digits
                if rest.len() < 2 || !rest.is_char_boundary(1) {
                    return Err(invalid());
                }
                rest.split_at(1)
            }
            None => trimmed.split_once('.').ok_or_else(invalid)?,
        };

        let parse_part = |part: &str| -> Result<u32> {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        Ok(Version::new(parse_part(major)?, parse_part(minor)?))
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::CURRENT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = RustemError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = RustemError;

    fn try_from(value: String) -> Result<Self> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
