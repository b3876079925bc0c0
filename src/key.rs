use std::fmt;
use std::str::FromStr;

/// Longest key accepted under `/objects/`
pub const MAX_KEY_LEN: usize = 10;

/// Why a candidate key was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("key is empty")]
    Empty,
    #[error("key is {len} characters long, at most {max} allowed", max = MAX_KEY_LEN)]
    TooLong { len: usize },
    #[error("key contains non-alphanumeric character {ch:?}")]
    InvalidChar { ch: char },
}

/// A validated object key: 1 to 10 ASCII letters or digits.
///
/// The only way to build one is through [`ObjectKey::parse`], so anything
/// holding an `ObjectKey` can assume it is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn parse(candidate: &str) -> Result<Self, KeyError> {
        if candidate.is_empty() {
            return Err(KeyError::Empty);
        }

        if let Some(ch) = candidate.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(KeyError::InvalidChar { ch });
        }

        // All ASCII from here on, so bytes == chars
        if candidate.len() > MAX_KEY_LEN {
            return Err(KeyError::TooLong {
                len: candidate.len(),
            });
        }

        Ok(Self(candidate.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
