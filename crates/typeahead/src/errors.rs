//! # Error Types
//!
//! ## Overview
//!
//! Completion itself never fails. The errors here come from the edges of the crate, such as
//! reading a word list from disk.
use std::path::PathBuf;

/// Errors returned while building a [Dictionary](crate::dictionary::Dictionary).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Failure while reading a word list.
    #[error("Failed to read word list{}: {source}", display_path(.path))]
    Io {
        /// The file being read, if the list came from one.
        path: Option<PathBuf>,

        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A line in a word list held something other than a single word.
    #[error("Invalid word on line {line}: {word:?}")]
    InvalidWord {
        /// The 1-based line number.
        line: usize,

        /// The offending line, with surrounding whitespace removed.
        word: String,
    },
}

impl From<std::io::Error> for DictionaryError {
    fn from(source: std::io::Error) -> Self {
        DictionaryError::Io { path: None, source }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// Common result type for dictionary operations.
pub type DictionaryResult<V> = Result<V, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::InvalidWord { line: 3, word: "two words".into() };
        assert_eq!(err.to_string(), "Invalid word on line 3: \"two words\"");

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DictionaryError::Io { path: Some("words.txt".into()), source };
        assert_eq!(err.to_string(), "Failed to read word list words.txt: gone");

        let err = DictionaryError::from(std::io::Error::new(std::io::ErrorKind::Other, "oops"));
        assert_eq!(err.to_string(), "Failed to read word list: oops");
    }
}
