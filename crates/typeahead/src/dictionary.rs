//! # Static dictionary
//!
//! ## Overview
//!
//! A [Dictionary] holds the fixed set of words known before the user has typed anything. Words
//! are matched case-insensitively, but are always suggested with the spelling they were added
//! with.
//!
//! Dictionaries can be loaded from plain word lists, which contain one word per line. Blank
//! lines and lines starting with `#` are ignored.
//!
//! ```
//! use typeahead::dictionary::Dictionary;
//!
//! let list = "# Weather\nSunny\nsunset\n\nrain\n";
//! let dict = Dictionary::from_reader(list.as_bytes()).unwrap();
//!
//! assert_eq!(dict.len(), 3);
//! assert_eq!(dict.complete("SUN"), vec!["Sunny", "sunset"]);
//! ```
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::completion::CompletionMap;
use crate::errors::{DictionaryError, DictionaryResult};

/// A set of words, searchable by case-insensitive prefix.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    /// Maps the lowercase form of each word onto its original spelling.
    words: CompletionMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dictionary from a word list.
    pub fn from_reader<R: Read>(reader: R) -> DictionaryResult<Self> {
        let mut dict = Dictionary::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let word = line.trim();

            if word.is_empty() || word.starts_with('#') {
                continue;
            }

            if word.contains(char::is_whitespace) {
                let err = DictionaryError::InvalidWord { line: idx + 1, word: word.to_string() };

                return Err(err);
            }

            dict.insert(word);
        }

        return Ok(dict);
    }

    /// Read a dictionary from the word list stored at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let with_path = |source| DictionaryError::Io { path: Some(path.to_path_buf()), source };

        let file = File::open(path).map_err(with_path)?;
        let dict = Dictionary::from_reader(file).map_err(|e| {
            match e {
                DictionaryError::Io { path: None, source } => with_path(source),
                e => e,
            }
        })?;

        tracing::debug!(path = %path.display(), words = dict.len(), "loaded word list");

        return Ok(dict);
    }

    /// Add a word to this dictionary.
    ///
    /// Returns `false` if the word was empty, contained whitespace, or was already present in
    /// some spelling. The first spelling added for a word is the one that gets kept.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || word.contains(char::is_whitespace) {
            return false;
        }

        let key = word.to_lowercase();

        if self.words.contains_key(&key) {
            return false;
        }

        self.words.insert(key, word.to_string());

        return true;
    }

    /// Add every word from `other` that isn't already present.
    pub fn extend_from(&mut self, other: &Dictionary) {
        for (_, word) in other.words.iter() {
            self.insert(word);
        }
    }

    /// Whether `word` is present in some spelling.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether this dictionary contains zero words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the words whose lowercase form starts with the lowercase form of `prefix`.
    ///
    /// Words are returned in order of their lowercase forms.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let key = prefix.to_lowercase();

        self.complete_keyed(&key).map(|(_, word)| word).collect()
    }

    /// Like [Dictionary::complete], but also yields each word's lowercase form. The prefix must
    /// already be lowercase.
    pub(crate) fn complete_keyed<'a, 'b>(
        &'a self,
        prefix: &'b str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'b
    where
        'a: 'b,
    {
        self.words
            .complete_entries(prefix)
            .map(|(key, word)| (key.as_str(), word.as_str()))
    }

    /// Iterate over every word, in order of their lowercase forms.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|(_, word)| word.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut dict = Dictionary::new();

        for word in iter {
            dict.insert(word.as_ref());
        }

        return dict;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use temp_dir::TempDir;

    #[test]
    fn test_insert_keeps_first_spelling() {
        let mut dict = Dictionary::new();

        assert!(dict.insert("Sunny"));
        assert!(!dict.insert("sunny"));
        assert!(!dict.insert("SUNNY"));
        assert!(dict.insert("sunset"));

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("sUnNy"));
        assert_eq!(dict.complete("sun"), vec!["Sunny", "sunset"]);
    }

    #[test]
    fn test_insert_rejects_non_words() {
        let mut dict = Dictionary::new();

        assert!(!dict.insert(""));
        assert!(!dict.insert("two words"));
        assert!(!dict.insert("tab\tbed"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_complete() {
        let dict: Dictionary = ["what", "whatever", "When", "sunny"].into_iter().collect();

        assert_eq!(dict.complete("wh"), vec!["what", "whatever", "When"]);
        assert_eq!(dict.complete("WHAT"), vec!["what", "whatever"]);
        assert_eq!(dict.complete("x"), Vec::<&str>::new());
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["sunny", "what", "whatever", "When"]);
    }

    #[test]
    fn test_extend_from() {
        let mut a: Dictionary = ["Sunny", "rain"].into_iter().collect();
        let b: Dictionary = ["sunny", "snow"].into_iter().collect();

        a.extend_from(&b);

        assert_eq!(a.iter().collect::<Vec<_>>(), vec!["rain", "snow", "Sunny"]);
    }

    #[test]
    fn test_from_reader() {
        let list = "# comment\n\n  hello  \nworld\r\n#another\nHello\n";
        let dict = Dictionary::from_reader(list.as_bytes()).unwrap();

        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["hello", "world"]);
    }

    #[test]
    fn test_from_reader_invalid_word() {
        let list = "hello\n\nnot a word\n";
        let err = Dictionary::from_reader(list.as_bytes()).unwrap_err();

        match err {
            DictionaryError::InvalidWord { line, word } => {
                assert_eq!(line, 3);
                assert_eq!(word, "not a word");
            },
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.child("words.txt");
        fs::write(&path, "sunny\nsunset\n").unwrap();

        let dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 2);

        let missing = tmp.child("missing.txt");
        match Dictionary::load(&missing).unwrap_err() {
            DictionaryError::Io { path: Some(p), .. } => assert_eq!(p, missing),
            e => panic!("unexpected error: {e}"),
        }
    }
}
