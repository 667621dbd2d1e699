//! # Learned word frequencies
//!
//! ## Overview
//!
//! A [FrequencyMap] counts how many times each word has appeared in submitted text. Words are
//! normalized to lowercase before counting. Updating a map produces a new one, so that earlier
//! snapshots stay valid for whoever still holds them.
//!
//! ```
//! use typeahead::frequency::FrequencyMap;
//!
//! let learned = FrequencyMap::default()
//!     .with_submission("Sunny day")
//!     .with_submission("sunny evening");
//!
//! assert_eq!(learned.count("sunny"), 2);
//! assert_eq!(learned.count("DAY"), 1);
//! assert_eq!(learned.complete("s"), vec!["sunny"]);
//! ```
use std::cmp::Ordering;

use crate::completion::CompletionMap;
use crate::tokens::words;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct LearnedWord {
    count: u32,

    /// When this word was first seen, used to order words with equal counts.
    seen: u64,
}

/// Usage counts for words seen in submitted text.
#[derive(Clone, Debug, Default)]
pub struct FrequencyMap {
    words: CompletionMap<String, LearnedWord>,
    next_seen: u64,
}

impl FrequencyMap {
    /// How many times `word` has been submitted.
    pub fn count(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).map(|w| w.count).unwrap_or(0)
    }

    /// The number of distinct words learned so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words have been learned yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Produce a new map that also counts every word in `text`.
    ///
    /// Text that is empty after trimming leaves the counts unchanged.
    pub fn with_submission(&self, text: &str) -> FrequencyMap {
        let mut next = self.clone();

        for word in words(text) {
            next.bump(word.to_lowercase());
        }

        return next;
    }

    fn bump(&mut self, word: String) {
        let seen = self.next_seen;
        let entry = self.words.get_or_default(word);

        if entry.count == 0 {
            entry.seen = seen;
            self.next_seen += 1;
        }

        entry.count = entry.count.saturating_add(1);
    }

    /// Get the learned words starting with `prefix`, most frequently used first.
    ///
    /// Words used equally often are listed in the order they were first seen.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let key = prefix.to_lowercase();

        self.ranked_entries(&key).into_iter().map(|(word, _)| word).collect()
    }

    /// Get every learned word with its count, most frequently used first.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        self.ranked_entries("")
    }

    /// Like [FrequencyMap::complete], but with counts. The prefix must already be lowercase.
    pub(crate) fn ranked_entries(&self, prefix: &str) -> Vec<(&str, u32)> {
        let mut matches: Vec<(&String, &LearnedWord)> =
            self.words.complete_entries(prefix).collect();

        matches.sort_by(|(_, a), (_, b)| rank(a, b));
        matches.into_iter().map(|(word, lw)| (word.as_str(), lw.count)).collect()
    }
}

fn rank(a: &LearnedWord, b: &LearnedWord) -> Ordering {
    b.count.cmp(&a.count).then(a.seen.cmp(&b.seen))
}
