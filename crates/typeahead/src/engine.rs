//! # Suggestion engine
//!
//! ## Overview
//!
//! [SuggestionEngine] completes the word at the end of an input buffer. Candidates are drawn
//! from the composed lookup list: words learned from previous submissions, most frequently used
//! first, followed by the engine's static [Dictionary]. A word that appears in both is only
//! offered once, at its learned position.
//!
//! The remaining operations, [apply_suggestion], [cycle_suggestion] and [record_submission], are
//! free functions over plain values. None of them can fail.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::frequency::FrequencyMap;
use crate::tokens::{last_token, replace_last_token};
use crate::util::idx_wrap_next;

/// The number of suggestions offered when not otherwise configured.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

/// Tunable behaviour for a [SuggestionEngine].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EngineConfig {
    /// The most suggestions to offer at once. Zero disables suggestions entirely.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { max_suggestions: DEFAULT_MAX_SUGGESTIONS }
    }
}

/// Completes words against a static dictionary and a set of learned words.
#[derive(Clone, Debug, Default)]
pub struct SuggestionEngine {
    dictionary: Dictionary,
    config: EngineConfig,
}

impl SuggestionEngine {
    /// Create an engine over `dictionary` that uses the default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, EngineConfig::default())
    }

    /// Create an engine over `dictionary` with the given configuration.
    pub fn with_config(dictionary: Dictionary, config: EngineConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// The static words this engine completes against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// This engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Suggest completions for the last word in `text`.
    ///
    /// Matching is done on lowercase forms, but suggestions are returned as they're stored.
    /// A candidate equal to the word being typed is never offered. When `text` is empty or ends
    /// in whitespace there's no word to complete, and nothing is returned.
    pub fn compute_suggestions(&self, learned: &FrequencyMap, text: &str) -> Vec<String> {
        let max = self.config.max_suggestions;
        let token = last_token(text);

        if token.is_empty() || max == 0 {
            return vec![];
        }

        let prefix = token.to_lowercase();
        let suggestions: Vec<String> = self
            .composed(learned, &prefix)
            .filter(|(key, _)| *key != prefix)
            .take(max)
            .map(|(_, word)| word.to_string())
            .collect();

        tracing::trace!(token, ?suggestions, "computed suggestions");

        return suggestions;
    }

    /// The composed lookup list, restricted to words starting with `prefix`.
    ///
    /// An empty prefix yields the whole list.
    pub fn lookup_list(&self, learned: &FrequencyMap, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();

        self.composed(learned, &prefix).map(|(_, word)| word.to_string()).collect()
    }

    /// Yields `(lowercase, stored)` pairs for each candidate, learned words first. The prefix
    /// must already be lowercase.
    fn composed<'a>(
        &'a self,
        learned: &'a FrequencyMap,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let learned = learned.ranked_entries(prefix).into_iter().map(|(word, _)| (word, word));
        let statics = self.dictionary.complete_keyed(prefix);
        let mut seen = HashSet::new();

        learned.chain(statics).filter(move |(key, _)| seen.insert(*key))
    }
}

/// Replace the last word of `text` with `suggestion`, and start a new word after it.
///
/// ```
/// use typeahead::engine::apply_suggestion;
///
/// assert_eq!(apply_suggestion("What is a su", "sunny"), "What is a sunny ");
/// ```
pub fn apply_suggestion(text: &str, suggestion: &str) -> String {
    replace_last_token(text, suggestion)
}

/// Move the active suggestion forward by one, wrapping back around to the first.
///
/// `None` means that no suggestion is active, so the next one is the first. When there are no
/// suggestions the index is returned unchanged.
///
/// ```
/// use typeahead::engine::cycle_suggestion;
///
/// assert_eq!(cycle_suggestion(None, 3), Some(0));
/// assert_eq!(cycle_suggestion(Some(2), 3), Some(0));
/// assert_eq!(cycle_suggestion(Some(0), 0), Some(0));
/// ```
pub fn cycle_suggestion(current: Option<usize>, count: usize) -> Option<usize> {
    idx_wrap_next(current, count)
}

/// Count the words of a submitted message, returning the updated frequencies.
///
/// `learned` itself is left untouched.
pub fn record_submission(text: &str, learned: &FrequencyMap) -> FrequencyMap {
    let text = text.trim();

    if text.is_empty() {
        return learned.clone();
    }

    let next = learned.with_submission(text);

    tracing::debug!(learned = next.len(), "recorded submission");

    return next;
}
