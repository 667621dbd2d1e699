//! # Input sessions
//!
//! ## Overview
//!
//! An [InputSession] is everything an input widget needs to remember between events: the text
//! being composed, the current suggestions, which of them is highlighted, and the words learned
//! from earlier submissions. Feeding an [InputEvent] to [InputSession::apply] produces the next
//! session without modifying the current one.
//!
//! ## Example
//!
//! ```
//! use typeahead::prelude::*;
//!
//! let dict: Dictionary = ["sunny", "sunset"].into_iter().collect();
//! let engine = SuggestionEngine::new(dict);
//!
//! let session = InputSession::default();
//! let session = session.apply(&engine, InputEvent::Edit("It was su".into())).session;
//! assert_eq!(session.suggestions(), ["sunny", "sunset"]);
//!
//! let session = session.apply(&engine, InputEvent::Cycle).session;
//! let session = session.apply(&engine, InputEvent::Cycle).session;
//! assert_eq!(session.active(), Some(1));
//!
//! let session = session.apply(&engine, InputEvent::Confirm).session;
//! assert_eq!(session.text(), "It was sunset ");
//!
//! let done = session.apply(&engine, InputEvent::Confirm);
//! assert_eq!(done.submitted.as_deref(), Some("It was sunset "));
//! assert_eq!(done.session.text(), "");
//! ```
use std::rc::Rc;

use crate::engine::{apply_suggestion, cycle_suggestion, record_submission, SuggestionEngine};
use crate::frequency::FrequencyMap;

/// Something the user did to an input widget.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// The text in the input buffer changed.
    Edit(String),

    /// Highlight the next suggestion, wrapping around to the first.
    Cycle,

    /// Accept the suggestion at the given index, such as after clicking it.
    Select(usize),

    /// Accept the highlighted suggestion, if there is one.
    AcceptActive,

    /// Accept the highlighted suggestion if there is one, and otherwise submit the text.
    Confirm,

    /// Submit the text in the input buffer.
    Submit,
}

/// The result of applying an [InputEvent] to an [InputSession].
#[derive(Clone, Debug)]
pub struct Transition {
    /// The session after the event.
    pub session: InputSession,

    /// The text that was submitted, if the event caused a submission.
    pub submitted: Option<String>,
}

impl From<InputSession> for Transition {
    fn from(session: InputSession) -> Self {
        Transition { session, submitted: None }
    }
}

/// The state of a single text input, along with what it has learned so far.
///
/// Sessions produced by editing share their learned words with the session they came from. Only
/// a submission builds a new [FrequencyMap].
#[derive(Clone, Debug, Default)]
pub struct InputSession {
    text: String,
    suggestions: Vec<String>,
    active: Option<usize>,
    learned: Rc<FrequencyMap>,
}

impl InputSession {
    /// Start a session with previously learned words.
    pub fn with_learned(learned: FrequencyMap) -> Self {
        InputSession { learned: Rc::new(learned), ..Default::default() }
    }

    /// The text being composed.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Completions for the last word of [InputSession::text].
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_slice()
    }

    /// The index of the highlighted suggestion.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The highlighted suggestion.
    pub fn active_suggestion(&self) -> Option<&str> {
        self.active.and_then(|i| self.suggestions.get(i)).map(String::as_str)
    }

    /// Words learned from submissions during this session.
    pub fn learned(&self) -> &FrequencyMap {
        &self.learned
    }

    /// Compute the session that follows `event`.
    pub fn apply(&self, engine: &SuggestionEngine, event: InputEvent) -> Transition {
        match event {
            InputEvent::Edit(text) => self.edit(engine, text).into(),
            InputEvent::Cycle => {
                let mut next = self.clone();
                next.active = cycle_suggestion(self.active, self.suggestions.len());

                next.into()
            },
            InputEvent::Select(idx) => self.select(engine, Some(idx)).into(),
            InputEvent::AcceptActive => self.select(engine, self.active).into(),
            InputEvent::Confirm => {
                if self.active_suggestion().is_some() {
                    self.select(engine, self.active).into()
                } else {
                    self.submit()
                }
            },
            InputEvent::Submit => self.submit(),
        }
    }

    fn edit(&self, engine: &SuggestionEngine, text: String) -> InputSession {
        let suggestions = engine.compute_suggestions(&self.learned, &text);

        InputSession {
            text,
            suggestions,
            active: None,
            learned: Rc::clone(&self.learned),
        }
    }

    fn select(&self, engine: &SuggestionEngine, idx: Option<usize>) -> InputSession {
        match idx.and_then(|i| self.suggestions.get(i)) {
            Some(suggestion) => {
                let text = apply_suggestion(&self.text, suggestion);

                self.edit(engine, text)
            },
            None => self.clone(),
        }
    }

    fn submit(&self) -> Transition {
        if self.text.trim().is_empty() {
            return self.clone().into();
        }

        let learned = record_submission(&self.text, &self.learned);
        let session = InputSession::with_learned(learned);

        Transition { session, submitted: Some(self.text.clone()) }
    }
}
