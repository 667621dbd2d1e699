//! # typeahead
//!
//! ## Overview
//!
//! This crate provides predictive word completion for text inputs. Words come from two places:
//! a static [Dictionary](dictionary::Dictionary) supplied up front, and a
//! [FrequencyMap](frequency::FrequencyMap) of words learned from text the user has submitted.
//! Learned words are ranked by how often they've been used, and always come before static words
//! that share the same prefix.
//!
//! The [engine] module contains the completion functions themselves, which operate on explicit
//! values instead of hidden state. The [session] module builds on them to provide a small state
//! machine that an input widget can feed its events into.
//!
//! ## Example
//!
//! ```
//! use typeahead::prelude::*;
//!
//! let dict: Dictionary = ["what", "whatever", "sunny", "sunset"].into_iter().collect();
//! let engine = SuggestionEngine::new(dict);
//!
//! let learned = FrequencyMap::default();
//! assert_eq!(engine.compute_suggestions(&learned, "wha"), vec!["what", "whatever"]);
//!
//! let learned = record_submission("sunset", &learned);
//! assert_eq!(engine.compute_suggestions(&learned, "so su"), vec!["sunset", "sunny"]);
//! assert_eq!(apply_suggestion("so su", "sunset"), "so sunset ");
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_return)]

#[macro_use]
mod util;

pub mod completion;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod frequency;
pub mod prelude;
pub mod session;
pub mod tokens;
