//! # Common imports
//!
//! Re-exports the types and functions most hosts need.
pub use crate::dictionary::Dictionary;
pub use crate::engine::{
    apply_suggestion,
    cycle_suggestion,
    record_submission,
    EngineConfig,
    SuggestionEngine,
};
pub use crate::errors::{DictionaryError, DictionaryResult};
pub use crate::frequency::FrequencyMap;
pub use crate::session::{InputEvent, InputSession, Transition};
