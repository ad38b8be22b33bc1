//! Question data model and providers for the quizling minigame engine.
//!
//! A [`QuestionItem`] is one validated multiple-choice prompt. Question sets
//! come either from JSON files ([`QuestionSet`]) or from the built-in
//! per-subject providers in [`provider`].

mod item;
pub mod provider;
mod set;

pub use item::{QuestionError, QuestionItem};
pub use provider::{Subject, questions_for_subject};
pub use set::QuestionSet;
