//! fretquiz-core — Note theory, answer checking, and fretboard rendering.
//!
//! This crate holds everything a fretboard quiz round needs apart from the
//! terminal: mapping string/fret positions to notes, checking typed answers
//! with sharp/flat equivalence, and drawing the ASCII diagrams.

pub mod answer;
pub mod checker;
pub mod error;
pub mod render;
pub mod riddle;
pub mod theory;

pub use answer::Answer;
pub use checker::{check_answer, check_note, RoundResult};
pub use error::{QuizError, ValidationError};
pub use riddle::{Riddle, SampleOptions};
pub use theory::{note_at, GuitarString, PitchClass, Spelling, NUM_STRINGS};
