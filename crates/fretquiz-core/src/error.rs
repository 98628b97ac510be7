//! Quiz error types.
//!
//! `InvalidNote` is the only error a well-formed round can produce. The
//! `Validation` variants make malformed inputs (short answers, impossible
//! neck lengths, bad riddles) explicit instead of letting them index out of
//! bounds.

use thiserror::Error;

/// Errors produced by note lookup, riddle construction, and answer checking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A note name was found in neither the sharp nor the flat table.
    #[error("Invalid note {0}")]
    InvalidNote(String),

    /// Input was structurally wrong before any note lookup happened.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl QuizError {
    /// Returns `true` if this error came from an unrecognised note name.
    pub fn is_invalid_note(&self) -> bool {
        matches!(self, QuizError::InvalidNote(_))
    }
}

/// Structural validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The answer did not name one note per string.
    #[error("expected {expected} notes, got {got}")]
    AnswerCount { expected: usize, got: usize },

    /// Not enough distinct frets to give every string its own.
    #[error("neck length {neck_length} is too short: {strings} distinct frets needed")]
    NeckTooShort { neck_length: u8, strings: usize },

    /// Neck longer than the fretboard diagrams can draw.
    #[error("neck length {neck_length} exceeds the maximum of {max}")]
    NeckTooLong { neck_length: u8, max: u8 },

    /// A fixed riddle named a fret past the end of the neck.
    #[error("fret {fret} is outside 0..={neck_length}")]
    FretOutOfRange { fret: u8, neck_length: u8 },

    /// A fixed riddle did not give one fret per string.
    #[error("a riddle needs {expected} frets, got {got}")]
    RiddleLength { expected: usize, got: usize },

    /// A string label other than `e B G D A E`.
    #[error("unknown string '{0}'")]
    UnknownString(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_note_message() {
        let err = QuizError::InvalidNote("H".into());
        assert_eq!(err.to_string(), "Invalid note H");
        assert!(err.is_invalid_note());
    }

    #[test]
    fn validation_is_transparent() {
        let err: QuizError = ValidationError::AnswerCount {
            expected: 6,
            got: 4,
        }
        .into();
        assert_eq!(err.to_string(), "expected 6 notes, got 4");
        assert!(!err.is_invalid_note());
    }
}
