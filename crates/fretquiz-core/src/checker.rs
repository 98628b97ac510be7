//! Answer checking with sharp/flat equivalence.

use crate::answer::Answer;
use crate::error::{QuizError, ValidationError};
use crate::riddle::Riddle;
use crate::theory::{is_flat, note_at, semitone_index_of, GuitarString, NUM_STRINGS};

/// Per-string verdicts for one round, thinnest string first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    marks: [bool; NUM_STRINGS],
}

impl RoundResult {
    pub fn new(marks: [bool; NUM_STRINGS]) -> Self {
        Self { marks }
    }

    pub fn marks(&self) -> &[bool; NUM_STRINGS] {
        &self.marks
    }

    pub fn is_right(&self, string: GuitarString) -> bool {
        self.marks[string.index()]
    }

    /// `true` when every string was named correctly.
    pub fn is_correct(&self) -> bool {
        self.marks.iter().all(|&m| m)
    }

    pub fn wrong_count(&self) -> usize {
        self.marks.iter().filter(|&&m| !m).count()
    }
}

/// Whether `token` names the note at `fret` on `string`.
///
/// The canonical sharp name passes, and so does a flat spelling of the same
/// pitch class (`Gb` where the answer is `F#`). Only flat-spelled tokens are
/// looked up, so `Fb` is an error while `H` or `E#` is just wrong.
pub fn check_note(string: GuitarString, fret: u8, token: &str) -> Result<bool, QuizError> {
    let correct = note_at(string, fret);
    if correct.sharp_name() == token {
        return Ok(true);
    }
    if is_flat(token) {
        return Ok(semitone_index_of(token)? == correct.semitone());
    }
    Ok(false)
}

/// Check a full answer against a riddle.
///
/// Answers naming fewer than six notes are rejected rather than scored short.
pub fn check_answer(answer: &Answer, riddle: &Riddle) -> Result<RoundResult, QuizError> {
    if answer.len() != NUM_STRINGS {
        return Err(ValidationError::AnswerCount {
            expected: NUM_STRINGS,
            got: answer.len(),
        }
        .into());
    }

    let mut marks = [false; NUM_STRINGS];
    for (mark, ((string, fret), token)) in marks
        .iter_mut()
        .zip(riddle.positions().zip(answer.tokens()))
    {
        *mark = check_note(string, fret, token)?;
    }

    let result = RoundResult::new(marks);
    tracing::debug!(%riddle, %answer, ?marks, "checked answer");
    Ok(result)
}
