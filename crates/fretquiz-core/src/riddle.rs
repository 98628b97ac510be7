//! Riddles: one fret per string.

use std::fmt;

use rand::seq::index;
use rand::Rng;

use crate::error::{QuizError, ValidationError};
use crate::theory::{note_at, GuitarString, PitchClass, NUM_STRINGS};

/// Longest neck the two-column fret labels can draw.
pub const MAX_NECK_LENGTH: u8 = 24;

/// Default number of frets offered when nothing else is configured.
pub const DEFAULT_NECK_LENGTH: u8 = 12;

/// How frets are drawn from `0..=neck_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub neck_length: u8,
    /// Allow two strings to share a fret in the same riddle.
    pub allow_repeats: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            neck_length: DEFAULT_NECK_LENGTH,
            allow_repeats: false,
        }
    }
}

impl SampleOptions {
    /// Check that a riddle can be drawn with these options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.neck_length > MAX_NECK_LENGTH {
            return Err(ValidationError::NeckTooLong {
                neck_length: self.neck_length,
                max: MAX_NECK_LENGTH,
            });
        }
        let positions = self.neck_length as usize + 1;
        if !self.allow_repeats && positions < NUM_STRINGS {
            return Err(ValidationError::NeckTooShort {
                neck_length: self.neck_length,
                strings: NUM_STRINGS,
            });
        }
        Ok(())
    }
}

/// One fret position per string, thinnest string first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Riddle {
    frets: [u8; NUM_STRINGS],
}

impl Riddle {
    /// Build a riddle from explicit frets, checking each against the neck.
    pub fn new(frets: &[u8], neck_length: u8) -> Result<Self, QuizError> {
        let frets: [u8; NUM_STRINGS] =
            frets.try_into().map_err(|_| ValidationError::RiddleLength {
                expected: NUM_STRINGS,
                got: frets.len(),
            })?;
        if let Some(&fret) = frets.iter().find(|&&f| f > neck_length) {
            return Err(ValidationError::FretOutOfRange { fret, neck_length }.into());
        }
        Ok(Self { frets })
    }

    /// Draw a random riddle.
    ///
    /// Without repeats the six frets are distinct, which needs at least six
    /// positions on the neck.
    pub fn sample<R: Rng>(rng: &mut R, options: &SampleOptions) -> Result<Self, QuizError> {
        options.validate()?;
        let positions = options.neck_length as usize + 1;

        let mut frets = [0u8; NUM_STRINGS];
        if options.allow_repeats {
            for fret in &mut frets {
                *fret = rng.gen_range(0..=options.neck_length);
            }
        } else {
            for (slot, fret) in frets
                .iter_mut()
                .zip(index::sample(rng, positions, NUM_STRINGS))
            {
                *slot = fret as u8;
            }
        }

        tracing::debug!(?frets, "sampled riddle");
        Ok(Self { frets })
    }

    pub fn frets(&self) -> &[u8; NUM_STRINGS] {
        &self.frets
    }

    pub fn fret(&self, string: GuitarString) -> u8 {
        self.frets[string.index()]
    }

    /// `(string, fret)` pairs, thinnest string first.
    pub fn positions(&self) -> impl Iterator<Item = (GuitarString, u8)> + '_ {
        GuitarString::ALL.into_iter().zip(self.frets.iter().copied())
    }

    /// The note at each position.
    pub fn correct_notes(&self) -> [PitchClass; NUM_STRINGS] {
        let mut notes = [PitchClass::new(0); NUM_STRINGS];
        for (note, (string, fret)) in notes.iter_mut().zip(self.positions()) {
            *note = note_at(string, fret);
        }
        notes
    }
}

impl fmt::Display for Riddle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frets: Vec<String> = self.frets.iter().map(u8::to_string).collect();
        f.write_str(&frets.join(","))
    }
}
