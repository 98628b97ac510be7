//! Pitch-class arithmetic for a standard-tuned guitar.
//!
//! A pitch class is stored as a semitone index in `0..12` counted from A, and
//! rendered through two independent name tables. Converting between sharp
//! and flat spellings always goes through the index, never name to name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, ValidationError};

/// Number of strings on the instrument.
pub const NUM_STRINGS: usize = 6;

const SHARP_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

const FLAT_NAMES: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// One of the twelve semitone classes, `A = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any semitone count, reduced modulo 12.
    pub const fn new(semitone: u8) -> Self {
        Self(semitone % 12)
    }

    /// Semitone index in `0..12`.
    pub fn semitone(self) -> u8 {
        self.0
    }

    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }

    /// Name under the given spelling preference.
    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => self.sharp_name(),
            Spelling::Flats => self.flat_name(),
        }
    }

    /// Move up by `semitones`, wrapping at the octave.
    pub fn transpose(self, semitones: u8) -> Self {
        Self(((self.0 as u16 + semitones as u16) % 12) as u8)
    }

    /// Look a name up in the sharp table, then the flat table.
    pub fn from_name(name: &str) -> Result<Self, QuizError> {
        SHARP_NAMES
            .iter()
            .position(|n| *n == name)
            .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
            .map(|i| Self(i as u8))
            .ok_or_else(|| QuizError::InvalidNote(name.to_string()))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

impl FromStr for PitchClass {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Which accidental spelling to show first when a note has two names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Sharps => write!(f, "sharps"),
            Spelling::Flats => write!(f, "flats"),
        }
    }
}

/// The six strings of a standard-tuned guitar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuitarString {
    HighE,
    B,
    G,
    D,
    A,
    LowE,
}

impl GuitarString {
    /// All strings, thinnest first. Riddles and diagrams use this order.
    pub const ALL: [GuitarString; NUM_STRINGS] = [
        GuitarString::HighE,
        GuitarString::B,
        GuitarString::G,
        GuitarString::D,
        GuitarString::A,
        GuitarString::LowE,
    ];

    /// Label drawn at the left of the fretboard.
    pub fn label(self) -> &'static str {
        match self {
            GuitarString::HighE => "e",
            GuitarString::B => "B",
            GuitarString::G => "G",
            GuitarString::D => "D",
            GuitarString::A => "A",
            GuitarString::LowE => "E",
        }
    }

    /// Pitch class of the open string.
    pub fn open_pitch(self) -> PitchClass {
        match self {
            GuitarString::HighE | GuitarString::LowE => PitchClass::new(7),
            GuitarString::B => PitchClass::new(2),
            GuitarString::G => PitchClass::new(10),
            GuitarString::D => PitchClass::new(5),
            GuitarString::A => PitchClass::new(0),
        }
    }

    /// The three wound bass strings are drawn with `=`.
    pub fn is_thick(self) -> bool {
        matches!(
            self,
            GuitarString::LowE | GuitarString::A | GuitarString::D
        )
    }

    /// Position in [`GuitarString::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuitarString {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuitarString::ALL
            .iter()
            .copied()
            .find(|g| g.label() == s)
            .ok_or_else(|| ValidationError::UnknownString(s.to_string()).into())
    }
}

/// Semitone index of a note name, sharp table first.
pub fn semitone_index_of(name: &str) -> Result<u8, QuizError> {
    PitchClass::from_name(name).map(PitchClass::semitone)
}

/// The note sounded at `fret` on `string`.
pub fn note_at(string: GuitarString, fret: u8) -> PitchClass {
    string.open_pitch().transpose(fret)
}

/// [`note_at`] addressed by string label (`"e"`, `"B"`, ... `"E"`).
pub fn note_at_label(label: &str, fret: u8) -> Result<PitchClass, QuizError> {
    Ok(note_at(label.parse()?, fret))
}

/// Flat spelling of a note name. Naturals and flats map to their flat form.
pub fn sharp_to_flat(name: &str) -> Result<&'static str, QuizError> {
    PitchClass::from_name(name).map(PitchClass::flat_name)
}

/// Sharp spelling of a note name. Naturals and sharps map to their sharp form.
pub fn flat_to_sharp(name: &str) -> Result<&'static str, QuizError> {
    PitchClass::from_name(name).map(PitchClass::sharp_name)
}

pub fn is_sharp(name: &str) -> bool {
    name.contains('#')
}

pub fn is_flat(name: &str) -> bool {
    name.contains('b')
}
