//! Note names — letter, accidental, and octave.
//!
//! Notes are written the way the host sound service expects them
//! (`"E2"`, `"F#3"`, `"Bb5"`, `"C-1"`) and always display with sharps once
//! they have been transposed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteParseError;

/// Parsed octaves must fall in this range (C-1 through B10).
/// Concert pitch of A4 in Hz.
pub const A4_HZ: f64 = 440.0;

pub const OCTAVE_RANGE: std::ops::RangeInclusive<i32> = -1..=10;

/// Canonical spelling of each pitch class, indexed by semitone above C.
const SHARP_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Semitones above C in the same octave.
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// A spelled note. Two notes can sound the same (`F#4`, `Gb4`) while
/// comparing unequal; compare [`Note::midi`] for pitch identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: i32,
}

impl Note {
    pub const fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        Note {
            letter,
            accidental,
            octave,
        }
    }

    pub const fn natural(letter: Letter, octave: i32) -> Self {
        Note::new(letter, Accidental::Natural, octave)
    }

    /// MIDI note number: C4 = 60, C-1 = 0.
    ///
    /// Enharmonic spellings that cross an octave line resolve by pitch:
    /// `B#3` is 60 and `Cb4` is 59.
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.letter.semitone() + self.accidental.offset()
    }

    /// Build the canonical (sharp-spelled) note for a MIDI number.
    pub fn from_midi(midi: i32) -> Self {
        let (letter, accidental) = SHARP_SPELLINGS[midi.rem_euclid(12) as usize];
        Note::new(letter, accidental, midi.div_euclid(12) - 1)
    }

    /// Respell with sharps only, keeping the pitch.
    pub fn canonical(&self) -> Self {
        Note::from_midi(self.midi())
    }

    /// Frequency in Hz, with `tuning_pitch` as the frequency of A4.
    pub fn frequency(&self, tuning_pitch: f64) -> f64 {
        tuning_pitch * (2.0_f64).powf((self.midi() as f64 - 69.0) / 12.0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        write!(f, "{}{}{}", self.letter.as_char(), accidental, self.octave)
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(NoteParseError::Empty)?;
        let letter = Letter::from_char(first.to_ascii_uppercase())
            .ok_or(NoteParseError::InvalidLetter { ch: first })?;

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (Accidental::Sharp, &rest[1..]),
            Some('b') => (Accidental::Flat, &rest[1..]),
            _ => (Accidental::Natural, rest),
        };

        let octave = octave_str
            .parse::<i32>()
            .ok()
            .filter(|o| OCTAVE_RANGE.contains(o))
            .ok_or_else(|| NoteParseError::InvalidOctave {
                text: octave_str.to_string(),
            })?;

        Ok(Note::new(letter, accidental, octave))
    }
}

impl TryFrom<String> for Note {
    type Error = NoteParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
