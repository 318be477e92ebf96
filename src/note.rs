//! Pitch classes and their sharp or flat spelled note names.

use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use crate::Error;

// -------------------------------------------------------------------------------------------------

/// Chromatic note names, using sharps for the black keys.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic note names, using flats for the black keys.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Major keys which are spelled with flats. All other keys use sharps.
pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

// -------------------------------------------------------------------------------------------------

/// Resolve a note name to its chromatic position `[0..12)`.
///
/// Looks up the sharp spelled names first, then the flat spelled ones, so both `"F#"` and
/// `"Gb"` resolve to `6`. Returns `None` for names which are in neither table.
pub fn resolve_note_index(name: &str) -> Option<u8> {
    let name = name.trim();
    SHARP_NAMES
        .iter()
        .position(|n| *n == name)
        .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
        .map(|index| index as u8)
}

/// Spell the given chromatic position, wrapped into `[0..12)`, as note name.
pub fn spell_note(position: i32, use_flats: bool) -> &'static str {
    let index = position.rem_euclid(12) as usize;
    if use_flats {
        FLAT_NAMES[index]
    } else {
        SHARP_NAMES[index]
    }
}

/// Returns true if the major key with the given tonic name is written with flats.
pub fn prefer_flats(key: &str) -> bool {
    FLAT_KEYS.contains(&key.trim())
}

// -------------------------------------------------------------------------------------------------

/// A pitch class: one of the 12 chromatic positions, without octave. The subscript 's' in the
/// enum names means sharp.
///
/// Note implements From\<u8\> (wrapping), Into\<u8\> and TryFrom\<&str\>. Enharmonic names
/// such as `C#` and `Db` convert into the same note.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Note {
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

impl Note {
    /// All notes in chromatic order.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Chromatic position of the note: 0 = C, 1 = C# ...
    pub fn position(&self) -> u8 {
        *self as u8
    }

    /// Note name, using either the flat or the sharp spelling.
    pub fn name(&self, use_flats: bool) -> &'static str {
        spell_note(self.position() as i32, use_flats)
    }

    /// return a new note, transposed by the given number of semitones.
    #[must_use]
    pub fn transposed(&self, offset: i32) -> Self {
        Note::from((self.position() as i32 + offset).rem_euclid(12) as u8)
    }

    /// Ascending distance in semitones from this note to the other one, in range `[0..12)`.
    pub fn semitones_to(&self, other: Note) -> u8 {
        (other.position() + 12 - self.position()) % 12
    }
}

impl TryFrom<&str> for Note {
    type Error = Error;

    /// Try converting the given sharp or flat spelled note name to a Note value.
    fn try_from(s: &str) -> Result<Self, Error> {
        resolve_note_index(s)
            .map(Note::from)
            .ok_or_else(|| Error::UnknownNote {
                name: s.to_string(),
            })
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Note::try_from(s)
    }
}

impl From<u8> for Note {
    fn from(n: u8) -> Note {
        Self::ALL[(n % 12) as usize]
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> u8 {
        note as u8
    }
}

impl Add<u8> for Note {
    type Output = Self;
    fn add(self, rhs: u8) -> Self {
        self.transposed(rhs as i32)
    }
}

impl Sub<u8> for Note {
    type Output = Self;
    fn sub(self, rhs: u8) -> Self {
        self.transposed(-(rhs as i32))
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name(false))
    }
}

// --------------------------------------------------------------------------------------------------
