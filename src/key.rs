//! Major keys and the diatonic chords derived from them.

use std::{fmt::Display, str::FromStr};

use crate::{
    chord::DiatonicChord,
    note::{prefer_flats, resolve_note_index, spell_note, FLAT_NAMES, SHARP_NAMES},
    scale::ScaleDegree,
    Error, Note,
};

// -------------------------------------------------------------------------------------------------

/// A major key: a tonic note plus the spelling preference of the key.
///
/// Keys are plain values. Everything derived from them, such as the diatonic chords or the
/// related keys, is recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    tonic: Note,
    name: &'static str,
    use_flats: bool,
}

impl Key {
    /// Tonic note of the key.
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    /// Tonic name, spelled as the key was created, e.g. `"Gb"` or `"F#"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if notes in this key are spelled with flats.
    pub fn use_flats(&self) -> bool {
        self.use_flats
    }

    /// Spell a note, given as semitone offset from the tonic, with this key's preference.
    pub fn spell(&self, offset: i32) -> &'static str {
        spell_note(self.tonic.position() as i32 + offset, self.use_flats)
    }

    /// The chord built on the given scale degree.
    pub fn chord(&self, degree: ScaleDegree) -> DiatonicChord {
        DiatonicChord::new(self.tonic, degree, self.use_flats)
    }

    /// The seven diatonic chords of the key, in degree order `I` to `vii°`.
    pub fn chords(&self) -> Vec<DiatonicChord> {
        ScaleDegree::ALL
            .iter()
            .map(|degree| self.chord(*degree))
            .collect()
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;

    /// Try converting the given tonic name to a major key. Fails with `Error::UnknownKey` for
    /// names which do not resolve to a note.
    fn try_from(s: &str) -> Result<Self, Error> {
        let name = s.trim();
        let index = resolve_note_index(name).ok_or_else(|| Error::UnknownKey {
            name: s.to_string(),
        })? as usize;
        // keep the spelling the key was requested with, as static table entry
        let name = if SHARP_NAMES[index] == name {
            SHARP_NAMES[index]
        } else {
            FLAT_NAMES[index]
        };
        Ok(Self {
            tonic: Note::from(index as u8),
            name,
            use_flats: prefer_flats(name),
        })
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Key::try_from(s)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// -------------------------------------------------------------------------------------------------

/// The seven diatonic chords of the major key with the given tonic name.
pub fn chords_in_key(key: &str) -> Result<Vec<DiatonicChord>, Error> {
    let key = Key::try_from(key)?;
    log::debug!("Deriving diatonic chords for key '{}'", key);
    Ok(key.chords())
}

// --------------------------------------------------------------------------------------------------
