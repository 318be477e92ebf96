//! Diatonic chords and chord label parsing.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    note::{resolve_note_index, spell_note},
    scale::{Quality, ScaleDegree},
    Note,
};

// --------------------------------------------------------------------------------------------------

// map of known chord quality suffixes with various aliases
lazy_static! {
    static ref QUALITY_TABLE: HashMap<&'static str, Quality> = {
        HashMap::from([
            ("", Quality::Major),
            ("maj", Quality::Major),
            ("M", Quality::Major),
            ("major", Quality::Major),
            ("m", Quality::Minor),
            ("min", Quality::Minor),
            ("-", Quality::Minor),
            ("minor", Quality::Minor),
            ("dim", Quality::Diminished),
            ("o", Quality::Diminished),
            ("°", Quality::Diminished),
            ("diminished", Quality::Diminished),
        ])
    };
}

/// Quality for the given chord label suffix, if it's a known triad suffix.
pub fn quality_from_suffix(suffix: &str) -> Option<Quality> {
    QUALITY_TABLE.get(suffix).copied()
}

// --------------------------------------------------------------------------------------------------

/// Split a chord label such as `"F#m"` or `"Bbdim"` into its root note and the remaining
/// suffix. The longest note name prefix wins, so `"Bb"` is a B flat and not a B minor chord
/// with a `b` suffix. Returns `None` when the label does not start with a note name.
pub fn split_chord_label(label: &str) -> Option<(Note, &str)> {
    let label = label.trim();
    [2, 1]
        .into_iter()
        .filter(|len| label.is_char_boundary(*len) && *len <= label.len())
        .find_map(|len| {
            resolve_note_index(&label[..len]).map(|index| (Note::from(index), &label[len..]))
        })
}

/// Bare root of a chord label with its quality suffix stripped, e.g. `"Dm"` -> `D`.
pub fn chord_root(label: &str) -> Option<Note> {
    split_chord_label(label).map(|(root, _)| root)
}

// --------------------------------------------------------------------------------------------------

/// A chord built on one of the major scale degrees of a specific key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicChord {
    degree: ScaleDegree,
    root: Note,
    root_name: &'static str,
    label: String,
}

impl DiatonicChord {
    /// Create a new chord for the given degree of a key with the given tonic and spelling.
    pub fn new(tonic: Note, degree: ScaleDegree, use_flats: bool) -> Self {
        let root = tonic.transposed(degree.offset() as i32);
        let root_name = spell_note(root.position() as i32, use_flats);
        let label = format!("{}{}", root_name, degree.quality().suffix());
        Self {
            degree,
            root,
            root_name,
            label,
        }
    }

    /// Scale degree of the chord in its key.
    pub fn degree(&self) -> ScaleDegree {
        self.degree
    }

    /// Root note.
    pub fn root(&self) -> Note {
        self.root
    }

    /// Root note name, spelled as the key prefers.
    pub fn root_name(&self) -> &'static str {
        self.root_name
    }

    /// Triad quality.
    pub fn quality(&self) -> Quality {
        self.degree.quality()
    }

    /// Chord label: root name plus quality suffix, e.g. `"Em"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if the given label names this exact chord: same root and same quality,
    /// with any of the known quality suffix aliases, e.g. `"Amin"` or `"A-"` for `"Am"`.
    pub fn has_label(&self, label: &str) -> bool {
        self.label == label.trim()
            || split_chord_label(label).is_some_and(|(root, suffix)| {
                root == self.root && quality_from_suffix(suffix) == Some(self.quality())
            })
    }

    /// Returns true if the given chord label denotes this chord, either by its full label or
    /// by its bare root, regardless of the given label's quality suffix.
    pub fn matches(&self, label: &str) -> bool {
        self.label == label.trim() || chord_root(label) == Some(self.root)
    }
}

impl Display for DiatonicChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

// --------------------------------------------------------------------------------------------------
