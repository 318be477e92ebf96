//! The songsmith prelude.
//!
//! The purpose of this module is to alleviate imports of common songsmith types and functions:
//!
//! ```
//! # #![allow(unused_imports)]
//! use songsmith::prelude::*;
//! ```

pub use super::{
    catalog::{rhyme_scheme, song_structure, RhymeScheme, SongStructure},
    chord::{chord_root, split_chord_label},
    circle::{circle_of_fifths, related_keys},
    exercise::{format_time, TickOutcome},
    key::chords_in_key,
    note::{prefer_flats, resolve_note_index, spell_note},
    platform::{NoWakeLock, SilentChime, TerminalBell},
    progression::{apply_template, common_progression, suggest_next, COMMON_PROGRESSIONS},
    // all public basic types
    Chime,
    Config,
    DiatonicChord,
    Error,
    Exercise,
    ExerciseCommand,
    ExerciseDriver,
    ExerciseState,
    Key,
    Note,
    Progression,
    ProgressionTemplate,
    PromptPicker,
    PromptSource,
    Quality,
    RelatedKeys,
    ScaleDegree,
    Ticker,
    WakeLock,
};
