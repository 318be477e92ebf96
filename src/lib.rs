//! Songwriting practice tools: a music theory engine for building chord progressions,
//! reference catalogs of song and rhyme structures, and a timed object writing exercise.
//!
//! The theory engine is a set of pure functions over fixed lookup tables. Everything is derived
//! from a [`Key`] on demand:
//!
//! ```rust
//! use songsmith::prelude::*;
//!
//! let key = Key::try_from("G").unwrap();
//! let chords = key.chords().iter().map(|c| c.label().to_string()).collect::<Vec<_>>();
//! assert_eq!(chords, ["G", "Am", "Bm", "C", "D", "Em", "F#dim"]);
//! assert_eq!(suggest_next(&["D"], &key), ["G", "Em", "C"]);
//! assert_eq!(apply_template(&["I", "IV", "V", "I"], &key), ["G", "C", "D", "G"]);
//! ```

pub mod error;
pub use error::Error;

pub mod note;
pub use note::Note;

pub mod scale;
pub use scale::{Quality, ScaleDegree};

pub mod chord;
pub use chord::DiatonicChord;

pub mod key;
pub use key::Key;

pub mod circle;
pub use circle::RelatedKeys;

pub mod progression;
pub use progression::{Progression, ProgressionTemplate};

pub mod catalog;

pub mod prompt;
pub use prompt::{PromptPicker, PromptSource};

pub mod platform;
pub use platform::{Chime, WakeLock};

pub mod exercise;
pub use exercise::{Exercise, ExerciseCommand, ExerciseDriver, ExerciseState, Ticker};

pub mod config;
pub use config::Config;

#[cfg(feature = "generator")]
pub mod generator;

pub mod prelude;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn songwriting_session() -> Result<(), Error> {
        // pick a key and look around on the circle of fifths
        let key = Key::try_from("D")?;
        let related = key.related().expect("D is on the circle of fifths");
        assert_eq!(related.dominant, Key::try_from("A")?);
        assert_eq!(related.relative_minor, "Bm");

        // start from a template, then extend it with suggestions
        let mut progression = Progression::new();
        let template = common_progression("50s").expect("known template");
        progression.apply_template(template.tokens, &key);
        assert_eq!(progression.chords(), ["D", "Bm", "G", "A"]);

        let suggestions = progression.suggestions(&key);
        assert_eq!(suggestions, ["D", "Bm", "G"]);
        progression.add(suggestions[1].clone());
        assert_eq!(progression.suggestions(&key), ["Em", "G", "A", "F#m"]);

        // changing the key re-derives everything, the progression stays as it is
        let key = Key::try_from("Bb")?;
        let all = key.chords().iter().map(|c| c.label().to_string()).collect::<Vec<_>>();
        assert_eq!(progression.suggestions(&key), all);

        progression.remove_last();
        assert_eq!(progression.len(), 4);
        Ok(())
    }
}
