//! Chord progressions: next chord suggestions, common progression templates and the
//! progression a user builds chord by chord.

use crate::{chord::DiatonicChord, scale::ScaleDegree, Key};

// -------------------------------------------------------------------------------------------------

/// A named progression in roman numeral notation, e.g. `I V vi IV`.
///
/// Tokens are diatonic degree labels or borrowed degree markers with a flat prefix, such as
/// `bVII`, which refer to a degree lowered by one semitone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub tokens: &'static [&'static str],
}

/// Catalog of commonly used progressions.
pub const COMMON_PROGRESSIONS: [ProgressionTemplate; 8] = [
    ProgressionTemplate {
        name: "Classic",
        description: "Traditional resolution",
        tokens: &["I", "IV", "V", "I"],
    },
    ProgressionTemplate {
        name: "Pop",
        description: "Most popular progression",
        tokens: &["I", "V", "vi", "IV"],
    },
    ProgressionTemplate {
        name: "50s",
        description: "Doo-wop progression",
        tokens: &["I", "vi", "IV", "V"],
    },
    ProgressionTemplate {
        name: "Jazz",
        description: "Jazz standard cadence",
        tokens: &["ii", "V", "I"],
    },
    ProgressionTemplate {
        name: "Sensitive",
        description: "Emotional ballad feel",
        tokens: &["I", "IV", "vi", "V"],
    },
    ProgressionTemplate {
        name: "Minor Pop",
        description: "Darker pop feel",
        tokens: &["vi", "IV", "I", "V"],
    },
    ProgressionTemplate {
        name: "Rock",
        description: "Simple rock progression",
        tokens: &["I", "V", "IV", "I"],
    },
    ProgressionTemplate {
        name: "Mixolydian",
        description: "Rock/folk borrowed chord",
        tokens: &["I", "bVII", "IV", "I"],
    },
];

/// Look up a common progression by name, ignoring case.
pub fn common_progression(name: &str) -> Option<&'static ProgressionTemplate> {
    let name = name.trim();
    COMMON_PROGRESSIONS
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(name))
}

impl ProgressionTemplate {
    /// Concrete chord labels of this template in the given key.
    pub fn chords(&self, key: &Key) -> Vec<String> {
        apply_template(self.tokens, key)
    }
}

// -------------------------------------------------------------------------------------------------

/// Idiomatic next degrees for each scale degree, most common resolution first.
pub fn common_movements(degree: ScaleDegree) -> &'static [ScaleDegree] {
    use ScaleDegree::*;
    match degree {
        I => &[IV, V, VI, II],
        II => &[V, VII, IV],
        III => &[VI, IV, II],
        IV => &[V, I, II, VII],
        V => &[I, VI, IV],
        VI => &[II, IV, V, III],
        VII => &[I, III],
    }
}

/// Suggest chords which may follow the given progression in the given key.
///
/// Without any played chords, the first four diatonic chords (`I`, `ii`, `iii`, `IV`) are
/// returned as a starting palette. Otherwise the last chord is matched against the key's
/// diatonic chords, by full label or by bare root, and the chords of its common movements are
/// returned in order of likelihood. When the last chord is not diatonic, e.g. a borrowed chord,
/// all seven diatonic chords are returned.
pub fn suggest_next<S: AsRef<str>>(progression: &[S], key: &Key) -> Vec<String> {
    let chords = key.chords();
    let Some(last) = progression.last() else {
        return labels(chords.iter().take(4));
    };
    let last = last.as_ref();
    let current = chords
        .iter()
        .find(|chord| chord.has_label(last))
        .or_else(|| chords.iter().find(|chord| chord.matches(last)));
    match current {
        Some(current) => {
            log::debug!(
                "Chord '{}' is degree {} in key '{}'",
                last,
                current.degree(),
                key
            );
            common_movements(current.degree())
                .iter()
                .map(|degree| chords[degree.index()].label().to_string())
                .collect()
        }
        None => {
            log::debug!("Chord '{}' is not diatonic in key '{}'", last, key);
            labels(chords.iter())
        }
    }
}

fn labels<'a>(chords: impl Iterator<Item = &'a DiatonicChord>) -> Vec<String> {
    chords.map(|chord| chord.label().to_string()).collect()
}

// -------------------------------------------------------------------------------------------------

/// Resolve a single roman numeral token to a chord label in the given key.
///
/// Borrowed degree markers (`b` + roman numeral) resolve to the bare root one semitone below
/// the diatonic degree. Other tokens resolve to the matching diatonic chord label. Tokens which
/// match nothing are returned verbatim, as literal chord names.
pub fn resolve_token(token: &str, key: &Key) -> String {
    if let Some(borrowed) = token.strip_prefix('b').and_then(ScaleDegree::from_roman) {
        return key.spell(borrowed.offset() as i32 - 1).to_string();
    }
    match ScaleDegree::try_from(token) {
        Ok(degree) => key.chord(degree).label().to_string(),
        Err(_) => {
            log::debug!("Passing through unknown progression token '{}'", token);
            token.to_string()
        }
    }
}

/// Translate the given roman numeral template into concrete chord labels for the given key.
pub fn apply_template<S: AsRef<str>>(tokens: &[S], key: &Key) -> Vec<String> {
    tokens
        .iter()
        .map(|token| resolve_token(token.as_ref(), key))
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// An ordered list of chord labels, built by appending chords or replaced as a whole by
/// applying a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progression {
    chords: Vec<String>,
}

impl Progression {
    /// Create a new, empty progression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chord labels in play order.
    pub fn chords(&self) -> &[String] {
        &self.chords
    }

    /// Last played chord, if any.
    pub fn last(&self) -> Option<&str> {
        self.chords.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Append a chord.
    pub fn add<S: Into<String>>(&mut self, chord: S) {
        self.chords.push(chord.into());
    }

    /// Remove and return the last chord.
    pub fn remove_last(&mut self) -> Option<String> {
        self.chords.pop()
    }

    /// Remove all chords.
    pub fn clear(&mut self) {
        self.chords.clear();
    }

    /// Replace the whole progression with the given template, resolved in the given key.
    pub fn apply_template<S: AsRef<str>>(&mut self, tokens: &[S], key: &Key) {
        self.chords = apply_template(tokens, key);
    }

    /// Suggested next chords in the given key, see [`suggest_next`].
    pub fn suggestions(&self, key: &Key) -> Vec<String> {
        suggest_next(&self.chords, key)
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn key(name: &str) -> Key {
        Key::try_from(name).unwrap()
    }

    #[test]
    fn suggestions_without_chords() {
        let empty: [&str; 0] = [];
        assert_eq!(suggest_next(&empty, &key("C")), vec!["C", "Dm", "Em", "F"]);
        assert_eq!(suggest_next(&empty, &key("Bb")), vec!["Bb", "Cm", "Dm", "Eb"]);
    }

    #[test]
    fn suggestions_follow_movements() {
        assert_eq!(suggest_next(&["G"], &key("C")), vec!["C", "Am", "F"]);
        assert_eq!(suggest_next(&["C"], &key("C")), vec!["F", "G", "Am", "Dm"]);
        assert_eq!(suggest_next(&["F", "Dm"], &key("C")), vec!["G", "Bdim", "F"]);
        assert_eq!(suggest_next(&["Bdim"], &key("C")), vec!["C", "Em"]);
        assert_eq!(suggest_next(&["Am"], &key("G")), vec!["D", "F#dim", "C"]);
        assert_eq!(
            suggest_next(&["Em"], &key("G")),
            vec!["Am", "C", "D", "Bm"]
        );
        // bare root matches regardless of the chord's quality
        assert_eq!(suggest_next(&["D"], &key("C")), vec!["G", "Bdim", "F"]);
        assert_eq!(suggest_next(&["Gm"], &key("C")), vec!["C", "Am", "F"]);
        // enharmonic roots match as well
        assert_eq!(suggest_next(&["A#"], &key("F")), vec!["C", "F", "Gm", "Edim"]);
        // extended chords match by their root
        assert_eq!(suggest_next(&["Am7"], &key("C")), vec!["Dm", "F", "G", "Em"]);
        assert_eq!(suggest_next(&["C7"], &key("C")), vec!["F", "G", "Am", "Dm"]);
        assert_eq!(suggest_next(&["Gsus4"], &key("C")), vec!["C", "Am", "F"]);
    }

    #[test]
    fn suggestions_for_non_diatonic_chords() {
        let all = vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"];
        assert_eq!(suggest_next(&["Bb"], &key("C")), all);
        assert_eq!(suggest_next(&["Eb"], &key("C")), all);
        assert_eq!(suggest_next(&["xyz"], &key("C")), all);
    }

    #[test]
    fn templates() {
        assert_eq!(
            apply_template(&["I", "IV", "V", "I"], &key("G")),
            vec!["G", "C", "D", "G"]
        );
        assert_eq!(
            apply_template(&["ii", "V", "I"], &key("Eb")),
            vec!["Fm", "Bb", "Eb"]
        );
        assert_eq!(
            apply_template(&["I", "bVII", "IV", "I"], &key("C")),
            vec!["C", "A#", "F", "C"]
        );
        assert_eq!(
            apply_template(&["I", "bVII", "IV", "I"], &key("F")),
            vec!["F", "Eb", "Bb", "F"]
        );
        assert_eq!(apply_template(&["bIII", "bVI"], &key("C")), vec!["D#", "G#"]);
        assert_eq!(apply_template(&["VI", "vii°"], &key("D")), vec!["Bm", "C#dim"]);
        assert_eq!(
            apply_template(&["I", "E7", "b"], &key("A")),
            vec!["A", "E7", "b"]
        );
    }

    #[test]
    fn common_progressions() -> Result<(), Error> {
        assert_eq!(COMMON_PROGRESSIONS.len(), 8);
        let pop = common_progression("pop").unwrap();
        assert_eq!(pop.chords(&Key::try_from("D")?), vec!["D", "A", "Bm", "G"]);
        assert!(common_progression("minor pop").is_some());
        assert!(common_progression("polka").is_none());
        for template in COMMON_PROGRESSIONS {
            assert_eq!(
                template.chords(&Key::try_from("C")?).len(),
                template.tokens.len()
            );
        }
        Ok(())
    }

    #[test]
    fn progression_session() {
        let c = key("C");
        let mut progression = Progression::new();
        assert!(progression.is_empty());
        assert_eq!(progression.suggestions(&c), vec!["C", "Dm", "Em", "F"]);

        progression.add("C");
        progression.add("G");
        assert_eq!(progression.len(), 2);
        assert_eq!(progression.last(), Some("G"));
        assert_eq!(progression.suggestions(&c), vec!["C", "Am", "F"]);

        assert_eq!(progression.remove_last(), Some("G".to_string()));
        assert_eq!(progression.chords(), ["C".to_string()]);

        progression.apply_template(&["I", "V", "vi", "IV"], &key("A"));
        assert_eq!(progression.chords(), ["A", "E", "F#m", "D"]);

        progression.clear();
        assert!(progression.is_empty());
        assert_eq!(progression.remove_last(), None);
    }
}
