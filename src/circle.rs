//! Circle of fifths and the keys related to a major key.
//!
//! The circle lists the 12 major keys in ascending fifths, clockwise. Adjacent keys share all
//! but one note: the next key clockwise is the dominant, the previous one the subdominant.

use crate::Key;

// -------------------------------------------------------------------------------------------------

/// Major keys in ascending fifths, clockwise.
pub const CIRCLE_OF_FIFTHS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "Db", "Ab", "Eb", "Bb", "F",
];

/// Map the two enharmonic key spellings which are not on the circle to the ones that are.
fn canonical_name(key: &str) -> &str {
    match key {
        "Gb" => "F#",
        "C#" => "Db",
        _ => key,
    }
}

/// Position of the given key name on the circle of fifths, or `None` if the spelling is not
/// on the circle, e.g. `"A#"`.
pub fn circle_position(key: &str) -> Option<usize> {
    let key = canonical_name(key.trim());
    CIRCLE_OF_FIFTHS.iter().position(|k| *k == key)
}

/// All keys on the circle of fifths, clockwise, starting at C.
pub fn circle_of_fifths() -> Vec<Key> {
    CIRCLE_OF_FIFTHS
        .iter()
        .filter_map(|name| Key::try_from(*name).ok())
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// Keys which are harmonically close to a major key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedKeys {
    /// Fifth above: next key clockwise on the circle.
    pub dominant: Key,
    /// Fifth below: previous key on the circle.
    pub subdominant: Key,
    /// Minor key sharing the key signature, a minor third below the tonic.
    pub relative_minor: String,
    /// Minor key on the same tonic.
    pub parallel_minor: String,
}

/// Keys related to the given key. Returns `None` if the key's spelling is not on the circle of
/// fifths: relations then are unavailable, which is not an error.
pub fn related_keys(key: &Key) -> Option<RelatedKeys> {
    let position = circle_position(key.name())?;
    let len = CIRCLE_OF_FIFTHS.len();
    let dominant = Key::try_from(CIRCLE_OF_FIFTHS[(position + 1) % len]).ok()?;
    let subdominant = Key::try_from(CIRCLE_OF_FIFTHS[(position + len - 1) % len]).ok()?;
    let relative_minor = format!("{}m", key.spell(9));
    let parallel_minor = format!("{}m", key.name());
    log::debug!(
        "Related keys of '{}': dominant {}, subdominant {}, relative {}",
        key,
        dominant,
        subdominant,
        relative_minor
    );
    Some(RelatedKeys {
        dominant,
        subdominant,
        relative_minor,
        parallel_minor,
    })
}

impl Key {
    /// Keys related to this key, see [`related_keys`].
    pub fn related(&self) -> Option<RelatedKeys> {
        related_keys(self)
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn positions() {
        assert_eq!(circle_position("C"), Some(0));
        assert_eq!(circle_position("F#"), Some(6));
        assert_eq!(circle_position("Gb"), Some(6));
        assert_eq!(circle_position("C#"), Some(7));
        assert_eq!(circle_position("Db"), Some(7));
        assert_eq!(circle_position("A#"), None);
        assert_eq!(circle_position("X"), None);
        assert_eq!(circle_of_fifths().len(), 12);
    }

    #[test]
    fn relations() -> Result<(), Error> {
        let related = related_keys(&Key::try_from("C")?).unwrap();
        assert_eq!(related.dominant.name(), "G");
        assert_eq!(related.subdominant.name(), "F");
        assert_eq!(related.relative_minor, "Am");
        assert_eq!(related.parallel_minor, "Cm");

        let related = Key::try_from("F")?.related().unwrap();
        assert_eq!(related.dominant.name(), "C");
        assert_eq!(related.subdominant.name(), "Bb");
        assert_eq!(related.relative_minor, "Dm");

        let related = Key::try_from("Eb")?.related().unwrap();
        assert_eq!(related.relative_minor, "Cm");
        assert_eq!(related.parallel_minor, "Ebm");

        let related = Key::try_from("Gb")?.related().unwrap();
        assert_eq!(related.dominant.name(), "Db");
        assert_eq!(related.subdominant.name(), "B");
        assert_eq!(related.relative_minor, "Ebm");
        assert_eq!(related.parallel_minor, "Gbm");

        let related = Key::try_from("B")?.related().unwrap();
        assert_eq!(related.relative_minor, "G#m");
        Ok(())
    }

    #[test]
    fn relations_unavailable() -> Result<(), Error> {
        assert_eq!(related_keys(&Key::try_from("A#")?), None);
        assert_eq!(related_keys(&Key::try_from("G#")?), None);
        Ok(())
    }

    #[test]
    fn circularity() -> Result<(), Error> {
        for name in CIRCLE_OF_FIFTHS {
            let start = Key::try_from(name)?;
            let mut key = start;
            for _ in 0..12 {
                key = related_keys(&key).unwrap().dominant;
            }
            assert_eq!(key, start);

            let mut key = start;
            for _ in 0..12 {
                key = related_keys(&key).unwrap().subdominant;
            }
            assert_eq!(key, start);
        }
        Ok(())
    }
}
