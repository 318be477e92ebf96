//! Scale degrees of the major scale and the triad qualities built on them.

use std::fmt::Display;

// -------------------------------------------------------------------------------------------------

/// Triad quality of a diatonic chord.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Suffix which gets appended to a chord's root name in chord labels.
    pub fn suffix(&self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Semitone offsets of the major scale degrees from the tonic.
pub const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Upper case roman numerals, as used by borrowed degree markers such as `bVII`.
const ROMAN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// One of the seven degrees of the major scale. The table of degrees is fixed and shared by
/// all keys.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum ScaleDegree {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl ScaleDegree {
    /// All degrees in scale order.
    pub const ALL: [ScaleDegree; 7] = [
        ScaleDegree::I,
        ScaleDegree::II,
        ScaleDegree::III,
        ScaleDegree::IV,
        ScaleDegree::V,
        ScaleDegree::VI,
        ScaleDegree::VII,
    ];

    /// Zero based index of the degree in the scale.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Semitone offset from the tonic.
    pub fn offset(&self) -> u8 {
        MAJOR_INTERVALS[self.index()]
    }

    /// Triad quality of the chord built on this degree.
    pub fn quality(&self) -> Quality {
        match self {
            ScaleDegree::I | ScaleDegree::IV | ScaleDegree::V => Quality::Major,
            ScaleDegree::II | ScaleDegree::III | ScaleDegree::VI => Quality::Minor,
            ScaleDegree::VII => Quality::Diminished,
        }
    }

    /// Roman numeral label, cased by quality: `I`, `ii`, `iii`, `IV`, `V`, `vi`, `vii°`.
    pub fn numeral(&self) -> &'static str {
        match self {
            ScaleDegree::I => "I",
            ScaleDegree::II => "ii",
            ScaleDegree::III => "iii",
            ScaleDegree::IV => "IV",
            ScaleDegree::V => "V",
            ScaleDegree::VI => "vi",
            ScaleDegree::VII => "vii°",
        }
    }

    /// Harmonic function name.
    pub fn function_name(&self) -> &'static str {
        match self {
            ScaleDegree::I => "Tonic",
            ScaleDegree::II => "Supertonic",
            ScaleDegree::III => "Mediant",
            ScaleDegree::IV => "Subdominant",
            ScaleDegree::V => "Dominant",
            ScaleDegree::VI => "Submediant",
            ScaleDegree::VII => "Leading Tone",
        }
    }

    /// Degree for a plain upper case roman numeral without quality marks, e.g. `VII`.
    /// Used to resolve borrowed degree markers. Case insensitive.
    pub fn from_roman(roman: &str) -> Option<Self> {
        let roman = roman.to_ascii_uppercase();
        ROMAN_NUMERALS
            .iter()
            .position(|r| *r == roman)
            .map(|index| Self::ALL[index])
    }

    fn resolve_synonyms(numeral: &str) -> String {
        let numeral = numeral.trim();
        if let Some(stripped) = numeral.strip_suffix("dim") {
            format!("{stripped}°")
        } else if let Some(stripped) = numeral.strip_suffix('o') {
            format!("{stripped}°")
        } else {
            numeral.to_string()
        }
    }
}

impl TryFrom<&str> for ScaleDegree {
    type Error = String;

    /// Try converting the given roman numeral label to a degree. Matching is case insensitive,
    /// and `vii`, `viio`, `viidim` are accepted as synonyms for `vii°`.
    fn try_from(numeral: &str) -> Result<Self, String> {
        let normalized = Self::resolve_synonyms(numeral).to_lowercase();
        Self::ALL
            .iter()
            .find(|degree| {
                degree.numeral().to_lowercase() == normalized
                    || degree.numeral().trim_end_matches('°').to_lowercase() == normalized
            })
            .copied()
            .ok_or_else(|| format!("Unknown scale degree '{}'", numeral))
    }
}

impl Display for ScaleDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

// --------------------------------------------------------------------------------------------------
