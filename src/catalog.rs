//! Reference catalogs of song structures, rhyme schemes and song sections.

use lazy_static::lazy_static;
use std::collections::HashMap;

// -------------------------------------------------------------------------------------------------

/// A song form: its sections in order plus a few well known examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongStructure {
    pub name: &'static str,
    pub description: &'static str,
    pub sections: &'static [&'static str],
    pub examples: &'static [&'static str],
}

impl SongStructure {
    /// Sections without repetitions, in order of first appearance.
    pub fn unique_sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::with_capacity(self.sections.len());
        for section in self.sections {
            if !sections.contains(section) {
                sections.push(*section);
            }
        }
        sections
    }
}

/// A rhyme scheme: the rhyme letter of each line, with an example verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeScheme {
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: &'static [&'static str],
    pub example: &'static str,
    pub usage: &'static str,
}

/// Typical length and purpose of a song section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub bars: &'static str,
    pub purpose: &'static str,
}

// -------------------------------------------------------------------------------------------------

pub const SONG_STRUCTURES: [SongStructure; 8] = [
    SongStructure {
        name: "Verse-Chorus",
        description: "Most common pop/rock structure",
        sections: &[
            "Intro", "Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus", "Outro",
        ],
        examples: &["Most pop songs", "Rock anthems"],
    },
    SongStructure {
        name: "Verse-Chorus-Verse",
        description: "Simple and effective",
        sections: &["Verse 1", "Chorus", "Verse 2", "Chorus", "Verse 3", "Chorus"],
        examples: &["Folk songs", "Country ballads"],
    },
    SongStructure {
        name: "AABA",
        description: "Classic 32-bar form",
        sections: &["A (Verse)", "A (Verse)", "B (Bridge)", "A (Verse)"],
        examples: &["Jazz standards", "\"Yesterday\" by Beatles"],
    },
    SongStructure {
        name: "ABABCB",
        description: "Verse-Chorus with bridge",
        sections: &["Verse", "Chorus", "Verse", "Chorus", "Bridge", "Chorus"],
        examples: &["Pop ballads", "Modern rock"],
    },
    SongStructure {
        name: "12-Bar Blues",
        description: "Classic blues progression",
        sections: &["I-I-I-I", "IV-IV-I-I", "V-IV-I-V"],
        examples: &["Blues standards", "Early rock & roll"],
    },
    SongStructure {
        name: "Through-Composed",
        description: "No repeating sections",
        sections: &["A", "B", "C", "D", "..."],
        examples: &["Art songs", "Bohemian Rhapsody"],
    },
    SongStructure {
        name: "Verse-Pre-Chorus-Chorus",
        description: "Builds anticipation",
        sections: &[
            "Verse",
            "Pre-Chorus",
            "Chorus",
            "Verse",
            "Pre-Chorus",
            "Chorus",
            "Bridge",
            "Chorus",
        ],
        examples: &["Modern pop", "EDM drops"],
    },
    SongStructure {
        name: "AAA (Strophic)",
        description: "Same melody, different lyrics",
        sections: &["Verse 1", "Verse 2", "Verse 3", "Verse 4"],
        examples: &["Folk ballads", "\"Blowin' in the Wind\""],
    },
];

pub const RHYME_SCHEMES: [RhymeScheme; 8] = [
    RhymeScheme {
        name: "ABAB",
        description: "Alternate rhyme",
        pattern: &["A", "B", "A", "B"],
        example: "Roses are red (A)\nViolets are blue (B)\nSugar is sweet (A)\nAnd so are you (B)",
        usage: "Ballads, hymns, sonnets",
    },
    RhymeScheme {
        name: "AABB",
        description: "Couplets",
        pattern: &["A", "A", "B", "B"],
        example: "The cat sat on the mat (A)\nWearing a funny hat (A)\nIt looked at the door (B)\nThen lay on the floor (B)",
        usage: "Nursery rhymes, hip-hop, pop hooks",
    },
    RhymeScheme {
        name: "ABCABC",
        description: "Interlocking rhyme",
        pattern: &["A", "B", "C", "A", "B", "C"],
        example: "Three rhyme sounds\nweaving through\nthe verse structure\nmaking rounds\nold and new\nrich in texture",
        usage: "Complex poetry, art songs",
    },
    RhymeScheme {
        name: "AABA",
        description: "Classic song form",
        pattern: &["A", "A", "B", "A"],
        example: "Line one rhymes here (A)\nLine two rhymes near (A)\nLine three breaks free (B)\nLine four reappears (A)",
        usage: "Tin Pan Alley, jazz standards",
    },
    RhymeScheme {
        name: "ABBA",
        description: "Enclosed rhyme",
        pattern: &["A", "B", "B", "A"],
        example: "First line sets the tone (A)\nSecond line goes deep (B)\nThird continues steep (B)\nFourth returns back home (A)",
        usage: "Sonnets, sophisticated pop",
    },
    RhymeScheme {
        name: "AAAA",
        description: "Monorhyme",
        pattern: &["A", "A", "A", "A"],
        example: "Every line the same (A)\nRhyming is the game (A)\nBuilding up the flame (A)\nWriting without shame (A)",
        usage: "Hip-hop verses, comedic effect",
    },
    RhymeScheme {
        name: "ABAC",
        description: "Partial rhyme",
        pattern: &["A", "B", "A", "C"],
        example: "Some lines rhyme today (A)\nOthers stand alone (B)\nCome what may (A)\nIn a different zone (C)",
        usage: "Folk, conversational lyrics",
    },
    RhymeScheme {
        name: "Free Verse",
        description: "No fixed pattern",
        pattern: &["X", "X", "X", "X"],
        example: "Lines flow naturally\nWithout forced rhyme\nMeaning over sound\nFreedom in form",
        usage: "Modern poetry, spoken word",
    },
];

// section guide, keyed by the section names used in SONG_STRUCTURES
lazy_static! {
    static ref SECTION_GUIDE: HashMap<&'static str, SectionInfo> = {
        fn info(bars: &'static str, purpose: &'static str) -> SectionInfo {
            SectionInfo { bars, purpose }
        }
        HashMap::from([
            ("Intro", info("4-8", "Set the mood, hook the listener")),
            ("Verse", info("8-16", "Tell the story, build narrative")),
            ("Verse 1", info("8-16", "Introduce the story/theme")),
            ("Verse 2", info("8-16", "Develop the story/theme")),
            ("Verse 3", info("8-16", "Conclude or twist the story")),
            ("Pre-Chorus", info("4-8", "Build tension before chorus")),
            ("Chorus", info("8-16", "Main hook, emotional peak")),
            ("Bridge", info("8", "Contrast, new perspective")),
            ("Outro", info("4-8", "Resolve, fade out")),
            ("A (Verse)", info("8", "Main melodic theme")),
            ("B (Bridge)", info("8", "Contrasting middle section")),
        ])
    };
}

// -------------------------------------------------------------------------------------------------

/// Look up a song structure by name, ignoring case.
pub fn song_structure(name: &str) -> Option<&'static SongStructure> {
    let name = name.trim();
    SONG_STRUCTURES
        .iter()
        .find(|structure| structure.name.eq_ignore_ascii_case(name))
}

/// Look up a rhyme scheme by name, ignoring case.
pub fn rhyme_scheme(name: &str) -> Option<&'static RhymeScheme> {
    let name = name.trim();
    RHYME_SCHEMES
        .iter()
        .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
}

/// Length and purpose of the given section, if the section is a known one.
pub fn section_info(section: &str) -> Option<SectionInfo> {
    SECTION_GUIDE.get(section).copied()
}

// --------------------------------------------------------------------------------------------------
