//! Object writing prompts: loading the prompt list and picking prompts at random.

use std::path::Path;

use rand::{rng, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::Error;

// -------------------------------------------------------------------------------------------------

/// A read-only, non-empty list of writing prompts, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSource {
    prompts: Vec<String>,
}

impl PromptSource {
    /// Create a new source from the given prompts. Fails when the list is empty.
    pub fn new(prompts: Vec<String>) -> Result<Self, Error> {
        if prompts.is_empty() {
            return Err(Error::data_unavailable("prompt list is empty"));
        }
        Ok(Self { prompts })
    }

    /// Parse a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let prompts = serde_json::from_str::<Vec<String>>(json)
            .map_err(|err| Error::data_unavailable(format!("invalid prompt list: {}", err)))?;
        Self::new(prompts)
    }

    /// Load a JSON array of strings from the given file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            Error::data_unavailable(format!("failed to read '{}': {}", path.display(), err))
        })?;
        let source = Self::from_json(&json)?;
        log::info!(
            "Loaded {} prompts from '{}'",
            source.prompts.len(),
            path.display()
        );
        Ok(source)
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

// -------------------------------------------------------------------------------------------------

/// Pick a random prompt from the given list, avoiding an immediate repetition of `previous`
/// when the list offers any alternative. Returns `None` for an empty list.
pub fn pick_prompt<'a, R: Rng>(
    prompts: &'a [String],
    previous: Option<&str>,
    rand_gen: &mut R,
) -> Option<&'a str> {
    match prompts.len() {
        0 => None,
        1 => Some(prompts[0].as_str()),
        _ => {
            let candidates = prompts
                .iter()
                .filter(|prompt| Some(prompt.as_str()) != previous)
                .collect::<Vec<_>>();
            if candidates.is_empty() {
                // all entries equal the previous pick
                return Some(prompts[0].as_str());
            }
            let index = rand_gen.random_range(0..candidates.len());
            Some(candidates[index].as_str())
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Picks prompts with [`pick_prompt`], remembering the last pick to avoid repetitions.
///
/// Uses a seedable random number generator. When seeded, picks are reproducible and `reset`
/// restarts the sequence.
#[derive(Debug, Clone)]
pub struct PromptPicker {
    rand_gen: Xoshiro256PlusPlus,
    seed: Option<u64>,
    previous: Option<String>,
}

impl PromptPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rand_seed = seed.unwrap_or_else(|| rng().random());
        let rand_gen = Xoshiro256PlusPlus::seed_from_u64(rand_seed);
        Self {
            rand_gen,
            seed,
            previous: None,
        }
    }

    /// The last picked prompt.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Pick a new prompt from the given source.
    pub fn pick(&mut self, source: &PromptSource) -> Option<String> {
        let prompt = pick_prompt(source.prompts(), self.previous.as_deref(), &mut self.rand_gen)
            .map(str::to_string);
        if prompt.is_some() {
            self.previous.clone_from(&prompt);
        }
        prompt
    }

    /// Forget the last pick and, when seeded, reset the random number generator.
    pub fn reset(&mut self) {
        self.previous = None;
        if let Some(seed) = self.seed {
            self.rand_gen = Xoshiro256PlusPlus::seed_from_u64(seed);
        }
    }
}

impl Default for PromptPicker {
    fn default() -> Self {
        Self::new(None)
    }
}

// --------------------------------------------------------------------------------------------------
