//! Generates the object writing prompt file with an external text generation service.
//!
//! This is a one-off build step and not part of the exercise itself. It needs an API key in the
//! `ANTHROPIC_API_KEY` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use serde_json::{json, Value};

// -------------------------------------------------------------------------------------------------

/// Environment variable with the API key of the text generation service.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "You are helping create writing prompts for songwriters doing object writing exercises.

Object writing is a technique where writers explore a topic using all their senses (sight, sound, taste, touch, smell) plus motion and emotion. The goal is to generate evocative, specific prompts that spark sensory exploration.

Generate diverse prompts across these categories:
- Concrete objects (cigarette, rusted key, vinyl record)
- Settings/places (hospital waiting room, dive bar at 2am, childhood bedroom)
- Sensory experiences (fluorescent light hum, gasoline smell, velvet texture)
- Abstract concepts made concrete (Sunday morning loneliness, 3am anxiety, first kiss nervousness)
- Weather/nature (fog rolling in, summer thunderstorm, frost on glass)
- Everyday moments (coffee going cold, missed phone call, loose thread)

Guidelines:
- Be specific and evocative, not generic
- Avoid clichés and overused songwriting tropes
- Mix simple (one word) with complex (short phrases)
- Include some unexpected or unusual prompts
- Prompts should spark sensory exploration, not complete song ideas";

// -------------------------------------------------------------------------------------------------

/// Settings for a prompt generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// API key of the text generation service.
    pub api_key: String,
    /// Model to ask.
    pub model: String,
    /// Number of prompts to request.
    pub count: usize,
    /// Where to write the JSON prompt list.
    pub output: PathBuf,
}

impl GeneratorConfig {
    /// Create a config with the API key from the environment.
    pub fn from_env<P: Into<PathBuf>>(output: P) -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            anyhow!(
                "{} environment variable is required\n  Usage: {}=your-key songsmith generate-prompts",
                API_KEY_VAR,
                API_KEY_VAR
            )
        })?;
        Ok(Self {
            api_key,
            model: "claude-3-5-haiku-latest".to_string(),
            count: 200,
            output: output.into(),
        })
    }

    fn user_message(&self) -> String {
        format!(
            "Generate exactly {count} object writing prompts. Return them as a JSON array of strings, \
             nothing else. No markdown, no explanation, just the JSON array.\n\n\
             Example format:\n\
             [\"cigarette smoke\", \"hospital waiting room\", \"rust on metal\", \"fluorescent light hum\"]\n\n\
             Generate {count} diverse, evocative prompts now:",
            count = self.count
        )
    }
}

// -------------------------------------------------------------------------------------------------

/// Parse the prompt list from a model's text response.
///
/// The whole text is expected to be a JSON array of strings. If it isn't, the outermost
/// `[...]` slice of the text is tried. Empty lists are rejected.
pub fn extract_prompt_list(text: &str) -> anyhow::Result<Vec<String>> {
    let text = text.trim();
    let prompts = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => {
            let start = text.find('[');
            let end = text.rfind(']');
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str::<Value>(&text[start..=end])
                        .context("Could not parse prompts from response")?
                }
                _ => bail!("Could not parse prompts from response"),
            }
        }
    };
    let prompts = prompts
        .as_array()
        .ok_or_else(|| anyhow!("Invalid prompts format received"))?
        .iter()
        .map(|prompt| {
            prompt
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("Invalid prompts format received"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if prompts.is_empty() {
        bail!("Invalid prompts format received");
    }
    Ok(prompts)
}

/// Ask the text generation service for a new list of prompts.
pub fn generate_prompts(config: &GeneratorConfig) -> anyhow::Result<Vec<String>> {
    log::info!(
        "Requesting {} prompts from model '{}'...",
        config.count,
        config.model
    );
    let body = json!({
        "model": config.model,
        "max_tokens": 4096,
        "system": SYSTEM_PROMPT,
        "messages": [{ "role": "user", "content": config.user_message() }],
    });
    let response = reqwest::blocking::Client::new()
        .post(API_URL)
        .header("x-api-key", &config.api_key)
        .header("anthropic-version", API_VERSION)
        .json(&body)
        .send()
        .context("Failed to send prompt generation request")?
        .error_for_status()
        .context("Prompt generation request failed")?
        .json::<Value>()
        .context("Failed to read prompt generation response")?;
    let text = response
        .pointer("/content/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("Response contains no text content"))?;
    extract_prompt_list(text)
}

/// Write the prompts as pretty printed JSON array, creating missing parent directories.
pub fn write_prompts(prompts: &[String], output: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(prompts)?;
    std::fs::write(output, json)
        .with_context(|| format!("Cannot write prompts to '{}'", output.display()))?;
    log::info!("Saved {} prompts to '{}'", prompts.len(), output.display());
    Ok(())
}

// --------------------------------------------------------------------------------------------------
