// WHY: quote-aware repair and grouping of tokenized sentences
// Both stages share the two direct-speech patterns compiled here once per process

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub mod corrector;
pub mod preserver;

pub use corrector::{correct_dialogue, merge_quote_fragments, merge_trailing_subclauses, prune_empty};
pub use preserver::{preserve_dialogues, tag_dialogue, DialogueTag};

/// The only quotation mark recognized as a dialogue delimiter
pub const QUOTE: char = '"';

/// Whole sentence is a single quoted span
const COMPLETE_SPEECH_PATTERN: &str = r#"^".+"$"#;

/// Sentence contains a quoted span somewhere
const PARTIAL_SPEECH_PATTERN: &str = r#"".+""#;

static SHARED_PATTERNS: OnceLock<SpeechPatterns> = OnceLock::new();

/// Compiled direct-speech patterns
#[derive(Debug, Clone)]
pub struct SpeechPatterns {
    complete: Regex,
    partial: Regex,
}

impl SpeechPatterns {
    pub fn new() -> Result<Self> {
        debug!(
            "Compiling direct speech patterns: {} and {}",
            COMPLETE_SPEECH_PATTERN, PARTIAL_SPEECH_PATTERN
        );
        let complete = Regex::new(COMPLETE_SPEECH_PATTERN)
            .context("Failed to compile complete direct speech pattern")?;
        let partial = Regex::new(PARTIAL_SPEECH_PATTERN)
            .context("Failed to compile partial direct speech pattern")?;

        Ok(Self { complete, partial })
    }

    /// Process-wide instance, compiled on first use
    pub fn shared() -> Result<&'static Self> {
        if let Some(patterns) = SHARED_PATTERNS.get() {
            return Ok(patterns);
        }
        let patterns = Self::new()?;
        Ok(SHARED_PATTERNS.get_or_init(|| patterns))
    }

    /// True when the sentence starts and ends with a quote and encloses at least one character
    pub fn is_complete_direct_speech(&self, sentence: &str) -> bool {
        self.complete.is_match(sentence)
    }

    /// True when the sentence contains two quotes with at least one character between them
    pub fn contains_direct_speech(&self, sentence: &str) -> bool {
        self.partial.is_match(sentence)
    }
}
