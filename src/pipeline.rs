// WHY: wires normalization, tokenization, dialogue repair and the chosen output mode into one call
// Pure function of (text, options); all I/O stays in reader/writer

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunking::{join_chunks, join_window, pack_chunks, select_window, WindowSpec};
use crate::dialogue::{correct_dialogue, preserve_dialogues, SpeechPatterns};
use crate::sentence_detector::{
    normalize_text, BoundaryDetector, PunctWordTokenizer, SentenceTokenizer, WordTokenizer,
};

/// Word limit used when the caller does not give one
pub const DEFAULT_WORD_LIMIT: usize = 100;

/// Chunk delimiter used when the caller does not give one
pub const DEFAULT_DELIMITER: &str = "\n\n";

/// How the corrected sentences are turned into output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Word-bounded chunks joined by `delimiter`
    Chunks {
        word_limit: usize,
        delimiter: String,
        preserve_dialogues: bool,
    },
    /// A space-joined slice of sentences
    Window(WindowSpec),
}

impl OutputMode {
    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Chunks { .. } => "chunks",
            OutputMode::Window(_) => "window",
        }
    }
}

/// Options for one segmentation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    pub mode: OutputMode,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self::chunks(DEFAULT_WORD_LIMIT, DEFAULT_DELIMITER)
    }
}

impl SegmentOptions {
    pub fn chunks(word_limit: usize, delimiter: impl Into<String>) -> Self {
        Self {
            mode: OutputMode::Chunks {
                word_limit,
                delimiter: delimiter.into(),
                preserve_dialogues: false,
            },
        }
    }

    pub fn window(spec: WindowSpec) -> Self {
        Self {
            mode: OutputMode::Window(spec),
        }
    }

    /// Turn on dialogue preservation; no effect in window mode
    pub fn preserving_dialogues(mut self) -> Self {
        if let OutputMode::Chunks { preserve_dialogues, .. } = &mut self.mode {
            *preserve_dialogues = true;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.mode {
            OutputMode::Chunks { word_limit: 0, .. } => bail!("Word limit must be greater than zero"),
            OutputMode::Window(spec) if spec.count == 0 => bail!("Sentence count must be greater than zero"),
            _ => Ok(()),
        }
    }
}

/// Counters collected while segmenting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    pub chars_processed: u64,
    pub sentences_detected: u64,
    pub sentences_after_correction: u64,
    pub units_emitted: u64,
    pub words_counted: u64,
}

/// Output string plus the counters that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    pub output: String,
    pub stats: SegmentStats,
}

/// Sentence segmentation pipeline over pluggable tokenizers
pub struct Segmenter<S = BoundaryDetector, W = PunctWordTokenizer> {
    sentence_tokenizer: S,
    word_tokenizer: W,
}

impl Segmenter {
    /// Pipeline with the built-in boundary detector and word tokenizer
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(BoundaryDetector::new()?, PunctWordTokenizer))
    }
}

impl<S: SentenceTokenizer, W: WordTokenizer> Segmenter<S, W> {
    pub fn new(sentence_tokenizer: S, word_tokenizer: W) -> Self {
        Self {
            sentence_tokenizer,
            word_tokenizer,
        }
    }

    /// Normalize, split and dialogue-correct the text
    /// Returns the corrected sentences and the raw sentence count
    pub fn corrected_sentences(&self, text: &str) -> Result<(Vec<String>, usize)> {
        let normalized = normalize_text(text);
        let raw = self.sentence_tokenizer.split_sentences(&normalized)?;
        let detected = raw.len();
        debug!("Tokenizer produced {} sentences", detected);

        Ok((correct_dialogue(raw, SpeechPatterns::shared()?), detected))
    }

    /// Run the full pipeline
    pub fn segment(&self, text: &str, options: &SegmentOptions) -> Result<Segmented> {
        options.validate()?;

        let (sentences, detected) = self.corrected_sentences(text)?;
        let mut stats = SegmentStats {
            chars_processed: text.chars().count() as u64,
            sentences_detected: detected as u64,
            sentences_after_correction: sentences.len() as u64,
            ..SegmentStats::default()
        };

        let output = match &options.mode {
            OutputMode::Chunks {
                word_limit,
                delimiter,
                preserve_dialogues: preserve,
            } => {
                let sentences = if *preserve {
                    preserve_dialogues(sentences, SpeechPatterns::shared()?)
                } else {
                    sentences
                };
                let chunks = pack_chunks(&sentences, *word_limit, &self.word_tokenizer);

                stats.units_emitted = chunks.len() as u64;
                stats.words_counted = chunks.iter().map(|c| c.word_count as u64).sum();
                join_chunks(&chunks, delimiter)
            }
            OutputMode::Window(spec) => {
                let window = select_window(&sentences, spec);

                stats.units_emitted = window.len() as u64;
                stats.words_counted = window
                    .iter()
                    .map(|s| self.word_tokenizer.count_words(s) as u64)
                    .sum();
                join_window(&window)
            }
        };

        info!(
            "Segmented {} chars: {} sentences detected, {} after correction, {} {} emitted",
            stats.chars_processed,
            stats.sentences_detected,
            stats.sentences_after_correction,
            stats.units_emitted,
            options.mode.name()
        );

        Ok(Segmented { output, stats })
    }
}

/// Pack text into word-bounded chunks joined by `delimiter`
pub fn divide_into_chunks(
    text: &str,
    word_limit: usize,
    delimiter: &str,
    preserve_dialogues: bool,
) -> Result<String> {
    let mut options = SegmentOptions::chunks(word_limit, delimiter);
    if preserve_dialogues {
        options = options.preserving_dialogues();
    }
    Ok(Segmenter::with_defaults()?.segment(text, &options)?.output)
}

/// Return `count` sentences from the front (or back when `reverse`) after skipping `offset`
pub fn divide_into_sentences(text: &str, count: usize, reverse: bool, offset: usize) -> Result<String> {
    let spec = if reverse {
        WindowSpec::reverse(count)
    } else {
        WindowSpec::forward(count)
    };
    let options = SegmentOptions::window(spec.with_offset(offset));
    Ok(Segmenter::with_defaults()?.segment(text, &options)?.output)
}
