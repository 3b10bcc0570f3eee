// WHY: tokenizer seams for the pipeline; sentence and word splitting sit behind traits
// so callers can plug in a different splitter without touching the dialogue or chunking stages

use anyhow::Result;

pub mod abbreviations;
pub mod boundary_detector;
pub mod normalization;
pub mod words;

pub use abbreviations::AbbreviationChecker;
pub use boundary_detector::BoundaryDetector;
pub use normalization::{normalize_text, normalize_text_into};
pub use words::{is_alphabetic_token, PunctWordTokenizer, WordTokenizer};

/// Splits normalized text into sentences in document order
///
/// Implementations return trimmed, non-empty sentences. They are free to make the
/// quote-related mistakes the dialogue corrector repairs.
pub trait SentenceTokenizer {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>>;
}

impl<T: SentenceTokenizer + ?Sized> SentenceTokenizer for &T {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>> {
        (**self).split_sentences(text)
    }
}

impl<T: WordTokenizer + ?Sized> WordTokenizer for &T {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        (**self).tokenize(sentence)
    }
}
