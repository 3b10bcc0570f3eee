// WHY: punctuation-driven sentence splitter used as the default tokenizer for the pipeline
// Splits the way statistical splitters do, including inside quotations; the dialogue stage repairs that

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::{AbbreviationChecker, SentenceTokenizer};

/// Terminal punctuation, optional closing quotes or brackets, then the separating whitespace
const BOUNDARY_PATTERN: &str = r#"[.!?]+["')\]}]*\s+"#;

/// Regex-based sentence boundary detector with abbreviation handling
#[derive(Debug)]
pub struct BoundaryDetector {
    boundary: Regex,
    abbreviation_checker: AbbreviationChecker,
}

impl BoundaryDetector {
    /// Compile the boundary pattern
    pub fn new() -> Result<Self> {
        debug!("Compiling sentence boundary pattern: {}", BOUNDARY_PATTERN);
        let boundary = Regex::new(BOUNDARY_PATTERN)?;

        Ok(Self {
            boundary,
            abbreviation_checker: AbbreviationChecker::new(),
        })
    }

    /// Byte offsets where each detected sentence ends, terminator included
    /// The final sentence (text after the last boundary) is not listed
    pub fn boundary_offsets(&self, text: &str) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut sentence_start = 0;

        for mat in self.boundary.find_iter(text) {
            let matched = &text[mat.start()..mat.end()];
            let terminator = matched.trim_end();
            let sentence_end = mat.start() + terminator.len();

            if self.is_false_boundary(&text[sentence_start..sentence_end], terminator) {
                continue;
            }

            offsets.push(sentence_end);
            sentence_start = mat.end();
        }

        offsets
    }

    /// A lone period after an abbreviation or initial does not end the sentence
    fn is_false_boundary(&self, candidate: &str, terminator: &str) -> bool {
        terminator == "." && self.abbreviation_checker.ends_with_abbreviation(candidate)
    }
}

impl SentenceTokenizer for BoundaryDetector {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0;

        for sentence_end in self.boundary_offsets(text) {
            let sentence = text[sentence_start..sentence_end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            sentence_start = sentence_end;
        }

        let remainder = text[sentence_start..].trim();
        if !remainder.is_empty() {
            sentences.push(remainder.to_string());
        }

        debug!("Boundary detector produced {} sentences", sentences.len());
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    static SHARED_DETECTOR: OnceLock<BoundaryDetector> = OnceLock::new();

    fn get_detector() -> &'static BoundaryDetector {
        SHARED_DETECTOR.get_or_init(|| BoundaryDetector::new().unwrap())
    }

    fn split(text: &str) -> Vec<String> {
        get_detector().split_sentences(text).unwrap()
    }

    #[test]
    fn test_basic_narrative_sentences() {
        assert_eq!(
            split("Hello world. This is a test. How are you?"),
            vec!["Hello world.", "This is a test.", "How are you?"]
        );
    }

    #[test]
    fn test_abbreviation_handling() {
        let test_cases = [
            ("Dr. Smith examined the patient. The results were clear.", vec!["Dr. Smith examined the patient.", "The results were clear."]),
            ("Mr. and Mrs. Johnson arrived. They were late.", vec!["Mr. and Mrs. Johnson arrived.", "They were late."]),
            ("The U.S.A. declared independence. It was 1776.", vec!["The U.S.A. declared independence.", "It was 1776."]),
            ("Written by J. R. Hartley. A classic.", vec!["Written by J. R. Hartley.", "A classic."]),
        ];

        for (text, expected) in test_cases {
            assert_eq!(split(text), expected, "Failed for text: {text}");
        }
    }

    #[test]
    fn test_splits_inside_quotation() {
        assert_eq!(
            split("He said, \"Stop! Wait!\" and left."),
            vec!["He said, \"Stop!", "Wait!\"", "and left."]
        );
    }

    #[test]
    fn test_splits_attribution_from_dialogue() {
        assert_eq!(
            split("\"Hello!\" said Mrs. Person. She smiled."),
            vec!["\"Hello!\"", "said Mrs. Person.", "She smiled."]
        );
    }

    #[test]
    fn test_closing_brackets_stay_with_sentence() {
        assert_eq!(
            split("It rained (all day.) We stayed in."),
            vec!["It rained (all day.)", "We stayed in."]
        );
    }

    #[test]
    fn test_decimal_and_trailing_text() {
        assert_eq!(
            split("The price is 3.50 today. No terminator here"),
            vec!["The price is 3.50 today.", "No terminator here"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_boundary_offsets() {
        let text = "One. Two! Three";
        let offsets = get_detector().boundary_offsets(text);
        assert_eq!(offsets, vec![4, 9]);
        assert_eq!(&text[..offsets[0]], "One.");
    }
}
