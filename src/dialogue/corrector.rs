//! Repairs sentence splits that cut through quoted speech.
//!
//! Two tokenizer mistakes are fixed, in order:
//!
//! 1. A quotation broken at internal punctuation (`"Stop!` / `Wait!"`) is rejoined by
//!    merging the opening fragment with every sentence up to the first one that contains
//!    a quote character.
//! 2. An attribution clause split off a complete quotation (`"Hello!"` / `said Mrs. Person.`)
//!    is appended back when it starts with a lowercase letter.
//!
//! Step 1 merges to the *first* sentence holding a quote, not the best-matching one. A text
//! with many unterminated opening quotes makes every opener scan to the end of the input,
//! so that step is quadratic in the worst case.

use tracing::debug;

use super::{SpeechPatterns, QUOTE};

/// Run both repairs and drop empty sentences
pub fn correct_dialogue(sentences: Vec<String>, speech: &SpeechPatterns) -> Vec<String> {
    let input_len = sentences.len();

    let merged = merge_quote_fragments(sentences, speech);
    let corrected = prune_empty(merge_trailing_subclauses(merged, speech));

    debug!("Dialogue correction: {} -> {} sentences", input_len, corrected.len());
    corrected
}

/// Merge each unterminated opening quote with the following sentences up to the first
/// one containing a quote character. Openers without any later quote are left alone.
pub fn merge_quote_fragments(sentences: Vec<String>, speech: &SpeechPatterns) -> Vec<String> {
    let mut sentences = prune_empty(sentences);
    let mut result = Vec::with_capacity(sentences.len());
    let mut i = 0;

    while i < sentences.len() {
        if opens_unterminated_quote(&sentences[i], speech) {
            let closing = sentences[i + 1..]
                .iter()
                .position(|s| s.contains(QUOTE))
                .map(|offset| i + 1 + offset);

            if let Some(closing) = closing {
                result.push(sentences[i..=closing].join(" "));
                i = closing + 1;
                continue;
            }
            debug!("No closing quote after sentence {}, leaving it unmerged", i);
        }

        result.push(std::mem::take(&mut sentences[i]));
        i += 1;
    }

    result
}

/// Append a lowercase-initial sentence to the complete quotation before it
/// The last two positions never absorb a follower
pub fn merge_trailing_subclauses(sentences: Vec<String>, speech: &SpeechPatterns) -> Vec<String> {
    let len = sentences.len();
    let mut result = Vec::with_capacity(len);
    let mut iter = sentences.into_iter().enumerate().peekable();

    while let Some((i, mut sentence)) = iter.next() {
        if i + 2 < len && speech.is_complete_direct_speech(&sentence) {
            if let Some((_, subclause)) = iter.next_if(|(_, next)| starts_lowercase(next)) {
                sentence.push(' ');
                sentence.push_str(&subclause);
            }
        }
        result.push(sentence);
    }

    result
}

/// Remove empty sentences, keeping order
pub fn prune_empty(sentences: Vec<String>) -> Vec<String> {
    sentences.into_iter().filter(|s| !s.is_empty()).collect()
}

fn opens_unterminated_quote(sentence: &str, speech: &SpeechPatterns) -> bool {
    sentence.starts_with(QUOTE) && !speech.is_complete_direct_speech(sentence)
}

fn starts_lowercase(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_lowercase)
}
