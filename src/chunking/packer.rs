// WHY: greedy packing of whole sentences into chunks sized by alphabetic word count

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sentence_detector::WordTokenizer;

/// One output unit: whole sentences joined by single spaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// Alphabetic words across every sentence in the chunk
    pub word_count: usize,
}

impl Chunk {
    fn seed(sentence: &str, word_count: usize) -> Self {
        Self {
            text: sentence.to_string(),
            word_count,
        }
    }

    fn append(&mut self, sentence: &str, word_count: usize) {
        self.text.push(' ');
        self.text.push_str(sentence);
        self.word_count += word_count;
    }
}

/// Group sentences into chunks
///
/// The first chunk is seeded with the first sentence whatever its size, and its words
/// start the running counter. Every later sentence adds its word count to the counter;
/// once the counter reaches `word_limit` that sentence opens a new chunk and the counter
/// restarts at zero, otherwise the sentence joins the current chunk. A sentence that
/// opens a chunk after a reset is therefore not counted toward that chunk's limit.
///
/// The limit is checked after the triggering sentence is counted, so it is a lower
/// bound rather than a cap: a chunk can overshoot by any amount and the final chunk
/// can be arbitrarily short.
pub fn pack_chunks<W>(sentences: &[String], word_limit: usize, words: &W) -> Vec<Chunk>
where
    W: WordTokenizer + ?Sized,
{
    let mut sentences = sentences.iter().filter(|s| !s.is_empty());
    let Some(first) = sentences.next() else {
        return Vec::new();
    };

    let first_count = words.count_words(first);
    let mut chunks = vec![Chunk::seed(first, first_count)];
    let mut counter = first_count;

    for sentence in sentences {
        let count = words.count_words(sentence);
        counter += count;

        if counter >= word_limit {
            counter = 0;
            chunks.push(Chunk::seed(sentence, count));
        } else if let Some(current) = chunks.last_mut() {
            current.append(sentence, count);
        }
    }

    debug!("Packed chunks with word limit {}: {} chunks", word_limit, chunks.len());
    chunks
}

/// Join chunk texts with the delimiter
pub fn join_chunks(chunks: &[Chunk], delimiter: &str) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join(delimiter)
}
