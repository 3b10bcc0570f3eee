pub mod chunking;
pub mod dialogue;
pub mod pipeline;
pub mod reader;
pub mod sentence_detector;
pub mod stats;
pub mod writer;

// Re-export main types for convenient access
pub use chunking::{Chunk, Direction, WindowSpec};
pub use pipeline::{
    divide_into_chunks, divide_into_sentences, OutputMode, SegmentOptions, SegmentStats, Segmented,
    Segmenter, DEFAULT_DELIMITER, DEFAULT_WORD_LIMIT,
};
pub use sentence_detector::{BoundaryDetector, PunctWordTokenizer, SentenceTokenizer, WordTokenizer};

// Re-export I/O helpers used by the CLI
pub use reader::{read_input, InputSource};
pub use stats::RunStats;
pub use writer::{write_output, OutputTarget};
