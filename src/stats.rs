// WHY: optional per-run report written with --stats-out

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::fs;

use crate::pipeline::SegmentStats;

/// Summary of one invocation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Unix timestamp (seconds) when the run started
    pub run_start: u64,
    /// Input file path, or "-" for stdin
    pub input: String,
    /// "chunks" or "window"
    pub mode: String,
    pub chars_processed: u64,
    pub sentences_detected: u64,
    pub sentences_after_correction: u64,
    /// Chunks in chunk mode, sentences in window mode
    pub units_emitted: u64,
    pub words_counted: u64,
    pub processing_time_ms: u64,
    pub chars_per_sec: f64,
}

impl RunStats {
    pub fn new(
        run_start: SystemTime,
        input: impl Into<String>,
        mode: impl Into<String>,
        segment: &SegmentStats,
        elapsed: Duration,
    ) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();
        let chars_per_sec = if elapsed_secs > 0.0 {
            segment.chars_processed as f64 / elapsed_secs
        } else {
            0.0
        };

        Self {
            run_start: run_start
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            input: input.into(),
            mode: mode.into(),
            chars_processed: segment.chars_processed,
            sentences_detected: segment.sentences_detected,
            sentences_after_correction: segment.sentences_after_correction,
            units_emitted: segment.units_emitted,
            words_counted: segment.words_counted,
            processing_time_ms: elapsed.as_millis() as u64,
            chars_per_sec,
        }
    }

    /// Write the report as pretty JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", path.display()))
    }
}
