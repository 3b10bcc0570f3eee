use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// File when a path is given, stdin otherwise
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => InputSource::File(path.to_path_buf()),
            None => InputSource::Stdin,
        }
    }

    /// Label used in logs and run statistics
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "-".to_string(),
        }
    }
}

/// Read the whole input into memory
pub async fn read_input(source: &InputSource) -> Result<String> {
    let start_time = std::time::Instant::now();

    let text = match source {
        InputSource::File(path) => read_file_async(path).await?,
        InputSource::Stdin => {
            debug!("Reading input from stdin");
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read input from stdin")?;
            text
        }
    };

    info!(
        "Read {} bytes from {} in {}ms",
        text.len(),
        source.label(),
        start_time.elapsed().as_millis()
    );
    Ok(text)
}

/// Read a single file, failing with the path named when it is missing or unreadable
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();

    // Missing input is reported before any processing starts
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        bail!("Input file does not exist: {}", path.display());
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))
}
