use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

/// Where the output text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// File when a path is given, stdout otherwise
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }
}

/// Write the output; stdout gets a trailing newline, files get the text as-is
pub async fn write_output(target: &OutputTarget, output: &str) -> Result<()> {
    match target {
        OutputTarget::File(path) => {
            let file = tokio::fs::File::create(path)
                .await
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(output.as_bytes())
                .await
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            writer.flush().await?;
            info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        OutputTarget::Stdout => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
