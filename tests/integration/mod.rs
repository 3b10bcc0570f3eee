// Integration test utilities and common code
// WHY: Centralized fixtures avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Short prose sample with a split quotation, an attribution clause and a dialogue run
pub const DIALOGUE_SAMPLE: &str = "The door opened. \"Who is there?\" she asked. \"Only me,\" he said. \
\"Come in.\" He entered the room. It was dark.";

/// Temporary directory holding input and output files for one test
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Path inside the fixture that does not exist yet
    pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }
}

/// Run the compiled binary, optionally feeding stdin
pub fn run_cli(args: &[&str], stdin: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_prose-chunker"));
    command
        .args(args)
        .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("Failed to spawn prose-chunker");
    if let Some(input) = stdin {
        let mut handle = child.stdin.take().expect("stdin should be piped");
        handle.write_all(input.as_bytes()).expect("Failed to write stdin");
    }

    child.wait_with_output().expect("Failed to wait for prose-chunker")
}

/// Stdout of a successful run with the trailing newline removed
pub fn stdout_text(output: &Output) -> String {
    assert!(
        output.status.success(),
        "prose-chunker failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8");
    stdout.strip_suffix('\n').unwrap_or(&stdout).to_string()
}
