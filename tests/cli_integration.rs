// Command line behavior of the prose-chunker binary

use serde_json::Value;
use std::fs;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{run_cli, stdout_text, TestFixture, DIALOGUE_SAMPLE};

const FIVE_SENTENCES: &str = "First one. Second one. Third one. Fourth one. Fifth one.";

#[test]
fn test_chunks_from_file_to_stdout() {
    let fixture = TestFixture::new();
    let input = fixture.create_text_file("input.txt", "Hello world.\nThis is a test.\n");

    let output = run_cli(&["-f", input.to_str().unwrap()], None);
    assert_eq!(stdout_text(&output), "Hello world. This is a test.");
}

#[test]
fn test_chunks_from_stdin() {
    let text = "One two three. Four five. Six seven eight nine. Ten.";
    let output = run_cli(&["-i", "4"], Some(text));
    assert_eq!(stdout_text(&output), "One two three.\n\nFour five.\n\nSix seven eight nine. Ten.");
}

#[test]
fn test_custom_delimiter() {
    let text = "One two three. Four five. Six seven eight nine. Ten.";
    let output = run_cli(&["--word-num", "4", "--delimiter", " || "], Some(text));
    assert_eq!(stdout_text(&output), "One two three. || Four five. || Six seven eight nine. Ten.");
}

#[test]
fn test_preserve_flag() {
    let plain = run_cli(&["-i", "3", "-d", "\n"], Some(DIALOGUE_SAMPLE));
    assert_eq!(stdout_text(&plain).lines().count(), 5);

    let preserved = run_cli(&["-i", "3", "-d", "\n", "-p"], Some(DIALOGUE_SAMPLE));
    let preserved_text = stdout_text(&preserved);
    let lines: Vec<&str> = preserved_text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "\"Who is there?\" she asked. \"Only me,\" he said. \"Come in.\"");
}

#[test]
fn test_sentence_window_forward_and_reverse() {
    let forward = run_cli(&["-s", "2", "--offset", "1"], Some(FIVE_SENTENCES));
    assert_eq!(stdout_text(&forward), "Second one. Third one.");

    let reverse = run_cli(&["-s", "2", "-r"], Some(FIVE_SENTENCES));
    assert_eq!(stdout_text(&reverse), "Fourth one. Fifth one.");

    let alias = run_cli(&["-s", "1", "-r", "--of", "1"], Some(FIVE_SENTENCES));
    assert_eq!(stdout_text(&alias), "Fourth one.");
}

#[test]
fn test_zero_sentence_count_falls_back_to_chunks() {
    let output = run_cli(&["-s", "0"], Some(FIVE_SENTENCES));
    assert_eq!(stdout_text(&output), FIVE_SENTENCES);
}

#[test]
fn test_output_file() {
    let fixture = TestFixture::new();
    let out_path = fixture.path("out.txt");

    let output = run_cli(&["-i", "4", "-o", out_path.to_str().unwrap()], Some("A b c d. E f g h. I."));
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty(), "Nothing should be printed when writing to a file");

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "A b c d.\n\nE f g h. I.");
}

#[test]
fn test_missing_input_file_fails() {
    let fixture = TestFixture::new();
    let missing = fixture.path("missing.txt");
    let out_path = fixture.path("out.txt");

    let output = run_cli(
        &["-f", missing.to_str().unwrap(), "-o", out_path.to_str().unwrap()],
        None,
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!out_path.exists(), "No output should be written when input is missing");
}

#[test]
fn test_unwritable_output_fails() {
    let fixture = TestFixture::new();
    let out_path = fixture.path("no_such_dir/out.txt");

    let output = run_cli(&["-o", out_path.to_str().unwrap()], Some("Some text."));
    assert!(!output.status.success());
}

#[test]
fn test_zero_word_limit_is_rejected() {
    let output = run_cli(&["-i", "0"], Some("Some text."));
    assert!(!output.status.success());
}

#[test]
fn test_empty_stdin() {
    let output = run_cli(&[], Some(""));
    assert_eq!(stdout_text(&output), "");
}

#[test]
fn test_stats_output_json_structure() {
    let fixture = TestFixture::new();
    let input = fixture.create_text_file("input.txt", DIALOGUE_SAMPLE);
    let stats_path = fixture.path("stats.json");

    let output = run_cli(
        &["-f", input.to_str().unwrap(), "-i", "3", "--stats-out", stats_path.to_str().unwrap()],
        None,
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_path).unwrap())
        .expect("Stats file should be valid JSON");
    let obj = stats.as_object().expect("Stats should be a JSON object");

    for key in [
        "run_start",
        "input",
        "mode",
        "chars_processed",
        "sentences_detected",
        "sentences_after_correction",
        "units_emitted",
        "words_counted",
        "processing_time_ms",
        "chars_per_sec",
    ] {
        assert!(obj.contains_key(key), "Missing {key} field");
    }

    assert_eq!(obj["mode"], "chunks");
    assert_eq!(obj["input"].as_str().unwrap(), input.to_str().unwrap());
    assert_eq!(obj["sentences_detected"], 7);
    assert_eq!(obj["sentences_after_correction"], 5);
    assert_eq!(obj["units_emitted"], 5);
    assert!(obj["chars_processed"].as_u64().unwrap() > 0);
}

#[test]
fn test_stats_output_window_mode_from_stdin() {
    let fixture = TestFixture::new();
    let stats_path = fixture.path("stats.json");

    let output = run_cli(&["-s", "3", "--stats-out", stats_path.to_str().unwrap()], Some(FIVE_SENTENCES));
    assert_eq!(stdout_text(&output), "First one. Second one. Third one.");

    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_path).unwrap()).unwrap();
    assert_eq!(stats["mode"], "window");
    assert_eq!(stats["input"], "-");
    assert_eq!(stats["units_emitted"], 3);
    assert_eq!(stats["words_counted"], 6);
}
