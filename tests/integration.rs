use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn gutenscan_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("gutenscan");
    path
}

const SAMPLE_BOOK: &str = "\
Produced for many long years by volunteers everywhere.

*** START OF THIS PROJECT GUTENBERG EBOOK THE SAMPLE ***

He waited for twenty five long years before returning to the village.

Nothing was heard of him for years.

She lived there for seven years, then moved away.

*** END OF THIS PROJECT GUTENBERG EBOOK THE SAMPLE ***

Updated editions will replace the previous one and have been issued for ten years now.
";

fn setup_test_env() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let book_path = root.join("sample.txt");
    fs::write(&book_path, SAMPLE_BOOK).unwrap();

    let out_dir = root.join("outputs");
    (tmp, book_path, out_dir)
}

fn run_gutenscan(args: &[&str]) -> (String, String, bool) {
    let binary = gutenscan_binary();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run gutenscan binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn scan_local_file_writes_both_reports() {
    let (_tmp, book, out_dir) = setup_test_env();

    let (stdout, stderr, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
    ]);
    assert!(success, "run failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("matches: 2"));
    assert!(stdout.contains("ok"));

    let csv = fs::read_to_string(out_dir.join("for_years.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "match,start,end,between_words,num_words,left_context,right_context"
    );
    assert!(lines[1].starts_with("for twenty five long years,"));
    assert!(lines[2].starts_with("for seven years,"));

    let preview = fs::read_to_string(out_dir.join("preview.md")).unwrap();
    assert!(preview.contains("Total matches: **2** (min_words=1, max_words=12)"));
    assert!(preview.contains("1. `for twenty five long years` - between = `twenty five long` (words=3)"));
    assert!(preview.contains("2. `for seven years` - between = `seven` (words=1)"));
}

#[test]
fn boilerplate_is_trimmed_by_default() {
    let (_tmp, book, out_dir) = setup_test_env();

    // Matches inside the header/footer only count when trimming is off.
    let (stdout, _, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--dry-run",
    ]);
    assert!(success);
    assert!(stdout.contains("trimmed boilerplate"));
    assert!(stdout.contains("matches: 2"));

    let (stdout, _, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--no-trim",
        "--dry-run",
    ]);
    assert!(success);
    assert!(!stdout.contains("trimmed boilerplate"));
    assert!(stdout.contains("matches: 4"));
}

#[test]
fn min_words_filter_narrows_the_result() {
    let (_tmp, book, out_dir) = setup_test_env();

    let (stdout, _, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--min-words",
        "2",
        "--dry-run",
    ]);
    assert!(success);
    assert!(stdout.contains("matches: 1"));
}

#[test]
fn dry_run_writes_nothing() {
    let (_tmp, book, out_dir) = setup_test_env();

    let (stdout, _, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--dry-run",
    ]);
    assert!(success);
    assert!(stdout.contains("no files written"));
    assert!(!out_dir.exists());
}

#[test]
fn rerun_produces_identical_files() {
    let (_tmp, book, out_dir) = setup_test_env();

    let args = [
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
    ];
    let (_, _, success) = run_gutenscan(&args);
    assert!(success);
    let csv_first = fs::read(out_dir.join("for_years.csv")).unwrap();
    let md_first = fs::read(out_dir.join("preview.md")).unwrap();

    let (_, _, success) = run_gutenscan(&args);
    assert!(success);
    assert_eq!(fs::read(out_dir.join("for_years.csv")).unwrap(), csv_first);
    assert_eq!(fs::read(out_dir.join("preview.md")).unwrap(), md_first);
}

#[test]
fn invalid_word_bounds_fail_fast() {
    let (_tmp, book, out_dir) = setup_test_env();

    let (_, stderr, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--min-words",
        "0",
    ]);
    assert!(!success);
    assert!(stderr.contains("min_words"));
    assert!(!out_dir.exists());

    let (_, stderr, success) = run_gutenscan(&[
        "--input",
        path_arg(&book),
        "--out-dir",
        path_arg(&out_dir),
        "--min-words",
        "5",
        "--max-words",
        "2",
    ]);
    assert!(!success);
    assert!(stderr.contains("max_words"));
}

#[test]
fn config_file_drives_the_run() {
    let (_tmp, book, out_dir) = setup_test_env();
    let root = book.parent().unwrap();

    let config_content = format!(
        r#"[scan]
min_words = 1
max_words = 12

[output]
dir = "{}"
csv_file = "windows.csv"
preview_file = "windows.md"
preview_limit = 1
"#,
        out_dir.display()
    );
    let config_path = root.join("gutenscan.toml");
    fs::write(&config_path, config_content).unwrap();

    let (stdout, stderr, success) = run_gutenscan(&[
        "--config",
        path_arg(&config_path),
        "--input",
        path_arg(&book),
    ]);
    assert!(success, "run failed: stdout={}, stderr={}", stdout, stderr);

    let csv = fs::read_to_string(out_dir.join("windows.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);

    let preview = fs::read_to_string(out_dir.join("windows.md")).unwrap();
    assert!(preview.contains("### First 1 examples"));
    assert!(preview.contains("1. `for twenty five long years`"));
    assert!(!preview.contains("2. `for seven years`"));
}

#[test]
fn missing_input_file_fails() {
    let (_tmp, _book, out_dir) = setup_test_env();
    let missing = out_dir.join("no-such-book.txt");

    let (_, stderr, success) = run_gutenscan(&[
        "--input",
        path_arg(&missing),
        "--out-dir",
        path_arg(&out_dir),
    ]);
    assert!(!success);
    assert!(stderr.contains("Failed to read input file"));
}
