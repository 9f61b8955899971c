//! Black-box tests of the `tagcloud` binary: exit codes, stdin handling, and
//! the guarantee that failed runs leave no output file.

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use rstest::rstest;

const SAMPLE: &str = "the cat sat on the mat the cat ran\n";

fn tagcloud() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tagcloud"));
    cmd.env_remove("TAGCLOUD_COUNT")
        .env_remove("TAGCLOUD_FORMAT")
        .env("NO_COLOR", "1");
    cmd
}

fn sample_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("sample.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

fn run_with_stdin(cmd: &mut Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[rstest]
fn writes_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample_file(dir.path());
    let out = dir.path().join("cloud.html");

    let status = tagcloud()
        .arg(&input)
        .args(["-n", "3", "-o"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("title=\"count: 2\">cat</span>"));
    assert!(html.contains("class=\"f48\" title=\"count: 3\">the</span>"));
}

#[rstest]
fn text_format_from_stdin() {
    let output = run_with_stdin(
        tagcloud().args(["-", "-n", "2", "--format", "text", "--title", "demo"]),
        SAMPLE,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Top 2 words in demo\n"), "{stdout}");
    assert!(stdout.contains("cat"));
    assert!(stdout.contains("the"));
}

#[rstest]
fn json_format_via_environment() {
    let output = run_with_stdin(
        tagcloud().env("TAGCLOUD_FORMAT", "json").args(["-n", "1"]),
        SAMPLE,
    );
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["label"], "<stdin>");
    assert_eq!(v["words"][0]["word"], "the");
    assert_eq!(v["words"][0]["size"], 11);
}

#[rstest]
fn verbose_reports_statistics() {
    let output = run_with_stdin(tagcloud().args(["-n", "0", "-v"]), SAMPLE);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("9 tokens, 6 distinct words, selected 0"), "{stderr}");
}

#[rstest]
#[case("7", exitcode::DATAERR)]
#[case("-1", exitcode::DATAERR)]
fn bad_count_fails_without_output(#[case] n: &str, #[case] code: i32) {
    let dir = tempfile::tempdir().unwrap();
    let input = sample_file(dir.path());
    let out = dir.path().join("cloud.html");

    let output = tagcloud()
        .arg(&input)
        .args(["-n", n, "-o"])
        .arg(&out)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(code));
    assert!(!out.exists());
}

#[rstest]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = tagcloud()
        .arg(dir.path().join("absent.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(exitcode::NOINPUT));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot read input"), "{stderr}");
}

#[rstest]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample_file(dir.path());
    let output = tagcloud()
        .arg(&input)
        .args(["-n", "2", "-o"])
        .arg(dir.path().join("no_such_dir").join("cloud.html"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(exitcode::CANTCREAT));
}

#[rstest]
fn inverted_size_range_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = sample_file(dir.path());
    let output = tagcloud()
        .arg(&input)
        .args(["--min-size", "40", "--max-size", "10"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(exitcode::USAGE));
}
