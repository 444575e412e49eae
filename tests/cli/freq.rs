use assert_cmd::Command;
use predicates::prelude::*;

fn freq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_freq"))
}

fn run(input: &str) -> String {
    let output = freq().write_stdin(input).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn shows_help() {
    freq().arg("--help").assert().success().stdout(predicate::str::contains("--delimiter"));
}

#[test]
fn empty_input_reports_zero_and_one() {
    assert_eq!(run(""), "0\t1\n");
}

#[test]
fn concrete_scenario() {
    assert_eq!(run("x\ny\nx\nx\nz\n"), "3\t3\n");
}

#[test]
fn repeated_and_distinct_records() {
    assert_eq!(run("a\nb\na\n"), "2\t2\n");
    assert_eq!(run(&"same\n".repeat(50)), "1\t50\n");
    let distinct: String = (0..40).map(|i| format!("{i}\n")).collect();
    assert_eq!(run(&distinct), "40\t1\n");
}

#[test]
fn trailing_partial_record_is_not_counted() {
    assert_eq!(run("a\nb"), "1\t1\n");
    assert_eq!(run("a\na"), "1\t1\n");
}

#[test]
fn permutation_gives_same_output() {
    assert_eq!(run("p\nq\np\nr\nq\np\n"), run("r\np\nq\np\nq\np\n"));
}

#[test]
fn keep_delimiter_does_not_change_counts() {
    freq()
        .arg("--keep-delimiter")
        .write_stdin("x\ny\nx\nx\nz\n")
        .assert()
        .success()
        .stdout("3\t3\n");
}

#[test]
fn custom_delimiter() {
    freq().args(["-d", ","]).write_stdin("a,b,a,").assert().success().stdout("2\t2\n");
}

#[test]
fn top_listing_follows_summary() {
    freq()
        .args(["--top", "2"])
        .write_stdin("x\ny\nx\nx\nz\n")
        .assert()
        .success()
        .stdout("3\t3\n3\tx\n1\ty\n");
}

#[test]
fn json_format() {
    let output = freq()
        .args(["--format", "json"])
        .write_stdin("a\nb\na\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["distinct"], 2);
    assert_eq!(value["max"], 2);
}

#[test]
fn reads_named_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("records.txt");
    std::fs::write(&path, "k\nk\nl\n").expect("write fixture");
    freq().arg(&path).assert().success().stdout("2\t2\n");
}

#[test]
fn missing_file_reports_error_once() {
    freq()
        .arg("/definitely/not/here.txt")
        .assert()
        .code(1)
        .stderr("Error: Failed to read input '/definitely/not/here.txt': No such file or directory (os error 2)\n");
}

#[test]
fn top_zero_is_usage_error() {
    freq()
        .args(["--top", "0"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("value must be at least 1"));
}

#[test]
fn kept_newline_is_not_doubled_in_listing() {
    freq()
        .args(["--keep-delimiter", "--top", "2"])
        .write_stdin("a\na\nb\n")
        .assert()
        .success()
        .stdout("2\t2\n2\ta\n1\tb\n");
}
