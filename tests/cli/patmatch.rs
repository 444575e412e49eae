use assert_cmd::Command;

fn patmatch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_patmatch"))
}

#[test]
fn prints_matching_lines() {
    patmatch()
        .arg("an")
        .write_stdin("apple\nbanana\ncherry\nmango\n")
        .assert()
        .success()
        .stdout("banana\nmango\n");
}

#[test]
fn line_numbers() {
    patmatch()
        .args(["-n", "^x"])
        .write_stdin("x1\ny\nx2\n")
        .assert()
        .success()
        .stdout("1:x1\n3:x2\n");
}

#[test]
fn last_line_without_newline_is_matched() {
    patmatch().arg("end").write_stdin("start\nthe end").assert().success().stdout("the end\n");
}

#[test]
fn delimiter_is_not_part_of_the_line() {
    patmatch().arg("a$").write_stdin("a\nab\nba\n").assert().success().stdout("a\nba\n");
}

#[test]
fn missing_pattern_is_usage_error() {
    patmatch().assert().failure().code(2);
}

#[test]
fn invalid_pattern_fails() {
    patmatch().arg("(").write_stdin("x\n").assert().failure().code(1);
}
