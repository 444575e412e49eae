use assert_cmd::Command;

fn matmul() -> Command {
    Command::new(env!("CARGO_BIN_EXE_matmul"))
}

#[test]
fn default_size_prints_center_cell() {
    matmul().assert().success().stdout("-9.335833\n");
}

#[test]
fn explicit_size() {
    matmul().arg("10").assert().success().stdout("-0.733300\n");
}

#[test]
fn parallel_matches_sequential() {
    matmul().args(["100", "--jobs", "4"]).assert().success().stdout("-9.335833\n");
}

#[test]
fn zero_size_is_usage_error() {
    matmul().arg("0").assert().code(2).stderr(predicates::str::contains("value must be at least 1"));
}
