use assert_cmd::Command;

fn genint() -> Command {
    Command::new(env!("CARGO_BIN_EXE_genint"))
}

#[test]
fn reproduces_reference_values() {
    genint()
        .arg("8")
        .assert()
        .success()
        .stdout("271828183\n0\n0\n0\n0\n0\n271828183\n0\n");
}

#[test]
fn output_feeds_the_counter() {
    let generated = genint().arg("100").assert().success().get_output().stdout.clone();
    assert_eq!(generated.iter().filter(|&&b| b == b'\n').count(), 100);

    Command::new(env!("CARGO_BIN_EXE_freq"))
        .write_stdin(generated)
        .assert()
        .success()
        .stdout(predicates::str::starts_with("25\t"));
}

#[test]
fn too_small_count_fails() {
    genint().arg("3").assert().code(2).stderr(predicates::str::contains("value must be at least 4"));
}
