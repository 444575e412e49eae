use assert_cmd::Command;
use predicates::prelude::*;

const EASY: &str = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
const EASY_SOLVED: &str = "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
const HARD: &str = "..............3.85..1.2.......5.7.....4...1...9.......5......73..2.1........4...9";
const HARD_SOLVED: &str = "987654321246173985351928746128537694634892157795461832519286473472319568863745219";
const TWO_WAYS: &str = "4.3921.579.7345.21251876493548132976729564138136798245372689514814253769695417382";
const TWO_WAYS_FIRST: &str = "463921857987345621251876493548132976729564138136798245372689514814253769695417382";

fn sudoku() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sudoku"))
}

#[test]
fn solves_each_line_and_separates_with_blank_line() {
    sudoku()
        .write_stdin(format!("{EASY}\n{HARD}\n"))
        .assert()
        .success()
        .stdout(format!("{EASY_SOLVED}\n\n{HARD_SOLVED}\n\n"));
}

#[test]
fn prints_every_solution() {
    sudoku()
        .write_stdin(format!("{TWO_WAYS}\n"))
        .assert()
        .success()
        .stdout(format!("{TWO_WAYS_FIRST}\n{EASY_SOLVED}\n\n"));
}

#[test]
fn limit_caps_solutions_per_puzzle() {
    sudoku()
        .args(["--limit", "1"])
        .write_stdin(format!("{TWO_WAYS}\n{TWO_WAYS}"))
        .assert()
        .success()
        .stdout(format!("{TWO_WAYS_FIRST}\n\n{TWO_WAYS_FIRST}\n\n"));
}

#[test]
fn short_lines_are_skipped_and_unsolvable_puzzles_print_blank() {
    let clash = format!("11{}", ".".repeat(79));
    sudoku()
        .write_stdin(format!("# comment\n\n{clash}\n"))
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn zero_limit_is_usage_error() {
    sudoku().args(["--limit", "0"]).assert().code(2).stderr(predicate::str::contains("value must be at least 1"));
}
