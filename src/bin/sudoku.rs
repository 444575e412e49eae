use std::process::ExitCode;

use clap::Parser;
use microbench::{app, cli::SudokuArgs, logging};

fn main() -> ExitCode {
    let args = SudokuArgs::parse();
    logging::init(args.verbose);

    match app::run_sudoku(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
