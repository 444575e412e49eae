use std::process::ExitCode;

use clap::Parser;
use microbench::{app, cli::PatmatchArgs, logging};

fn main() -> ExitCode {
    let args = PatmatchArgs::parse();
    logging::init(args.verbose);

    match app::run_patmatch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
