use std::process::ExitCode;

use clap::Parser;
use microbench::{app, cli::GenintArgs, logging};

fn main() -> ExitCode {
    let args = GenintArgs::parse();
    logging::init(args.verbose);

    match app::run_genint(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
