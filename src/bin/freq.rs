use std::process::ExitCode;

use clap::Parser;
use microbench::{app, cli::FreqArgs, logging};

fn main() -> ExitCode {
    let args = FreqArgs::parse();
    logging::init(args.verbose);

    match app::run_freq(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
