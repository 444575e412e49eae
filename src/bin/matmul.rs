use std::process::ExitCode;

use clap::Parser;
use microbench::{app, cli::MatmulArgs, logging};

fn main() -> ExitCode {
    let args = MatmulArgs::parse();
    logging::init(args.verbose);

    match app::run_matmul(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
