// src/cli/config.rs
use microbench_domain::{
    config::{CounterConfig, GenerateConfig, MatchConfig, MatmulConfig, SolveConfig},
    options::ReadErrorPolicy,
};

use super::args::{FreqArgs, GenintArgs, MatmulArgs, PatmatchArgs, SudokuArgs};

impl FreqArgs {
    /// Input file, or `None` for standard input.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

impl From<&FreqArgs> for CounterConfig {
    fn from(args: &FreqArgs) -> Self {
        Self {
            delimiter: args.delimiter,
            keep_delimiter: args.keep_delimiter,
            read_errors: if args.strict { ReadErrorPolicy::Fail } else { ReadErrorPolicy::TreatAsEnd },
            capacity_hint: args.capacity,
            top: args.top,
            format: args.format.into(),
        }
    }
}

impl From<&MatmulArgs> for MatmulConfig {
    fn from(args: &MatmulArgs) -> Self {
        let jobs = if args.jobs == 0 { num_cpus::get() } else { args.jobs };
        Self { size: args.size, jobs }
    }
}

impl From<&PatmatchArgs> for MatchConfig {
    fn from(args: &PatmatchArgs) -> Self {
        Self { pattern: args.pattern.clone(), delimiter: args.delimiter, line_numbers: args.line_number }
    }
}

impl From<&GenintArgs> for GenerateConfig {
    fn from(args: &GenintArgs) -> Self {
        Self { count: args.count, seed: args.seed }
    }
}

impl From<&SudokuArgs> for SolveConfig {
    fn from(args: &SudokuArgs) -> Self {
        Self { limit: args.limit }
    }
}
