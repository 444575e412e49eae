// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use microbench_domain::config::{Delimiter, GenerateConfig, MatmulConfig};

use super::{parsers, value_enum::CliOutputFormat};

/// `freq`: count distinct records and the highest repeat count.
#[derive(Parser, Debug)]
#[command(
    name = "freq",
    version = crate::VERSION,
    about = "Count distinct newline-delimited records and the highest repeat count",
    long_about = "Reads records from standard input until end of stream and prints \
                  `<distinct>\\t<max>`. A final record with no trailing delimiter is not counted."
)]
pub struct FreqArgs {
    /// Read from FILE instead of standard input (`-` means standard input)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Record delimiter: one ASCII character or \n, \t, \r, \0
    #[arg(short, long, default_value = "\\n", help_heading = "Input")]
    pub delimiter: Delimiter,

    /// Keep the delimiter byte as part of each record
    #[arg(long, help_heading = "Input")]
    pub keep_delimiter: bool,

    /// Fail on read errors instead of treating them as end of input
    #[arg(long, help_heading = "Input")]
    pub strict: bool,

    /// Initial frequency table capacity
    #[arg(long, default_value_t = 0, help_heading = "Input")]
    pub capacity: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "tsv", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Also list the N most frequent records
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Output")]
    pub top: Option<usize>,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `matmul`: multiply two generated n x n matrices.
#[derive(Parser, Debug)]
#[command(name = "matmul", version = crate::VERSION, about = "Multiply two generated n x n matrices and print x[n/2][n/2]")]
pub struct MatmulArgs {
    /// Matrix dimension
    #[arg(default_value_t = MatmulConfig::DEFAULT_SIZE, value_parser = parsers::parse_positive_usize)]
    pub size: usize,

    /// Worker threads; 0 uses one per CPU
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `patmatch`: print the lines of standard input that match a regular expression.
#[derive(Parser, Debug)]
#[command(name = "patmatch", version = crate::VERSION, about = "Print lines of standard input matching a regular expression")]
pub struct PatmatchArgs {
    /// Regular expression, searched anywhere in each line
    pub pattern: String,

    /// Prefix each line with its 1-based line number
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Line delimiter: one ASCII character or \n, \t, \r, \0
    #[arg(short, long, default_value = "\\n")]
    pub delimiter: Delimiter,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `genint`: generate input for `freq`.
#[derive(Parser, Debug)]
#[command(name = "genint", version = crate::VERSION, about = "Print pseudo-random integers with about N/4 distinct values")]
pub struct GenintArgs {
    /// Number of values to print (at least 4)
    #[arg(default_value_t = GenerateConfig::DEFAULT_COUNT, value_parser = parsers::parse_generate_count)]
    pub count: usize,

    /// Generator seed
    #[arg(long, default_value_t = GenerateConfig::DEFAULT_SEED)]
    pub seed: u32,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `sudoku`: solve one puzzle per line of standard input.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku",
    version = crate::VERSION,
    about = "Solve sudoku puzzles read one per line from standard input",
    long_about = "Each line holds 81 cells in row-major order; 1-9 are givens and any other \
                  character is empty. Every solution is printed on its own line, followed by an \
                  empty line. Shorter lines are skipped."
)]
pub struct SudokuArgs {
    /// Stop after N solutions per puzzle
    #[arg(short, long, value_parser = parsers::parse_positive_usize)]
    pub limit: Option<usize>,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
