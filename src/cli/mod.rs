mod args;
mod config;
mod parsers;
mod value_enum;

pub use args::{FreqArgs, GenintArgs, MatmulArgs, PatmatchArgs, SudokuArgs};
pub use value_enum::CliOutputFormat;
