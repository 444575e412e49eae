//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate drives domain models through the ports:
//!
//! - [`orchestrator`]: count records from a source into a frequency table
//! - [`match_lines`]: filter lines through a compiled pattern
//! - [`multiply`]: generate and multiply the benchmark matrices
//! - [`solve`]: solve one sudoku puzzle per line
//! - [`generate`]: produce frequency-counter input from the drand48 generator
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod generate;
pub mod match_lines;
pub mod multiply;
pub mod orchestrator;
pub mod solve;

pub use dto::{CountRecordsOutput, GenerateOutput, MatchLinesOutput, MultiplyOutput, SolvePuzzlesOutput};
pub use generate::GenerateIntegers;
pub use match_lines::MatchLines;
pub use multiply::MultiplyMatrices;
pub use orchestrator::CountRecords;
pub use solve::SolvePuzzles;
