//! Resolved configuration for each program, built from CLI arguments.

pub mod delimiter;

pub use delimiter::Delimiter;

use microbench_shared_kernel::{DomainError, DomainResult};

use crate::options::{OutputFormat, ReadErrorPolicy};

/// Frequency counter settings. The default reproduces the bare `freq` invocation.
#[derive(Debug, Clone, Default)]
pub struct CounterConfig {
    pub delimiter: Delimiter,
    /// Keep the delimiter byte as part of each stored record.
    pub keep_delimiter: bool,
    pub read_errors: ReadErrorPolicy,
    /// Initial table capacity.
    pub capacity_hint: usize,
    /// Number of most frequent records to list after the summary.
    pub top: Option<usize>,
    pub format: OutputFormat,
}

/// Matrix multiplication settings.
#[derive(Debug, Clone)]
pub struct MatmulConfig {
    pub size: usize,
    pub jobs: usize,
}

impl MatmulConfig {
    pub const DEFAULT_SIZE: usize = 100;

    /// # Errors
    ///
    /// Returns `DomainError::RangeValidation` when `size` or `jobs` is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.size == 0 {
            return Err(range_error("size", 1, usize::MAX));
        }
        if self.jobs == 0 {
            return Err(range_error("jobs", 1, usize::MAX));
        }
        Ok(())
    }
}

impl Default for MatmulConfig {
    fn default() -> Self {
        Self { size: Self::DEFAULT_SIZE, jobs: 1 }
    }
}

/// Line matcher settings.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub pattern: String,
    pub delimiter: Delimiter,
    /// Prefix each printed line with its 1-based line number and `:`.
    pub line_numbers: bool,
}

/// Input generator settings.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub count: usize,
    pub seed: u32,
}

impl GenerateConfig {
    pub const DEFAULT_COUNT: usize = 5_000_000;
    pub const DEFAULT_SEED: u32 = 11;
    pub const MULTIPLIER: u32 = 271_828_183;
    pub const MIN_COUNT: usize = 4;

    /// Values are drawn from `count / 4` buckets, so `count` must be at least 4.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeValidation` when `count` is below 4.
    pub fn validate(&self) -> DomainResult<()> {
        if self.count < Self::MIN_COUNT {
            return Err(range_error("count", Self::MIN_COUNT, usize::MAX));
        }
        Ok(())
    }

    pub fn buckets(&self) -> u32 {
        u32::try_from(self.count / 4).unwrap_or(u32::MAX)
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { count: Self::DEFAULT_COUNT, seed: Self::DEFAULT_SEED }
    }
}

/// Sudoku solver settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Stop after this many solutions per puzzle; `None` enumerates them all.
    pub limit: Option<usize>,
}

fn range_error(field: &str, min: usize, max: usize) -> DomainError {
    DomainError::RangeValidation { field: field.to_string(), min: min.to_string(), max: max.to_string() }
}
