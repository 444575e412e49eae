use microbench_domain::model::{FrequencyReport, FrequencyTable, Matrix};
use microbench_ports::report::ReportSink;
use microbench_shared_kernel::{ApplicationError, MicrobenchError, Result};

/// Result of [`crate::CountRecords::run`].
#[derive(Debug, Clone)]
pub struct CountRecordsOutput {
    pub table: FrequencyTable,
    pub records_read: u64,
    /// Length of the trailing record that had no delimiter, if any.
    pub partial_discarded: Option<usize>,
    /// Read error that ended the stream early under `ReadErrorPolicy::TreatAsEnd`.
    pub read_error: Option<String>,
}

impl CountRecordsOutput {
    pub fn report(&self) -> FrequencyReport {
        self.table.report()
    }

    /// Sends the report, plus the `top` most frequent records when requested, to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::PresentationFailed` if the sink cannot write.
    pub fn publish(&self, sink: &mut dyn ReportSink, top: Option<usize>) -> Result<()> {
        let listing = top.map(|n| self.table.top(n)).unwrap_or_default();
        sink.write_report(&self.report(), &listing).map_err(|err| {
            ApplicationError::PresentationFailed {
                reason: format!("writing frequency report: {err}"),
                source: Some(Box::new(MicrobenchError::from(err))),
            }
            .into()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLinesOutput {
    pub lines_read: u64,
    pub lines_matched: u64,
}

#[derive(Debug, Clone)]
pub struct MultiplyOutput {
    pub product: Matrix,
}

impl MultiplyOutput {
    /// The cell the benchmark prints: `x[n/2][n/2]`.
    pub fn center(&self) -> f64 {
        self.product.get(self.product.rows() / 2, self.product.cols() / 2).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolvePuzzlesOutput {
    pub puzzles_solved: u64,
    pub solutions_found: u64,
    /// Lines too short to hold a grid.
    pub lines_skipped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOutput {
    pub values_written: usize,
}
