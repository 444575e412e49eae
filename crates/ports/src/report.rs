// crates/ports/src/report.rs
use microbench_domain::model::FrequencyReport;
use microbench_shared_kernel::{InfraResult, OccurrenceCount};

/// Port for emitting the result of a counting run.
pub trait ReportSink {
    /// Writes the summary and, if non-empty, the most frequent records.
    fn write_report(&mut self, report: &FrequencyReport, top: &[(&[u8], OccurrenceCount)]) -> InfraResult<()>;
}
