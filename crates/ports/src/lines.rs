// crates/ports/src/lines.rs
use microbench_shared_kernel::InfraResult;

/// Port for line-oriented output.
pub trait LineSink {
    /// Writes `line` followed by the sink's terminator, optionally prefixed with `<line_number>:`.
    fn write_line(&mut self, line_number: Option<u64>, line: &[u8]) -> InfraResult<()>;

    fn flush(&mut self) -> InfraResult<()>;
}
