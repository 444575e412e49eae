// crates/ports/src/records.rs
use microbench_shared_kernel::InfraResult;

/// One step of reading a delimited stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEvent<'a> {
    /// A delimiter-terminated record. Whether the delimiter is included is up to the source.
    Record(&'a [u8]),
    /// Bytes left over at end of stream with no terminating delimiter.
    Partial(&'a [u8]),
    /// The stream is exhausted.
    End,
}

/// Port for pulling records out of a byte stream.
///
/// After `End` or an error, further calls keep returning `End`.
pub trait RecordSource {
    fn next_record(&mut self) -> InfraResult<RecordEvent<'_>>;

    /// Human readable name of the underlying stream, used in logs and errors.
    fn source_name(&self) -> &str;
}
