// crates/domain/src/options.rs
/// Output format for the frequency report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<distinct>\t<max>`
    #[default]
    Tsv,
    Json,
}

/// What to do when the input stream fails with something other than EOF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Stop reading and report what was counted so far, as if the stream had ended.
    #[default]
    TreatAsEnd,
    /// Abort the run with an error.
    Fail,
}
