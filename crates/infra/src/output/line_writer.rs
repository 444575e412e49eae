use std::io::{BufWriter, Write};

use microbench_ports::lines::LineSink;
use microbench_shared_kernel::InfraResult;

/// Buffered line output. Nothing reaches the underlying writer before the
/// buffer fills or `flush` is called.
pub struct LineWriter<W: Write> {
    out: BufWriter<W>,
    terminator: u8,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, terminator: u8) -> Self {
        Self { out: BufWriter::with_capacity(crate::input::INPUT_BUFFER_SIZE, out), terminator }
    }

    /// # Errors
    ///
    /// Returns the flush error if buffered data cannot be written.
    pub fn into_inner(self) -> InfraResult<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    fn write_line(&mut self, line_number: Option<u64>, line: &[u8]) -> InfraResult<()> {
        if let Some(number) = line_number {
            write!(self.out, "{number}:")?;
        }
        self.out.write_all(line)?;
        self.out.write_all(&[self.terminator])?;
        Ok(())
    }

    fn flush(&mut self) -> InfraResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a single floating point result with six decimals.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_scalar<W: Write>(mut out: W, value: f64) -> InfraResult<()> {
    writeln!(out, "{value:.6}")?;
    out.flush()?;
    Ok(())
}
