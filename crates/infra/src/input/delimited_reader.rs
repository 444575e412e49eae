use std::{
    fs::File,
    io::{self, BufRead, BufReader, StdinLock},
    path::Path,
};

use log::debug;
use microbench_domain::config::Delimiter;
use microbench_ports::records::{RecordEvent, RecordSource};
use microbench_shared_kernel::{InfraResult, InfrastructureError};

/// Read buffer used for stdin and files.
pub const INPUT_BUFFER_SIZE: usize = 0x10000;

/// Splits any `BufRead` into delimiter-terminated records.
///
/// The record buffer is reused between calls, so a record borrows the reader
/// until the next call.
pub struct DelimitedReader<R> {
    reader: R,
    buf: Vec<u8>,
    delimiter: u8,
    keep_delimiter: bool,
    name: String,
    done: bool,
}

impl<R: BufRead> DelimitedReader<R> {
    pub fn new(reader: R, delimiter: Delimiter, keep_delimiter: bool, name: impl Into<String>) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            delimiter: delimiter.byte(),
            keep_delimiter,
            name: name.into(),
            done: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl DelimitedReader<BufReader<StdinLock<'static>>> {
    pub fn stdin(delimiter: Delimiter, keep_delimiter: bool) -> Self {
        let reader = BufReader::with_capacity(INPUT_BUFFER_SIZE, io::stdin().lock());
        Self::new(reader, delimiter, keep_delimiter, "<stdin>")
    }
}

impl DelimitedReader<BufReader<File>> {
    /// Opens `path` with buffered reading.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::InputRead` if the file cannot be opened.
    pub fn open(path: &Path, delimiter: Delimiter, keep_delimiter: bool) -> InfraResult<Self> {
        let name = path.display().to_string();
        let file = File::open(path)
            .map_err(|source| InfrastructureError::InputRead { source_name: name.clone(), source })?;
        debug!("reading records from {name}");
        let reader = BufReader::with_capacity(INPUT_BUFFER_SIZE, file);
        Ok(Self::new(reader, delimiter, keep_delimiter, name))
    }
}

impl<R: BufRead> RecordSource for DelimitedReader<R> {
    fn next_record(&mut self) -> InfraResult<RecordEvent<'_>> {
        if self.done {
            return Ok(RecordEvent::End);
        }

        self.buf.clear();
        // `read_until` already retries on `ErrorKind::Interrupted`.
        match self.reader.read_until(self.delimiter, &mut self.buf) {
            Ok(0) => {
                self.done = true;
                Ok(RecordEvent::End)
            }
            Ok(_) if self.buf.last() == Some(&self.delimiter) => {
                let end = if self.keep_delimiter { self.buf.len() } else { self.buf.len() - 1 };
                Ok(RecordEvent::Record(&self.buf[..end]))
            }
            Ok(_) => {
                self.done = true;
                Ok(RecordEvent::Partial(&self.buf))
            }
            Err(source) => {
                self.done = true;
                Err(InfrastructureError::InputRead { source_name: self.name.clone(), source })
            }
        }
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
