use log::{debug, warn};
use microbench_domain::pattern::LinePattern;
use microbench_ports::{
    lines::LineSink,
    records::{RecordEvent, RecordSource},
};
use microbench_shared_kernel::{ErrorContext, Result};

use crate::dto::MatchLinesOutput;

/// Copies the lines of a source that match a pattern to a sink.
///
/// Unlike counting, a final line without a delimiter is still considered.
/// Read errors end the input; the lines matched so far are kept.
pub struct MatchLines<'a> {
    source: &'a mut dyn RecordSource,
    sink: &'a mut dyn LineSink,
}

impl<'a> MatchLines<'a> {
    pub fn new(source: &'a mut dyn RecordSource, sink: &'a mut dyn LineSink) -> Self {
        Self { source, sink }
    }

    /// # Errors
    ///
    /// Fails only when the sink cannot be written.
    pub fn run(&mut self, pattern: &LinePattern, line_numbers: bool) -> Result<MatchLinesOutput> {
        let mut output = MatchLinesOutput { lines_read: 0, lines_matched: 0 };

        loop {
            let line = match self.source.next_record() {
                Ok(RecordEvent::Record(line) | RecordEvent::Partial(line)) => line,
                Ok(RecordEvent::End) => break,
                Err(err) => {
                    warn!("input ended early after {} lines: {err}", output.lines_read);
                    break;
                }
            };
            output.lines_read += 1;

            if pattern.is_match(line) {
                output.lines_matched += 1;
                let number = line_numbers.then_some(output.lines_read);
                self.sink.write_line(number, line).context("writing matched line")?;
            }
        }

        self.sink.flush().context("flushing matched lines")?;
        debug!("/{pattern}/ matched {} of {} lines", output.lines_matched, output.lines_read);
        Ok(output)
    }
}
