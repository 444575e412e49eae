use log::{debug, warn};
use microbench_domain::{config::CounterConfig, model::FrequencyTable, options::ReadErrorPolicy};
use microbench_ports::records::{RecordEvent, RecordSource};
use microbench_shared_kernel::{ApplicationError, MicrobenchError, Result};

use crate::dto::CountRecordsOutput;

/// Reads every record from a source and tallies it.
pub struct CountRecords<'a> {
    source: &'a mut dyn RecordSource,
}

impl<'a> CountRecords<'a> {
    pub fn new(source: &'a mut dyn RecordSource) -> Self {
        Self { source }
    }

    /// Consumes the source until it ends.
    ///
    /// A trailing record without a delimiter is not counted.
    ///
    /// # Errors
    ///
    /// With `ReadErrorPolicy::Fail`, a read error is returned as
    /// `ApplicationError::InputFailed`. Otherwise read errors end the run like EOF.
    pub fn run(&mut self, config: &CounterConfig) -> Result<CountRecordsOutput> {
        let mut table = FrequencyTable::with_capacity(config.capacity_hint);
        let mut records_read = 0u64;
        let mut partial_discarded = None;
        let mut read_error = None;
        let source_name = self.source.source_name().to_string();

        loop {
            match self.source.next_record() {
                Ok(RecordEvent::Record(record)) => {
                    table.observe(record);
                    records_read += 1;
                }
                Ok(RecordEvent::Partial(rest)) => {
                    debug!("discarding {} trailing bytes with no delimiter", rest.len());
                    partial_discarded = Some(rest.len());
                }
                Ok(RecordEvent::End) => break,
                Err(err) => match config.read_errors {
                    ReadErrorPolicy::TreatAsEnd => {
                        warn!("input ended early after {records_read} records: {err}");
                        read_error = Some(err.to_string());
                        break;
                    }
                    ReadErrorPolicy::Fail => {
                        return Err(ApplicationError::InputFailed {
                            records_read,
                            reason: err.to_string(),
                            source: Some(Box::new(MicrobenchError::from(err))),
                        }
                        .into());
                    }
                },
            }
        }

        debug!("counted {records_read} records from {source_name}: {} distinct", table.distinct());
        Ok(CountRecordsOutput { table, records_read, partial_discarded, read_error })
    }
}
