use std::io::Write;

use microbench_domain::{model::FrequencyReport, options::OutputFormat};
use microbench_ports::report::ReportSink;
use microbench_shared_kernel::{DistinctCount, InfraResult, OccurrenceCount};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport {
    distinct: DistinctCount,
    max: OccurrenceCount,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top: Vec<JsonEntry>,
}

/// `record` holds the record bytes with non-printable and non-ASCII bytes
/// escaped (`\xff`, `\n`, `\\`), so distinct records never collide.
#[derive(Serialize)]
struct JsonEntry {
    record: String,
    count: OccurrenceCount,
}

/// Writes a frequency report as TSV or JSON.
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_tsv(&mut self, report: &FrequencyReport, top: &[(&[u8], OccurrenceCount)]) -> InfraResult<()> {
        writeln!(self.out, "{report}")?;
        for (record, count) in top {
            write!(self.out, "{count}\t")?;
            self.out.write_all(record)?;
            // Records kept with a newline delimiter already end the line.
            if !record.ends_with(b"\n") {
                self.out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn write_json(&mut self, report: &FrequencyReport, top: &[(&[u8], OccurrenceCount)]) -> InfraResult<()> {
        let body = JsonReport {
            distinct: report.distinct,
            max: report.max,
            top: top
                .iter()
                .map(|(record, count)| JsonEntry { record: record.escape_ascii().to_string(), count: *count })
                .collect(),
        };
        serde_json::to_writer(&mut self.out, &body)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> ReportSink for ReportWriter<W> {
    fn write_report(&mut self, report: &FrequencyReport, top: &[(&[u8], OccurrenceCount)]) -> InfraResult<()> {
        match self.format {
            OutputFormat::Tsv => self.write_tsv(report, top)?,
            OutputFormat::Json => self.write_json(report, top)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
