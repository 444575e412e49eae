pub mod line_writer;
pub mod report_writer;

pub use line_writer::{LineWriter, write_scalar};
pub use report_writer::ReportWriter;
