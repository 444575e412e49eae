pub mod delimited_reader;

pub use delimited_reader::{DelimitedReader, INPUT_BUFFER_SIZE};
