// crates/infra/tests/file_input.rs
use std::io::Write;

use microbench_domain::config::Delimiter;
use microbench_infra::input::DelimitedReader;
use microbench_ports::records::{RecordEvent, RecordSource};

#[test]
fn reads_records_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"one\ntwo\none\n").expect("write fixture");

    let mut reader = DelimitedReader::open(file.path(), Delimiter::NEWLINE, false).expect("open");
    let mut records = Vec::new();
    while let RecordEvent::Record(record) = reader.next_record().expect("read") {
        records.push(record.to_vec());
    }
    assert_eq!(records, [b"one".to_vec(), b"two".to_vec(), b"one".to_vec()]);
    assert_eq!(reader.source_name(), file.path().display().to_string());
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.txt");
    let err = DelimitedReader::open(&path, Delimiter::NEWLINE, false).err().expect("open fails");
    assert!(err.to_string().contains("absent.txt"));
}
