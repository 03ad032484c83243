//! CSV-backed record store

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{DomainError, Record, RecordStore};

/// One row of the source table as it appears on disk. The header must carry
/// exactly these column names; anything else fails deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Student ID")]
    student_id: String,

    #[serde(rename = "Course ID")]
    course_id: String,

    #[serde(rename = "Marks")]
    marks: i64,
}

impl From<CsvRow> for Record {
    fn from(row: CsvRow) -> Self {
        Record::new(row.student_id, row.course_id, row.marks)
    }
}

/// Record store reading a CSV file from disk on every load.
///
/// A missing file degrades to an empty record set (logged, not surfaced);
/// a malformed row fails the whole load.
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl RecordStore for CsvRecordStore {
    async fn load(&self) -> Result<Vec<Record>, DomainError> {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(err) if is_not_found(&err) => {
                warn!(path = %self.path.display(), "marks file not found, serving empty record set");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(DomainError::data_source(format!(
                    "failed to open {}: {}",
                    self.path.display(),
                    err
                )));
            }
        };

        let mut records = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|err| {
                DomainError::data_source(format!(
                    "failed to parse {}: {}",
                    self.path.display(),
                    err
                ))
            })?;
            records.push(Record::from(row));
        }

        debug!(count = records.len(), "loaded marks table");
        Ok(records)
    }
}

fn is_not_found(err: &csv::Error) -> bool {
    match err.kind() {
        csv::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_all_rows_in_order() {
        let file = csv_file(
            "Student ID,Course ID,Marks\n\
             S1,C1,80\n\
             S1,C2,90\n\
             S2,C1,70\n",
        );
        let store = CsvRecordStore::new(file.path());

        let records = store.load().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new("S1", "C1", 80));
        assert_eq!(records[2], Record::new("S2", "C1", 70));
    }

    #[tokio::test]
    async fn test_missing_file_degrades_to_empty_set() {
        let store = CsvRecordStore::new("does/not/exist.csv");

        let records = store.load().await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_non_integer_marks_fail_the_load() {
        let file = csv_file(
            "Student ID,Course ID,Marks\n\
             S1,C1,eighty\n",
        );
        let store = CsvRecordStore::new(file.path());

        let err = store.load().await.unwrap_err();

        assert!(matches!(err, DomainError::DataSource { .. }));
    }

    #[tokio::test]
    async fn test_header_mismatch_fails_the_load() {
        // Column names are case- and spacing-sensitive.
        let file = csv_file(
            "student id,course id,marks\n\
             S1,C1,80\n",
        );
        let store = CsvRecordStore::new(file.path());

        let err = store.load().await.unwrap_err();

        assert!(matches!(err, DomainError::DataSource { .. }));
    }

    #[tokio::test]
    async fn test_header_only_file_is_empty_set() {
        let file = csv_file("Student ID,Course ID,Marks\n");
        let store = CsvRecordStore::new(file.path());

        let records = store.load().await.unwrap();

        assert!(records.is_empty());
    }
}
