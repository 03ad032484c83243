//! In-memory record store, used by tests and the ready probe fixtures

use crate::domain::{DomainError, Record, RecordStore};

/// Record store serving a fixed table from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load(&self) -> Result<Vec<Record>, DomainError> {
        Ok(self.records.clone())
    }
}
