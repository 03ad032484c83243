//! Record store trait - the seam between the domain and the table source

use crate::domain::{DomainError, Record};

/// Source of the in-memory record table.
///
/// Implementations re-read the underlying source on every call; there is no
/// cross-request caching. A missing source yields an empty record set rather
/// than an error, so downstream code treats it the same as "no match".
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the full record table.
    async fn load(&self) -> Result<Vec<Record>, DomainError>;
}
