//! Domain layer - records, lookups, aggregation and the seams to I/O

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod lookup;
pub mod record;

pub use aggregate::{CourseSummary, StudentSummary};
pub use chart::ChartRenderer;
pub use error::DomainError;
pub use lookup::{EMPTY_ID_MESSAGE, LookupKind, QueryInput};
pub use record::{Record, RecordStore};
