//! Datastore implementations for the record table

pub mod csv_store;
pub mod in_memory;

pub use csv_store::CsvRecordStore;
pub use in_memory::InMemoryRecordStore;
