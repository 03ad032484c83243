//! Application state for shared services

use std::sync::Arc;

use crate::domain::{ChartRenderer, RecordStore};

/// Application state containing the per-request collaborators.
///
/// The record store is passed explicitly so each request re-reads the table;
/// nothing here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub record_store: Arc<dyn RecordStore>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
}

impl AppState {
    pub fn new(record_store: Arc<dyn RecordStore>, chart_renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            record_store,
            chart_renderer,
        }
    }
}
