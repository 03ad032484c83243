//! API layer - HTTP endpoints and HTML views

pub mod health;
pub mod index;
pub mod router;
pub mod state;
pub mod types;
pub mod views;

pub use router::create_router;
pub use state::AppState;
