//! HTTP surface: router, handlers and response helpers

pub mod handler;
pub mod helpers;

// Re-export the router and its state for convenience
pub use handler::{AppState, router};
