//! Vitalis Shared Library
//!
//! Domain models, health-metric calculations, validation and API types
//! shared by the backend and its tests. Nothing in this crate performs I/O.

pub mod health_metrics;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use health_metrics::*;
pub use models::*;
pub use types::*;
pub use units::*;
