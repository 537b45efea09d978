//! Providers for ambient inputs such as the current time
//!
//! Services depend on these traits instead of reading the clock directly,
//! so tests can pin "now" to a fixed instant.

pub mod date;

pub use date::{DateProvider, FixedDateProvider, SystemDateProvider};
