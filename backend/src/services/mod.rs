//! Business logic services
//!
//! Services coordinate the stores behind [`crate::repositories::Repositories`]
//! and raise domain errors where a rule is violated.

pub mod food;
pub mod profile;
pub mod user;

pub use food::FoodService;
pub use profile::ProfileService;
pub use user::UserService;
