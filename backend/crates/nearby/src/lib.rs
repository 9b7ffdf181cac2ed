//! Nearby Students Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Student entity, location matching, repository traits
//! - `application/` - Use cases
//! - `infra/` - Repository implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Lookup Model
//! - The roster is fixed at startup and never mutated
//! - Location matching is case-insensitive and otherwise exact
//! - Results keep roster order; no match yields an empty list

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::Student;
pub use error::{NearbyError, NearbyResult};
pub use infra::memory::InMemoryStudentRepository;
pub use presentation::router::{nearby_router, nearby_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
