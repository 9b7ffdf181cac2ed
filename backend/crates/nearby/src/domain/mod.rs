//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Student)
//! - Domain value objects (Location)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
