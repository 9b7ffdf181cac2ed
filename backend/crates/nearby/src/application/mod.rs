//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod find_nearby;
