//! Repository Traits
//!
//! Interfaces for roster access. Implementation is in infrastructure layer.

use crate::domain::entities::Student;
use crate::domain::value_objects::Location;
use crate::error::NearbyResult;

/// Student repository trait
#[trait_variant::make(StudentRepository: Send)]
pub trait LocalStudentRepository {
    /// All students whose location matches, in roster order
    async fn find_by_location(&self, location: &Location) -> NearbyResult<Vec<Student>>;
}
