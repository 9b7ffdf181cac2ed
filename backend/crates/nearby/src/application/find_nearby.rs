//! Find Nearby Students Use Case

use crate::domain::entities::Student;
use crate::domain::repository::StudentRepository;
use crate::domain::value_objects::Location;
use crate::error::{NearbyError, NearbyResult};
use std::sync::Arc;

/// Find Nearby Students Use Case
pub struct FindNearbyStudentsUseCase<R>
where
    R: StudentRepository,
{
    student_repo: Arc<R>,
}

impl<R> FindNearbyStudentsUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(student_repo: Arc<R>) -> Self {
        Self { student_repo }
    }

    /// Students whose location matches `location` case-insensitively
    ///
    /// An empty string is a valid location and matches nothing on the
    /// seeded roster.
    pub async fn execute(&self, location: Option<String>) -> NearbyResult<Vec<Student>> {
        let location = location.map(Location::new).ok_or(NearbyError::MissingLocation)?;

        let students = self.student_repo.find_by_location(&location).await?;

        tracing::debug!(
            location = %location,
            matched = students.len(),
            "Nearby lookup completed"
        );

        Ok(students)
    }
}
