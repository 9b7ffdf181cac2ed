//! In-memory roster

use crate::domain::entities::Student;
use crate::domain::repository::StudentRepository;
use crate::domain::value_objects::Location;
use crate::error::NearbyResult;
use std::sync::Arc;

/// Read-only roster held in memory for the lifetime of the process
#[derive(Debug, Clone)]
pub struct InMemoryStudentRepository {
    students: Arc<[Student]>,
}

impl InMemoryStudentRepository {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students: students.into(),
        }
    }

    /// The fixed roster served by the API
    pub fn seeded() -> Self {
        Self::new(vec![
            Student::new("Alice", "New York"),
            Student::new("Bob", "Los Angeles"),
            Student::new("Charlie", "New York"),
        ])
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_location(&self, location: &Location) -> NearbyResult<Vec<Student>> {
        Ok(self
            .students
            .iter()
            .filter(|student| student.is_at(location))
            .cloned()
            .collect())
    }
}
