//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Student;
use serde::{Deserialize, Serialize};

/// Query for GET /nearby
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyQuery {
    #[serde(default)]
    pub location: Option<String>,
}

/// Element of the GET /nearby response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentResponse {
    pub name: String,
    pub location: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            location: student.location,
        }
    }
}
