//! Domain Entities

use crate::domain::value_objects::Location;

/// A student on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub location: String,
}

impl Student {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Whether this student is located at `location`
    pub fn is_at(&self, location: &Location) -> bool {
        location.matches(&self.location)
    }
}
