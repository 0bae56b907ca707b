// src/db/memory_store.rs
// DOCUMENTATION: In-memory SchoolStore for tests

use crate::errors::SchoolsError;
use crate::models::{NewSchool, School};
use async_trait::async_trait;
use std::sync::Mutex;

use super::SchoolStore;

#[derive(Default)]
pub struct InMemorySchoolStore {
    rows: Mutex<Vec<School>>,
    unavailable: bool,
}

impl InMemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every call fails like a lost connection
    pub fn unavailable() -> Self {
        InMemorySchoolStore {
            rows: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    /// Store pre-populated with rows in the given order
    pub fn with_schools(schools: Vec<School>) -> Self {
        InMemorySchoolStore {
            rows: Mutex::new(schools),
            unavailable: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), SchoolsError> {
        if self.unavailable {
            return Err(SchoolsError::DatabaseError("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SchoolStore for InMemorySchoolStore {
    async fn insert(&self, school: &NewSchool) -> Result<i64, SchoolsError> {
        self.check_available()?;

        let mut rows = self
            .rows
            .lock()
            .map_err(|e| SchoolsError::DatabaseError(e.to_string()))?;
        let id = rows.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        rows.push(School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<School>, SchoolsError> {
        self.check_available()?;

        let rows = self
            .rows
            .lock()
            .map_err(|e| SchoolsError::DatabaseError(e.to_string()))?;
        Ok(rows.clone())
    }
}
