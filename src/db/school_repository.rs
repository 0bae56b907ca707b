// src/db/school_repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Abstract school persistence from business logic

use crate::errors::SchoolsError;
use crate::models::{NewSchool, School};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence collaborator for school records
/// DOCUMENTATION: Services only see this trait. Implementations must
/// insert exactly one row per call and return records from fetch_all
/// in a stable storage order.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Persist a validated school and return its new id
    async fn insert(&self, school: &NewSchool) -> Result<i64, SchoolsError>;

    /// Read every stored school
    async fn fetch_all(&self) -> Result<Vec<School>, SchoolsError>;
}

/// PgSchoolStore: SchoolStore over the schools table
/// DOCUMENTATION: Owns a clone of the bounded pool built in config::init_db_pool
pub struct PgSchoolStore {
    pool: PgPool,
}

impl PgSchoolStore {
    pub fn new(pool: PgPool) -> Self {
        PgSchoolStore { pool }
    }
}

#[async_trait]
impl SchoolStore for PgSchoolStore {
    async fn insert(&self, school: &NewSchool) -> Result<i64, SchoolsError> {
        let inserted: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id::BIGINT
            "#,
        )
        .bind(&school.name) // $1
        .bind(&school.address) // $2
        .bind(school.latitude) // $3
        .bind(school.longitude) // $4
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to insert school {}: {}", school.name, e);
            SchoolsError::from(e)
        })?;

        log::info!("Created school with id: {}", inserted.0);
        Ok(inserted.0)
    }

    async fn fetch_all(&self) -> Result<Vec<School>, SchoolsError> {
        // Casts keep decoding independent of the exact column types
        let schools = sqlx::query_as::<_, School>(
            r#"
            SELECT
                id::BIGINT AS id,
                name,
                address,
                latitude::DOUBLE PRECISION AS latitude,
                longitude::DOUBLE PRECISION AS longitude
            FROM schools
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch schools: {}", e);
            SchoolsError::from(e)
        })?;

        log::debug!("Fetched {} schools", schools.len());
        Ok(schools)
    }
}
