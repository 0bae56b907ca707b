// src/models/school.rs
// DOCUMENTATION: Core data structures for schools
// PURPOSE: Defines serialization/deserialization models for API and database

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::Validate;

/// Represents a stored school record
/// DOCUMENTATION: Maps directly to a row of the schools table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    /// Identifier assigned by the store on insert
    pub id: i64,

    /// School name
    pub name: String,

    /// Street address
    pub address: String,

    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,

    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
}

/// Raw body of POST /addSchool
/// DOCUMENTATION: Every field is optional here so that a missing field is
/// reported as such instead of as a JSON shape error. Coordinates are kept
/// as raw JSON so both `40.7` and `"40.7"` are accepted.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

/// Validated input for an insert
/// DOCUMENTATION: Only produced by SchoolService after parsing an
/// AddSchoolRequest; lengths and coordinate ranges are checked by validate()
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NewSchool {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Response body of POST /addSchool
#[derive(Debug, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: i64,
}

/// Query parameters of GET /listSchools
/// DOCUMENTATION: Kept as strings; parsing happens in the service so the
/// error can say which parameter was missing or malformed
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProximityQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Parsed reference point of a proximity listing
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct QueryPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

/// A school annotated with its distance from the query point
/// DOCUMENTATION: Transient, lives for one listing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolWithDistance {
    #[serde(flatten)]
    pub school: School,

    /// Great-circle distance in kilometers
    pub distance: f64,
}

/// Response body of GET /listSchools
/// DOCUMENTATION: Full nearest-first listing, no pagination
#[derive(Debug, Serialize, Deserialize)]
pub struct SchoolListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SchoolWithDistance>,
}

impl SchoolListResponse {
    pub fn new(data: Vec<SchoolWithDistance>) -> Self {
        SchoolListResponse {
            success: true,
            count: data.len(),
            data,
        }
    }
}
