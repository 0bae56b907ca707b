// src/services/school_service.rs
// DOCUMENTATION: Business logic for schools
// PURPOSE: Intermediary between handlers and the store: validation,
// distance computation and ordering

use crate::db::SchoolStore;
use crate::errors::SchoolsError;
use crate::models::{
    AddSchoolRequest, NewSchool, ProximityQuery, QueryPoint, School, SchoolListResponse,
    SchoolWithDistance,
};
use crate::services::validation::{
    parse_coordinate, require_json_coordinate, require_param, require_text,
};
use crate::services::{haversine_km, point};
use geo_types::Point;
use validator::Validate;

pub struct SchoolService;

impl SchoolService {
    /// Validate and persist a new school, returning its id
    /// DOCUMENTATION: Nothing is written unless every field validates
    pub async fn add_school(
        store: &dyn SchoolStore,
        req: AddSchoolRequest,
    ) -> Result<i64, SchoolsError> {
        let school = Self::parse_new_school(req)?;
        let id = store.insert(&school).await?;
        log::info!("Added school '{}' with id {}", school.name, id);
        Ok(id)
    }

    /// List every school ordered nearest-first from the query point
    /// DOCUMENTATION: Full scan of the store on each call, no pagination
    pub async fn list_schools_by_proximity(
        store: &dyn SchoolStore,
        query: ProximityQuery,
    ) -> Result<SchoolListResponse, SchoolsError> {
        let origin = Self::parse_query_point(&query)?;
        let schools = store.fetch_all().await?;
        let ranked = Self::rank_by_distance(origin, schools);

        log::debug!(
            "Ranked {} schools from ({}, {})",
            ranked.len(),
            origin.y(),
            origin.x()
        );
        Ok(SchoolListResponse::new(ranked))
    }

    /// Annotate each school with its distance and sort ascending
    /// Stable: schools at equal distance keep their fetch order
    pub fn rank_by_distance(origin: Point<f64>, schools: Vec<School>) -> Vec<SchoolWithDistance> {
        let mut ranked: Vec<SchoolWithDistance> = schools
            .into_iter()
            .map(|school| {
                let distance = haversine_km(origin, point(school.latitude, school.longitude));
                SchoolWithDistance { school, distance }
            })
            .collect();

        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    fn parse_new_school(req: AddSchoolRequest) -> Result<NewSchool, SchoolsError> {
        // Report every missing field at once
        let missing: Vec<&str> = [
            ("name", req.name.as_deref().map_or(true, |v| v.trim().is_empty())),
            ("address", req.address.as_deref().map_or(true, |v| v.trim().is_empty())),
            ("latitude", req.latitude.as_ref().map_or(true, |v| v.is_null())),
            ("longitude", req.longitude.as_ref().map_or(true, |v| v.is_null())),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(SchoolsError::MissingField(missing.join(", ")));
        }

        let school = NewSchool {
            name: require_text("name", req.name)?,
            address: require_text("address", req.address)?,
            latitude: require_json_coordinate("latitude", req.latitude.as_ref())?,
            longitude: require_json_coordinate("longitude", req.longitude.as_ref())?,
        };
        school.validate()?;
        Ok(school)
    }

    fn parse_query_point(query: &ProximityQuery) -> Result<Point<f64>, SchoolsError> {
        let lat = require_param("lat", query.lat.as_deref())?;
        let lon = require_param("lon", query.lon.as_deref())?;

        let origin = QueryPoint {
            lat: parse_coordinate("lat", lat)?,
            lon: parse_coordinate("lon", lon)?,
        };
        origin.validate()?;
        Ok(point(origin.lat, origin.lon))
    }
}
