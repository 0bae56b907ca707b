// src/handlers/schools.rs
// DOCUMENTATION: HTTP handlers for school operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::SchoolStore;
use crate::errors::SchoolsError;
use crate::models::{AddSchoolRequest, AddSchoolResponse, ProximityQuery};
use crate::services::SchoolService;
use actix_web::{error, web, HttpResponse, Responder};

/// POST /addSchool
/// Validate and store a new school
pub async fn add_school(
    store: web::Data<dyn SchoolStore>,
    req: web::Json<AddSchoolRequest>,
) -> Result<impl Responder, SchoolsError> {
    let school_id = SchoolService::add_school(store.get_ref(), req.into_inner()).await?;

    Ok(HttpResponse::Created().json(AddSchoolResponse {
        success: true,
        message: "School added successfully".to_string(),
        school_id,
    }))
}

/// GET /listSchools?lat=..&lon=..
/// List all schools, nearest first
pub async fn list_schools(
    store: web::Data<dyn SchoolStore>,
    query: web::Query<ProximityQuery>,
) -> Result<impl Responder, SchoolsError> {
    let result =
        SchoolService::list_schools_by_proximity(store.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Malformed JSON bodies get the same error envelope as validation failures
fn json_error_handler(err: error::JsonPayloadError, _req: &actix_web::HttpRequest) -> error::Error {
    log::debug!("Rejected request body: {}", err);
    SchoolsError::InvalidBody(err.to_string()).into()
}

/// Undecodable query strings (e.g. a repeated `lat`) get the same envelope
fn query_error_handler(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> error::Error {
    log::debug!("Rejected query string: {}", err);
    SchoolsError::InvalidQuery(err.to_string()).into()
}

/// Configuration for school routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/addSchool", web::post().to(add_school))
        .route("/listSchools", web::get().to(list_schools));
}
