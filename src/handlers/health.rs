// src/handlers/health.rs
// DOCUMENTATION: Welcome and health check handlers
// PURPOSE: Simple endpoints to verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to School Management API"
    }))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "school-locator",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check));
}
