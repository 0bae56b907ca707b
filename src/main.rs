// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database store, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use db::{PgSchoolStore, SchoolStore};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting school-locator service...");
    log::info!("Environment: {}", config.environment);
    log::info!("Server Address: {}", config.bind_address());

    // 4. Initialize database connection pool and the store that owns it
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    let store: Arc<dyn SchoolStore> = Arc::new(PgSchoolStore::new(pool));
    let store = web::Data::from(store);

    // 5. Start HTTP server
    let server_addr = config.bind_address();

    HttpServer::new(move || {
        App::new()
            // Application state (school store)
            .app_data(store.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::schools_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
