// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Environment settings and the database pool they describe

pub mod db;
pub mod env;

pub use db::init_db_pool;
pub use env::Config;
