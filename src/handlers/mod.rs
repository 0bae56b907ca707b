// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod schools;

pub use health::config as health_config;
pub use schools::config as schools_config;
