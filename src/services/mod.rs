// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geo;
pub mod school_service;
pub mod validation;

pub use geo::*;
pub use school_service::*;
