// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod school_repository;

#[cfg(test)]
pub mod memory_store;

pub use school_repository::*;

#[cfg(test)]
pub use memory_store::InMemorySchoolStore;
