//! Models module for the campus map service
//!
//! This module contains the data structures that represent campus location
//! categories and locations as stored in the database and served over the
//! API.

pub mod campus_models;

// Re-export commonly used types for convenience
pub use campus_models::{Category, Location, LocationRow};
