//! Campass - Campus Map Backend
//!
//! This crate provides the data layer for the campus map service: the
//! `Category` and `Location` entities, SQLite-backed repositories, schema
//! migration, and the startup seed routine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campass::database::DatabaseManager;
//! use campass::seed;
//!
//! # async fn run() -> Result<(), campass::error::StoreError> {
//! let db = DatabaseManager::with_default_config().await?;
//! db.run_migrations().await?;
//! seed::load_sample_data(&db.category_repository(), &db.location_repository()).await?;
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Entity models
pub mod models;

// Database integration
pub mod database;

// Startup seeding
pub mod seed;

pub use database::{DatabaseConfig, DatabaseManager};
pub use error::StoreError;
pub use models::{Category, Location};
