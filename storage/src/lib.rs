//! Storage crate: SQLite persistence for giveaway users and contests.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, ContestRecord
//! - [`db`] – Database (pool + schema init, repository accessors)
//! - [`user_repo`] – UserRepository
//! - [`contest_repo`] – ContestRepository

mod contest_repo;
mod db;
mod error;
mod models;
mod user_repo;

#[cfg(test)]
mod user_repo_test;

pub use contest_repo::ContestRepository;
pub use db::Database;
pub use error::StorageError;
pub use models::{ContestRecord, UserRecord};
pub use user_repo::UserRepository;
