//! Storage layer for lineup drafts
//!
//! The engine never persists anything itself; this SQLite repository is what
//! the CLI uses to keep drafts between runs.
//! - `models`: Listing rows
//! - `schema`: Database connection and schema management
//! - `queries`: Lineup CRUD operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::LineupDatabase;
