//! dblite - Persistent Key-Value State Store
//!
//! A thin SQLite-backed store for string-keyed, string-valued records.
//! The host application owns the database file; this crate owns the
//! `state` table schema and the operations on it.

mod error;
mod schema;
mod state;
mod store;

pub use error::StoreError;
pub use state::State;
pub use store::StateStore;

pub type Result<T> = std::result::Result<T, StoreError>;
