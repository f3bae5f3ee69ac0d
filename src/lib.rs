//! Car Market Server Library
//!
//! HTTP backend for a vehicle marketplace: accounts, listings search,
//! saved cars and like/dislike preferences over a SQLite store.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, Db, MarketStore, SqliteStore, StoreError};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}
