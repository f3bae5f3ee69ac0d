pub mod pool;
pub mod rows;
pub mod sqlite;

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{LikesOrDislikes, Listing, User, VehicleId};

pub use pool::create_pool;
pub use sqlite::SqliteStore;

/// Storage handle type (Arc-wrapped for sharing across handlers)
pub type Db = Arc<dyn MarketStore>;

/// Storage failure, classified so handlers never inspect driver text
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Marketplace storage client
///
/// Every operation maps onto exactly one SQL statement; atomicity is
/// whatever the backend guarantees for a single statement.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Look up the user whose username and password both match exactly
    async fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<User>>;

    /// Insert a user with `displayName = username` and the default review level
    async fn create_user(&self, username: &str, password: &str) -> StoreResult<()>;

    /// Vehicles priced at or below `budget`, joined with the seller's
    /// display name and review level
    async fn vehicles_within_budget(&self, budget: i64) -> StoreResult<Vec<Listing>>;

    async fn save_car(&self, username: &str, vehicle_id: VehicleId) -> StoreResult<()>;

    /// Returns the number of rows deleted
    async fn remove_saved_car(&self, username: &str, vehicle_id: VehicleId) -> StoreResult<u64>;

    async fn saved_cars(&self, username: &str) -> StoreResult<Vec<Listing>>;

    /// Insert or overwrite the preference for `(username, vehicle_id)`
    async fn upsert_preference(
        &self,
        username: &str,
        vehicle_id: VehicleId,
        value: LikesOrDislikes,
    ) -> StoreResult<()>;

    /// Vehicles the user has an opinion on, each carrying `likesOrDislikes`
    async fn preferences(&self, username: &str) -> StoreResult<Vec<Listing>>;

    async fn ping(&self) -> StoreResult<()>;

    async fn close(&self);
}

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
