use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::constants::DEFAULT_REVIEW_LEVEL;
use crate::db::rows::row_to_listing;
use crate::db::{MarketStore, StoreResult};
use crate::models::{LikesOrDislikes, Listing, User, VehicleId};

/// `MarketStore` backed by a SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_listings<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    ) -> StoreResult<Vec<Listing>> {
        let rows = query.fetch_all(&self.pool).await?;
        let listings = rows
            .iter()
            .map(row_to_listing)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(listings)
    }
}

#[async_trait]
impl MarketStore for SqliteStore {
    async fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password, displayName, reviewLevel FROM user WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, username: &str, password: &str) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO user (username, password, displayName, reviewLevel) VALUES (?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password)
        .bind(username)
        .bind(DEFAULT_REVIEW_LEVEL)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn vehicles_within_budget(&self, budget: i64) -> StoreResult<Vec<Listing>> {
        self.fetch_listings(
            sqlx::query(
                r#"
                SELECT vehicle.*, user.displayName, user.reviewLevel
                FROM vehicle
                JOIN user ON vehicle.username = user.username
                WHERE vehicle.price <= ?
                "#,
            )
            .bind(budget),
        )
        .await
    }

    async fn save_car(&self, username: &str, vehicle_id: VehicleId) -> StoreResult<()> {
        sqlx::query("INSERT INTO saved_cars (username, vehicleID) VALUES (?, ?)")
            .bind(username)
            .bind(vehicle_id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn remove_saved_car(&self, username: &str, vehicle_id: VehicleId) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM saved_cars WHERE username = ? AND vehicleID = ?")
            .bind(username)
            .bind(vehicle_id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn saved_cars(&self, username: &str) -> StoreResult<Vec<Listing>> {
        self.fetch_listings(
            sqlx::query(
                r#"
                SELECT vehicle.*
                FROM saved_cars
                JOIN vehicle ON saved_cars.vehicleID = vehicle.vehicleID
                WHERE saved_cars.username = ?
                "#,
            )
            .bind(username.to_string()),
        )
        .await
    }

    async fn upsert_preference(
        &self,
        username: &str,
        vehicle_id: VehicleId,
        value: LikesOrDislikes,
    ) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO preference (username, vehicleID, likesOrDislikes)
            VALUES (?, ?, ?)
            ON CONFLICT(username, vehicleID)
            DO UPDATE SET likesOrDislikes = excluded.likesOrDislikes
            "#,
        )
        .bind(username)
        .bind(vehicle_id.0)
        .bind(value.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn preferences(&self, username: &str) -> StoreResult<Vec<Listing>> {
        self.fetch_listings(
            sqlx::query(
                r#"
                SELECT vehicle.*, preference.likesOrDislikes
                FROM preference
                JOIN vehicle ON preference.vehicleID = vehicle.vehicleID
                WHERE preference.username = ?
                "#,
            )
            .bind(username.to_string()),
        )
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
