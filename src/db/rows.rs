use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::models::Listing;

/// Convert a result row into a JSON object keyed by column name
///
/// SQLite is dynamically typed, so each value is decoded by its runtime
/// storage class rather than the declared column type.
pub fn row_to_listing(row: &SqliteRow) -> Result<Listing, sqlx::Error> {
    let mut listing = Listing::new();

    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(index)?),
                // NaN and infinities have no JSON form
                "REAL" => Number::from_f64(row.try_get::<f64, _>(index)?)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
                _ => Value::from(row.try_get::<String, _>(index)?),
            }
        };

        listing.insert(column.name().to_string(), value);
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    async fn test_row_to_listing_maps_storage_classes() {
        let pool = create_pool("sqlite::memory:").await.unwrap();

        let row = sqlx::query(
            "SELECT 7 AS vehicleID, 'Civic' AS model, 12500.5 AS price, NULL AS color, x'0102' AS photo",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        let listing = row_to_listing(&row).unwrap();
        assert_eq!(listing["vehicleID"], 7);
        assert_eq!(listing["model"], "Civic");
        assert_eq!(listing["price"], 12500.5);
        assert!(listing["color"].is_null());
        assert_eq!(listing["photo"], serde_json::json!([1, 2]));

        let keys: Vec<&str> = listing.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
    }
}
