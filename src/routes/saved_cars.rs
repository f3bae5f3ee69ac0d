use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::constants::{
    ERR_CAR_ALREADY_SAVED, ERR_DATABASE, ERR_LIST_SAVED_CARS, ERR_MISSING_SAVE_FIELDS,
    ERR_MISSING_USERNAME, ERR_REMOVE_SAVED_CAR, ERR_SAVED_CAR_NOT_FOUND,
};
use crate::db::StoreError;
use crate::error::{AppError, Result};
use crate::models::VehicleId;
use crate::routes::validation::require;
use crate::routes::{DataResponse, MessageResponse, UsernameParams};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SavedCarRequest {
    pub username: Option<String>,
    #[serde(rename = "vehicleID")]
    pub vehicle_id: Option<VehicleId>,
}

impl SavedCarRequest {
    fn into_parts(self) -> Result<(String, VehicleId)> {
        let username = require(self.username, ERR_MISSING_SAVE_FIELDS)?;
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| AppError::InvalidInput(ERR_MISSING_SAVE_FIELDS.to_string()))?;
        Ok((username, vehicle_id))
    }
}

/// Bookmark a vehicle for a user
///
/// Saving the same vehicle twice is rejected with 400. Unknown users or
/// vehicles fail on the foreign keys and surface as 500.
pub async fn save_car(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SavedCarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    let (username, vehicle_id) = payload.into_parts()?;

    state
        .db
        .save_car(&username, vehicle_id)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation(_) => AppError::Conflict(ERR_CAR_ALREADY_SAVED),
            other => AppError::query(ERR_DATABASE)(other),
        })?;

    tracing::info!("{} saved vehicle {}", username, vehicle_id.0);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Car saved successfully")),
    ))
}

/// Remove a bookmark; 404 when nothing was saved under that pair
pub async fn remove_saved_car(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SavedCarRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let (username, vehicle_id) = payload.into_parts()?;

    let removed = state
        .db
        .remove_saved_car(&username, vehicle_id)
        .await
        .map_err(AppError::query(ERR_REMOVE_SAVED_CAR))?;

    if removed == 0 {
        return Err(AppError::NotFound(ERR_SAVED_CAR_NOT_FOUND));
    }

    tracing::info!("{} removed saved vehicle {}", username, vehicle_id.0);

    Ok(Json(MessageResponse::new("Car removed successfully")))
}

/// GET /api/saved-cars?username=<string>
pub async fn list_saved_cars(
    State(state): State<AppState>,
    params: std::result::Result<Query<UsernameParams>, QueryRejection>,
) -> Result<Json<DataResponse>> {
    let Query(params) = params?;
    let username = require(params.username, ERR_MISSING_USERNAME)?;

    tracing::debug!("Saved cars request for {}", username);

    let cars = state
        .db
        .saved_cars(&username)
        .await
        .map_err(AppError::query(ERR_LIST_SAVED_CARS))?;

    Ok(Json(DataResponse::success(cars)))
}
