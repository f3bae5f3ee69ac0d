use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::constants::{
    ERR_INVALID_PREFERENCE, ERR_LIST_PREFERENCES, ERR_MISSING_PREFERENCE_FIELDS,
    ERR_MISSING_USERNAME, ERR_UPDATE_PREFERENCE,
};
use crate::error::{AppError, Result};
use crate::models::{LikesOrDislikes, VehicleId};
use crate::routes::validation::require;
use crate::routes::{DataResponse, MessageResponse, UsernameParams};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    pub username: Option<String>,
    #[serde(rename = "vehicleID")]
    pub vehicle_id: Option<VehicleId>,
    pub likes_or_dislikes: Option<String>,
}

/// Record that a user likes or dislikes a vehicle
///
/// A later call for the same user and vehicle overwrites the earlier value.
pub async fn upsert_preference(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PreferenceRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;

    let missing = || AppError::InvalidInput(ERR_MISSING_PREFERENCE_FIELDS.to_string());
    let username = require(payload.username, ERR_MISSING_PREFERENCE_FIELDS)?;
    let vehicle_id = payload.vehicle_id.ok_or_else(missing)?;
    let raw_value = require(payload.likes_or_dislikes, ERR_MISSING_PREFERENCE_FIELDS)?;

    let value: LikesOrDislikes = raw_value.parse().map_err(|_| {
        tracing::warn!("Rejected likesOrDislikes value: {:?}", raw_value);
        AppError::InvalidInput(ERR_INVALID_PREFERENCE.to_string())
    })?;

    state
        .db
        .upsert_preference(&username, vehicle_id, value)
        .await
        .map_err(AppError::query(ERR_UPDATE_PREFERENCE))?;

    tracing::info!("{} {} vehicle {}", username, value, vehicle_id.0);

    Ok(Json(MessageResponse::new("Preference updated successfully")))
}

/// GET /api/preferences?username=<string>
pub async fn list_preferences(
    State(state): State<AppState>,
    params: std::result::Result<Query<UsernameParams>, QueryRejection>,
) -> Result<Json<DataResponse>> {
    let Query(params) = params?;
    let username = require(params.username, ERR_MISSING_USERNAME)?;

    let preferences = state
        .db
        .preferences(&username)
        .await
        .map_err(AppError::query(ERR_LIST_PREFERENCES))?;

    Ok(Json(DataResponse::success(preferences)))
}
