use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::ERR_VEHICLE_QUERY;
use crate::error::{AppError, Result};
use crate::routes::validation::parse_budget;
use crate::routes::DataResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VehicleSearchParams {
    pub budget: Option<String>,
}

/// List every vehicle priced at or below `budget`, with the seller's
/// display name and review level attached
///
/// GET /api/vehicles?budget=<int>
pub async fn search_vehicles(
    State(state): State<AppState>,
    params: std::result::Result<Query<VehicleSearchParams>, QueryRejection>,
) -> Result<Json<DataResponse>> {
    let Query(params) = params?;
    let budget = parse_budget(params.budget.as_deref()).inspect_err(|_| {
        tracing::warn!("Rejected vehicle search budget: {:?}", params.budget);
    })?;

    let vehicles = state
        .db
        .vehicles_within_budget(budget)
        .await
        .map_err(AppError::query(ERR_VEHICLE_QUERY))?;

    tracing::debug!("{} vehicles within budget {}", vehicles.len(), budget);

    Ok(Json(DataResponse::success(vehicles)))
}
