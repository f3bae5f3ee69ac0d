use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::constants::{ERR_MISSING_CREDENTIALS, ERR_USERNAME_TAKEN};
use crate::db::StoreError;
use crate::error::{AppError, Result};
use crate::routes::validation::require;
use crate::routes::MessageResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Verify a username/password pair
///
/// Unknown usernames and wrong passwords produce the same 401 body, so the
/// endpoint cannot be used to probe which accounts exist. No session or
/// token is issued.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let username = require(payload.username, ERR_MISSING_CREDENTIALS)?;
    let password = require(payload.password, ERR_MISSING_CREDENTIALS)?;

    match state
        .db
        .authenticate(&username, &password)
        .await
        .map_err(AppError::Database)?
    {
        Some(user) => {
            tracing::info!("User {} logged in", user.username);
            Ok(Json(MessageResponse::new("Login successful")))
        }
        None => {
            tracing::warn!("Failed login attempt for {}", username);
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Create an account
///
/// The display name starts out equal to the username and the review level
/// at zero. The password is stored as given.
pub async fn create_account(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    let username = require(payload.username, ERR_MISSING_CREDENTIALS)?;
    let password = require(payload.password, ERR_MISSING_CREDENTIALS)?;

    state
        .db
        .create_user(&username, &password)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation(_) => {
                tracing::info!("Account {} already exists", username);
                AppError::Conflict(ERR_USERNAME_TAKEN)
            }
            other => AppError::Database(other),
        })?;

    tracing::info!("New account created: {}", username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created successfully")),
    ))
}
