pub mod auth;
pub mod health;
pub mod preferences;
pub mod saved_cars;
pub mod validation;
pub mod vehicles;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::models::Listing;
use crate::AppState;

pub use auth::{create_account, login};
pub use health::health_check;
pub use preferences::{list_preferences, upsert_preference};
pub use saved_cars::{list_saved_cars, remove_saved_car, save_car};
pub use vehicles::search_vehicles;

/// `{ "message": ... }` body for endpoints that return no data
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": "success", "data": [...] }` body for listing endpoints
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub message: String,
    pub data: Vec<Listing>,
}

impl DataResponse {
    pub fn success(data: Vec<Listing>) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UsernameParams {
    pub username: Option<String>,
}

/// Build the application router
///
/// Unmatched paths fall through to the static assets in `public_dir`.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    let assets = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/login", post(login))
        .route("/api/create-account", post(create_account))
        .route("/api/vehicles", get(search_vehicles))
        .route("/api/save-car", post(save_car))
        .route("/api/remove-saved-car", post(remove_saved_car))
        .route("/api/saved-cars", get(list_saved_cars))
        .route("/api/preference", post(upsert_preference))
        .route("/api/preferences", get(list_preferences))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
