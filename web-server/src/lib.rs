//! Read-only HTTP surface for the campus map service
//!
//! Three query endpoints delegating straight to the repositories, plus a
//! health check. Responses are plain JSON arrays; cross-origin requests are
//! permitted from any origin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use campass::database::{CategoryRepository, LocationRepository};
use campass::models::{Category, Location};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryRepository,
    pub locations: LocationRepository,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/api/health", get(health_check))
        .route("/api/locations", get(get_all_locations))
        .route(
            "/api/locations/category/:category_id",
            get(get_locations_by_category),
        )
        .route("/api/categories", get(get_all_categories))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

// List all locations with their categories
async fn get_all_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, StatusCode> {
    match state.locations.find_all().await {
        Ok(locations) => Ok(Json(locations)),
        Err(e) => {
            warn!("Failed to list locations: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// List locations belonging to one category
async fn get_locations_by_category(
    Path(category_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, StatusCode> {
    match category_id.parse::<i64>() {
        Ok(id) => match state.locations.find_by_category_id(id).await {
            Ok(locations) => Ok(Json(locations)),
            Err(e) => {
                warn!("Failed to list locations for category {}: {:?}", id, e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

// List all categories
async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, StatusCode> {
    match state.categories.find_all().await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => {
            warn!("Failed to list categories: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
