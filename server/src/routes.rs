use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, Request},
    middleware::{from_fn, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use trail_guardian_lib::trail::{NewTrail, Trail};

use crate::{api_error::ApiError, server_state::ServerState};

pub fn router(state: Arc<ServerState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/trails/", get(list_trails).post(create_trail))
        .route("/api/v1/trails/{trail_id}", get(get_trail))
        .with_state(state)
        .layer(cors)
        .layer(from_fn(log_request))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;
    tracing::debug!("{} {} -> {}", method, path, response.status());

    response
}

pub async fn root(State(state): State<Arc<ServerState>>) -> Json<Value> {
    Json(json!({
        "name": state.config.app_name,
        "version": state.config.app_version,
        "status": "operational",
    }))
}

pub async fn health(State(state): State<Arc<ServerState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": state.config.app_version,
    }))
}

pub async fn list_trails(State(state): State<Arc<ServerState>>) -> Json<Vec<Trail>> {
    Json(state.trails.list().await)
}

pub async fn get_trail(
    State(state): State<Arc<ServerState>>,
    Path(trail_id): Path<i64>,
) -> Result<Json<Trail>, ApiError> {
    match state.trails.get(trail_id).await {
        Some(trail) => Ok(Json(trail)),
        None => {
            tracing::debug!("Trail {} not found", trail_id);
            Err(ApiError::TrailNotFound)
        }
    }
}

pub async fn create_trail(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(new_trail), _): WithRejection<Json<NewTrail>, ApiError>,
) -> Result<Json<Trail>, ApiError> {
    let trail = state.trails.insert(new_trail).await.inspect_err(|err| {
        tracing::warn!("Rejected trail: {err}");
    })?;

    tracing::info!("Created trail {} ({})", trail.id, trail.name);
    Ok(Json(trail))
}
