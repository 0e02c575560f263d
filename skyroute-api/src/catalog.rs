use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_catalog::{available_destinations, is_valid_route, top_routes, unique_cities};
use skyroute_core::AutocompleteOption;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/cities", get(list_cities))
        .route("/v1/destinations", get(list_destinations))
        .route("/v1/routes/popular", get(list_popular_routes))
        .route("/v1/routes/validate", post(validate_route))
}

#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub origin: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: Option<AutocompleteOption>,
    pub to: Option<AutocompleteOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteValidity {
    pub valid: bool,
}

async fn list_cities(State(state): State<AppState>) -> Json<Vec<AutocompleteOption>> {
    let dataset = state.dataset().await;
    Json(dataset.flights().map(unique_cities).unwrap_or_default())
}

async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> Json<Vec<AutocompleteOption>> {
    let dataset = state.dataset().await;
    Json(
        dataset
            .flights()
            .map(|data| available_destinations(data, &query.origin))
            .unwrap_or_default(),
    )
}

async fn list_popular_routes(State(state): State<AppState>) -> Json<Vec<AutocompleteOption>> {
    let dataset = state.dataset().await;
    Json(
        dataset
            .flights()
            .map(|data| top_routes(data, state.search.popular_limit))
            .unwrap_or_default(),
    )
}

async fn validate_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Json<RouteValidity> {
    let dataset = state.dataset().await;
    let valid = dataset
        .flights()
        .is_some_and(|data| is_valid_route(data, req.from.as_ref(), req.to.as_ref()));
    Json(RouteValidity { valid })
}
