use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_core::{BrandCode, CabinSection, SearchCriteria, SortBy};
use skyroute_offer::{
    select_package, CabinSelectionSummary, ExpandedState, FareSelection, FlightListManager,
    ListingView,
};

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", post(list_flights))
        .route("/v1/fares/select", post(select_fare_handler))
        .route("/v1/cabin-selection", get(default_cabin_selection))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandToggle {
    pub flight_key: String,
    pub section: CabinSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightListRequest {
    pub criteria: Option<SearchCriteria>,
    #[serde(default)]
    pub promo_active: bool,
    #[serde(default)]
    pub sort_by: SortBy,
    /// Pointer returned by the previous response
    #[serde(default)]
    pub expanded: ExpandedState,
    pub toggle: Option<ExpandToggle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFareRequest {
    pub flight_key: String,
    pub section: CabinSection,
    pub brand_code: BrandCode,
    #[serde(default)]
    pub promo_active: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectFareResponse {
    pub selection: FareSelection,
    pub summary: CabinSelectionSummary,
}

async fn list_flights(
    State(state): State<AppState>,
    Json(req): Json<FlightListRequest>,
) -> Json<ListingView> {
    // Passenger count and cabin are display-only here
    let mut manager = FlightListManager::new(state.dataset().await, req.criteria);
    manager.set_sort_by(req.sort_by);
    manager.set_promo_code_active(req.promo_active);
    manager.set_expanded(req.expanded);
    if let Some(toggle) = req.toggle {
        manager.toggle_expand(&toggle.flight_key, toggle.section);
    }

    Json(manager.view())
}

async fn select_fare_handler(
    State(state): State<AppState>,
    Json(req): Json<SelectFareRequest>,
) -> Result<Json<SelectFareResponse>, AppError> {
    let dataset = state.dataset().await;
    let data = dataset
        .flights()
        .ok_or_else(|| AppError::NotFoundError("Flight data is not available".to_string()))?;

    let flight = data
        .flights
        .iter()
        .find(|f| f.key() == req.flight_key)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", req.flight_key)))?;
    let fare = flight
        .fare_categories
        .section(req.section)
        .iter()
        .find(|sub| sub.brand_code == req.brand_code)
        .ok_or_else(|| AppError::NotFoundError(format!("Fare not found: {}", req.brand_code)))?;

    let selection = select_package(flight, fare, req.promo_active)?;
    let summary = CabinSelectionSummary::from_handoff(Some(&selection), &state.cabin);

    Ok(Json(SelectFareResponse { selection, summary }))
}

async fn default_cabin_selection(State(state): State<AppState>) -> Json<CabinSelectionSummary> {
    Json(CabinSelectionSummary::from_handoff(None, &state.cabin))
}
