use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_core::{AutocompleteOption, CabinType, RecentSearch};
use skyroute_offer::{SearchFormState, SearchSubmission};

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/search", post(submit_search))
        .route("/v1/search/options", get(search_options))
        .route("/v1/recent", get(list_recent))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub from: Option<AutocompleteOption>,
    pub to: Option<AutocompleteOption>,
    #[serde(default = "default_passenger_count")]
    pub passenger_count: u32,
    #[serde(default)]
    pub cabin: CabinType,
}

fn default_passenger_count() -> u32 { 1 }

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    /// Origin city code already picked on the form
    pub from: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub loading: bool,
    pub from_options: Vec<AutocompleteOption>,
    pub to_options: Vec<AutocompleteOption>,
    pub popular_routes: Vec<AutocompleteOption>,
}

async fn submit_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchSubmission>, AppError> {
    let dataset = state.dataset().await;
    // Held for the whole submission so concurrent searches do not drop history
    let mut recent = state.recent.write().await;

    let mut form = SearchFormState::new(dataset, recent.clone());
    form.set_from_and_to(req.from, req.to);
    form.set_passengers(req.passenger_count, req.cabin);

    let submission = form.submit().ok_or_else(|| {
        AppError::UnprocessableEntity("No flights between the selected cities".to_string())
    })?;
    *recent = form.into_recent();

    Ok(Json(submission))
}

async fn search_options(
    State(state): State<AppState>,
    Query(query): Query<OptionsQuery>,
) -> Json<SearchOptions> {
    let dataset = state.dataset().await;
    let recent = state.recent.read().await.clone();

    let mut form =
        SearchFormState::new(dataset, recent).with_popular_limit(state.search.popular_limit);
    if let Some(code) = query.from {
        let origin = form.cities().into_iter().find(|c| c.value == code);
        form.set_from(origin, true);
    }

    Json(SearchOptions {
        loading: form.loading(),
        from_options: form.from_options(),
        to_options: form.to_options(),
        popular_routes: form.popular_routes(),
    })
}

async fn list_recent(State(state): State<AppState>) -> Json<Vec<RecentSearch>> {
    Json(state.recent.read().await.entries().to_vec())
}
