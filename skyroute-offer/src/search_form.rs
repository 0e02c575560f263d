use serde::{Deserialize, Serialize};
use skyroute_catalog::{available_destinations, is_valid_route, top_routes, unique_cities, POPULAR_ROUTE_LIMIT};
use skyroute_core::{AutocompleteOption, CabinType, RecentSearch};
use skyroute_store::{DatasetState, RecentSearches};
use tracing::{debug, info};

use crate::models::SearchSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityField {
    From,
    To,
}

/// Origin, destination and passenger selection on the search form.
///
/// Option lists are derived from the dataset and the recent-search history;
/// a destination that stops being offered for the current origin is cleared.
#[derive(Debug, Clone)]
pub struct SearchFormState {
    dataset: DatasetState,
    recent: RecentSearches,
    from: Option<AutocompleteOption>,
    to: Option<AutocompleteOption>,
    passenger_count: u32,
    cabin: CabinType,
    popular_limit: usize,
}

impl SearchFormState {
    pub fn new(dataset: DatasetState, recent: RecentSearches) -> Self {
        Self {
            dataset,
            recent,
            from: None,
            to: None,
            passenger_count: 1,
            cabin: CabinType::default(),
            popular_limit: POPULAR_ROUTE_LIMIT,
        }
    }

    pub fn with_popular_limit(mut self, limit: usize) -> Self {
        self.popular_limit = limit;
        self
    }

    pub fn set_dataset(&mut self, dataset: DatasetState) {
        self.dataset = dataset;
        self.reconcile_to();
    }

    pub fn loading(&self) -> bool {
        self.dataset.is_loading()
    }

    pub fn from(&self) -> Option<&AutocompleteOption> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&AutocompleteOption> {
        self.to.as_ref()
    }

    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    pub fn cabin(&self) -> CabinType {
        self.cabin
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn into_recent(self) -> RecentSearches {
        self.recent
    }

    pub fn cities(&self) -> Vec<AutocompleteOption> {
        self.dataset.flights().map(unique_cities).unwrap_or_default()
    }

    pub fn available_destinations(&self) -> Vec<AutocompleteOption> {
        match (self.dataset.flights(), &self.from) {
            (Some(data), Some(from)) => available_destinations(data, &from.value),
            _ => Vec::new(),
        }
    }

    /// Recent origins first, then every known city not already listed.
    pub fn from_options(&self) -> Vec<AutocompleteOption> {
        let recent = self
            .recent
            .entries()
            .iter()
            .map(|r| as_recent(&r.from))
            .collect();
        merge_options(recent, self.cities())
    }

    /// Recent destinations of the selected origin first, then the rest of
    /// its destinations.
    pub fn to_options(&self) -> Vec<AutocompleteOption> {
        let recent = match &self.from {
            Some(from) => self
                .recent
                .entries()
                .iter()
                .filter(|r| r.from.value == from.value)
                .map(|r| as_recent(&r.to))
                .collect(),
            None => Vec::new(),
        };
        merge_options(recent, self.available_destinations())
    }

    pub fn popular_routes(&self) -> Vec<AutocompleteOption> {
        self.dataset
            .flights()
            .map(|data| top_routes(data, self.popular_limit))
            .unwrap_or_default()
    }

    pub fn set_from(&mut self, city: Option<AutocompleteOption>, reset_to: bool) {
        self.from = city;
        if reset_to {
            self.to = None;
        }
        self.reconcile_to();
    }

    pub fn set_to(&mut self, city: Option<AutocompleteOption>) {
        self.to = city;
        self.reconcile_to();
    }

    pub fn set_from_and_to(&mut self, from: Option<AutocompleteOption>, to: Option<AutocompleteOption>) {
        self.from = from;
        self.to = to;
        self.reconcile_to();
    }

    /// Applies a pick from either autocomplete. A route option (`IST-ESB`)
    /// fills both fields when both cities are known; anything else sets the
    /// field it was picked in.
    pub fn select_city(&mut self, city: Option<AutocompleteOption>, field: CityField) {
        let Some(city) = city else {
            return;
        };

        if let Some((from_code, to_code)) = city.route_codes() {
            let cities = self.cities();
            let from = cities.iter().find(|c| c.value == from_code);
            let to = cities.iter().find(|c| c.value == to_code);
            if let (Some(from), Some(to)) = (from, to) {
                let (from, to) = (from.clone(), to.clone());
                self.set_from_and_to(Some(from), Some(to));
                return;
            }
        }

        match field {
            CityField::From => self.set_from(Some(city), true),
            CityField::To => self.set_to(Some(city)),
        }
    }

    pub fn set_passengers(&mut self, count: u32, cabin: CabinType) {
        self.passenger_count = count.max(1);
        self.cabin = cabin;
    }

    /// Submits the form. Only a route with at least one flight goes through;
    /// it is recorded in the recent searches and turned into list criteria.
    pub fn submit(&mut self) -> Option<SearchSubmission> {
        let data = self.dataset.flights()?;
        if !is_valid_route(data, self.from.as_ref(), self.to.as_ref()) {
            debug!("Search rejected: no flights between the selected cities");
            return None;
        }

        let (from, to) = (self.from.clone()?, self.to.clone()?);
        let submission = SearchSubmission {
            from: from.value.clone(),
            to: to.value.clone(),
            passenger_count: self.passenger_count,
            cabin: self.cabin,
        };
        info!(
            "Search submitted: {} -> {} for {} passenger(s)",
            submission.from, submission.to, submission.passenger_count
        );

        self.recent.add(RecentSearch {
            from: AutocompleteOption::new(from.value, from.label),
            to: AutocompleteOption::new(to.value, to.label),
        });

        Some(submission)
    }

    fn reconcile_to(&mut self) {
        let offered = match &self.to {
            Some(to) => self.to_options().iter().any(|o| o.value == to.value),
            None => return,
        };
        if !offered {
            self.to = None;
        }
    }
}

fn as_recent(option: &AutocompleteOption) -> AutocompleteOption {
    AutocompleteOption {
        recent: true,
        ..option.clone()
    }
}

fn merge_options(recent: Vec<AutocompleteOption>, all: Vec<AutocompleteOption>) -> Vec<AutocompleteOption> {
    let mut merged = recent;
    let rest: Vec<AutocompleteOption> = all
        .into_iter()
        .filter(|o| !merged.iter().any(|r| r.value == o.value))
        .collect();
    merged.extend(rest);
    merged
}
