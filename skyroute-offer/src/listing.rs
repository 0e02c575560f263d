use skyroute_catalog::actual_eco_fly_price;
use skyroute_core::{
    CabinSection, CoreError, CoreResult, FareStatus, FareSubcategory, Flight, FlightsData,
    SearchCriteria, SortBy,
};
use skyroute_store::DatasetState;
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::models::{
    ExpandedState, FarePackage, FareSelection, FlightListView, FlightSummary, HeaderLabels,
    ListingView,
};

/// Flights serving exactly `from` → `to`, matched on city codes.
pub fn filter_flights(data: &FlightsData, from: &str, to: &str) -> Vec<Flight> {
    data.flights
        .iter()
        .filter(|f| f.serves(from, to))
        .cloned()
        .collect()
}

/// Returns a newly ordered copy of `flights`.
///
/// `EcoFlyPrice` orders by the eco-fly price ascending, with flights that
/// have no eco-fly fare after every priced flight; ties and unpriced pairs
/// keep their input order. `DepartureTime` compares the display strings
/// byte by byte, so "10:00" sorts before "9:00".
pub fn sort_flights(flights: &[Flight], sort_by: SortBy, promo_code_active: bool) -> Vec<Flight> {
    let mut sorted = flights.to_vec();

    match sort_by {
        SortBy::EcoFlyPrice => {
            sorted.sort_by(|a, b| {
                let price_a = actual_eco_fly_price(a, promo_code_active);
                let price_b = actual_eco_fly_price(b, promo_code_active);
                match (price_a, price_b) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                }
            });
        }
        SortBy::DepartureTime => {
            sorted.sort_by(|a, b| a.departure_date_time_display.cmp(&b.departure_date_time_display));
        }
    }

    sorted
}

/// Handoff for the cabin-selection step, carrying the fare's own status.
pub fn select_fare(flight: &Flight, fare: &FareSubcategory) -> FareSelection {
    info!("Fare selected: {} {} ({:?})", flight.key(), fare.brand_code, fare.status);
    FareSelection {
        flight_details: flight.clone(),
        selected_fare: fare.clone(),
        status: fare.status,
    }
}

/// Handoff for a fare picked from an expanded section. Fares that the
/// package list shows as disabled are refused.
pub fn select_package(
    flight: &Flight,
    fare: &FareSubcategory,
    promo_code_active: bool,
) -> CoreResult<FareSelection> {
    if !FarePackage::new(fare, promo_code_active).selectable {
        let reason = if fare.status != FareStatus::Available {
            "fare is not available"
        } else {
            "only ecoFly can be booked with a promo code"
        };
        debug!("Refused fare {} on {}: {}", fare.brand_code, flight.key(), reason);
        return Err(CoreError::FareNotSelectable {
            brand: fare.brand_code.to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(select_fare(flight, fare))
}

/// State behind the flight list: the dataset snapshot, the submitted
/// criteria and the user's list preferences. Derived lists are recomputed
/// eagerly whenever an input changes.
#[derive(Debug, Clone)]
pub struct FlightListManager {
    dataset: DatasetState,
    criteria: Option<SearchCriteria>,
    sort_by: SortBy,
    promo_code_active: bool,
    expanded: ExpandedState,
    filtered: Vec<Flight>,
    sorted: Vec<Flight>,
}

impl FlightListManager {
    pub fn new(dataset: DatasetState, criteria: Option<SearchCriteria>) -> Self {
        let mut manager = Self {
            dataset,
            criteria,
            sort_by: SortBy::default(),
            promo_code_active: false,
            expanded: ExpandedState::default(),
            filtered: Vec::new(),
            sorted: Vec::new(),
        };
        manager.refilter();
        manager
    }

    pub fn set_dataset(&mut self, dataset: DatasetState) {
        self.dataset = dataset;
        self.refilter();
    }

    pub fn set_criteria(&mut self, criteria: Option<SearchCriteria>) {
        self.criteria = criteria;
        self.refilter();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.resort();
    }

    pub fn set_promo_code_active(&mut self, active: bool) {
        self.promo_code_active = active;
        self.resort();
    }

    fn refilter(&mut self) {
        self.filtered = match (self.dataset.flights(), &self.criteria) {
            (Some(data), Some(criteria)) => filter_flights(data, &criteria.from, &criteria.to),
            _ => Vec::new(),
        };
        self.resort();
    }

    fn resort(&mut self) {
        self.sorted = sort_flights(&self.filtered, self.sort_by, self.promo_code_active);
    }

    pub fn is_loading(&self) -> bool {
        self.dataset.is_loading()
    }

    pub fn has_criteria(&self) -> bool {
        self.criteria.is_some()
    }

    /// The list must never be shown unfiltered: without criteria, once
    /// loading is over, the caller goes back to the search form.
    pub fn should_redirect(&self) -> bool {
        !self.has_criteria() && !self.is_loading()
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn promo_code_active(&self) -> bool {
        self.promo_code_active
    }

    pub fn expanded(&self) -> &ExpandedState {
        &self.expanded
    }

    pub fn filtered_flights(&self) -> &[Flight] {
        &self.filtered
    }

    pub fn sorted_flights(&self) -> &[Flight] {
        &self.sorted
    }

    pub fn set_expanded(&mut self, expanded: ExpandedState) {
        self.expanded = expanded;
    }

    /// Clicking the expanded section again collapses it; anything else
    /// moves the single expansion pointer there.
    pub fn toggle_expand(&mut self, flight_key: &str, section: CabinSection) {
        if self.expanded.is_expanded(flight_key, section) {
            self.expanded = ExpandedState::default();
        } else {
            self.expanded = ExpandedState {
                flight_key: Some(flight_key.to_string()),
                section: Some(section),
            };
        }
    }

    pub fn select_fare(&self, flight: &Flight, fare: &FareSubcategory) -> CoreResult<FareSelection> {
        select_package(flight, fare, self.promo_code_active)
    }

    /// City names for the list header. Names come from the first flight on
    /// the route; without one the raw criteria codes are used.
    pub fn header(&self) -> HeaderLabels {
        let Some(criteria) = &self.criteria else {
            return HeaderLabels {
                from_city_name: None,
                to_city_name: None,
                passenger_count: 1,
            };
        };

        let first_match = self
            .dataset
            .flights()
            .and_then(|data| data.flights.iter().find(|f| f.serves(&criteria.from, &criteria.to)));

        HeaderLabels {
            from_city_name: Some(name_or_code(
                first_match.map(|f| f.origin_airport.city.name.as_str()),
                &criteria.from,
            )),
            to_city_name: Some(name_or_code(
                first_match.map(|f| f.destination_airport.city.name.as_str()),
                &criteria.to,
            )),
            passenger_count: criteria.passenger_count,
        }
    }

    pub fn view(&self) -> ListingView {
        if self.is_loading() {
            return ListingView::Loading;
        }
        if self.should_redirect() {
            debug!("No search criteria, redirecting to search");
            return ListingView::Redirect;
        }

        ListingView::Ready(FlightListView {
            header: self.header(),
            sort_by: self.sort_by,
            promo_code_active: self.promo_code_active,
            expanded: self.expanded.clone(),
            flights: self
                .sorted
                .iter()
                .map(|f| FlightSummary::new(f, self.promo_code_active, &self.expanded))
                .collect(),
        })
    }
}

fn name_or_code(name: Option<&str>, code: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => code.to_string(),
    }
}
