use serde::{Deserialize, Serialize};
use skyroute_catalog::{actual_eco_fly_price, business_price, fare_price, lowest_economy_price};
use skyroute_core::{
    BrandCode, CabinSection, CabinType, FareStatus, FareSubcategory, Flight, SortBy,
};
use skyroute_store::app_config::CabinConfig;

/// The one expanded fare section across the whole list. Both fields are
/// `None` when nothing is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedState {
    pub flight_key: Option<String>,
    pub section: Option<CabinSection>,
}

impl ExpandedState {
    pub fn is_expanded(&self, flight_key: &str, section: CabinSection) -> bool {
        self.flight_key.as_deref() == Some(flight_key) && self.section == Some(section)
    }

    /// Expanded section of `flight_key`, if that flight is the expanded one.
    pub fn section_for(&self, flight_key: &str) -> Option<CabinSection> {
        if self.flight_key.as_deref() == Some(flight_key) {
            self.section
        } else {
            None
        }
    }
}

/// Handoff to the cabin-selection step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSelection {
    pub flight_details: Flight,
    pub selected_fare: FareSubcategory,
    pub status: FareStatus,
}

/// What the cabin-selection step shows for a handoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinSelectionSummary {
    pub status: FareStatus,
    pub amount: f64,
    pub currency: String,
}

impl CabinSelectionSummary {
    /// Without a handoff (direct navigation) the configured defaults are
    /// shown with an available status.
    pub fn from_handoff(handoff: Option<&FareSelection>, defaults: &CabinConfig) -> Self {
        let mut summary = Self {
            status: FareStatus::Available,
            amount: defaults.default_amount,
            currency: defaults.default_currency.clone(),
        };

        if let Some(handoff) = handoff {
            summary.status = handoff.status;
            summary.amount = handoff.selected_fare.price.amount;
            if !handoff.selected_fare.price.currency.is_empty() {
                summary.currency = handoff.selected_fare.price.currency.clone();
            }
        }

        summary
    }
}

/// A fare offer as rendered inside an expanded section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarePackage {
    pub brand_code: BrandCode,
    pub price: Option<f64>,
    pub currency: String,
    pub status: FareStatus,
    pub rights: Vec<String>,
    pub selectable: bool,
}

impl FarePackage {
    /// While a promo code is active only `ecoFly` fares can be picked, and
    /// unavailable fares never can.
    pub fn new(fare: &FareSubcategory, promo_code_active: bool) -> Self {
        let disabled_by_promo = promo_code_active && !fare.brand_code.is_eco_fly();
        let selectable = !disabled_by_promo && fare.status == FareStatus::Available;

        Self {
            brand_code: fare.brand_code.clone(),
            price: fare_price(Some(fare), promo_code_active),
            currency: fare.price.currency.clone(),
            status: fare.status,
            rights: fare.rights.clone(),
            selectable,
        }
    }
}

/// One row of the flight list with its precomputed prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary {
    pub key: String,
    pub flight: Flight,
    pub lowest_economy_price: Option<f64>,
    pub business_price: Option<f64>,
    pub eco_fly_price: Option<f64>,
    pub expanded_section: Option<CabinSection>,
    /// Fare offers of the expanded section; empty when collapsed
    pub packages: Vec<FarePackage>,
}

impl FlightSummary {
    pub fn new(flight: &Flight, promo_code_active: bool, expanded: &ExpandedState) -> Self {
        let key = flight.key();
        let expanded_section = expanded.section_for(&key);
        let packages = expanded_section
            .map(|section| {
                flight
                    .fare_categories
                    .section(section)
                    .iter()
                    .map(|fare| FarePackage::new(fare, promo_code_active))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            key,
            flight: flight.clone(),
            lowest_economy_price: lowest_economy_price(flight, promo_code_active),
            business_price: business_price(flight),
            eco_fly_price: actual_eco_fly_price(flight, promo_code_active),
            expanded_section,
            packages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLabels {
    pub from_city_name: Option<String>,
    pub to_city_name: Option<String>,
    pub passenger_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightListView {
    pub header: HeaderLabels,
    pub sort_by: SortBy,
    pub promo_code_active: bool,
    pub expanded: ExpandedState,
    pub flights: Vec<FlightSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ListingView {
    Loading,
    /// No search criteria: send the user back to the search form.
    Redirect,
    Ready(FlightListView),
}

/// Criteria produced by a successful search form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSubmission {
    pub from: String,
    pub to: String,
    pub passenger_count: u32,
    pub cabin: CabinType,
}

impl From<SearchSubmission> for skyroute_core::SearchCriteria {
    fn from(submission: SearchSubmission) -> Self {
        Self {
            from: submission.from,
            to: submission.to,
            passenger_count: submission.passenger_count,
            cabin: submission.cabin,
        }
    }
}
