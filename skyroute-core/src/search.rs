use serde::{Deserialize, Serialize};
use crate::flight::City;

/// A selectable city or route, as offered to the search form.
///
/// For cities `value` is the city code; for popular routes it is
/// `ORIGIN-DESTINATION`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recent: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<String>>,
}

impl AutocompleteOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Splits a route option value into its origin and destination codes.
    pub fn route_codes(&self) -> Option<(&str, &str)> {
        self.value.split_once('-')
    }
}

impl From<&City> for AutocompleteOption {
    fn from(city: &City) -> Self {
        AutocompleteOption::new(city.code.clone(), city.name.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    EcoFlyPrice,
    DepartureTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinType {
    #[default]
    Economy,
    Business,
    First,
}

/// Criteria handed from the search form to the flight list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Origin city code
    pub from: String,
    /// Destination city code
    pub to: String,
    #[serde(default = "default_passenger_count")]
    pub passenger_count: u32,
    #[serde(default)]
    pub cabin: CabinType,
}

fn default_passenger_count() -> u32 { 1 }

impl SearchCriteria {
    pub fn new(from: impl Into<String>, to: impl Into<String>, passenger_count: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            passenger_count,
            cabin: CabinType::default(),
        }
    }
}

/// A previously submitted origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub from: AutocompleteOption,
    pub to: AutocompleteOption,
}

impl RecentSearch {
    pub fn same_route(&self, other: &RecentSearch) -> bool {
        self.from.value == other.from.value && self.to.value == other.to.value
    }
}
