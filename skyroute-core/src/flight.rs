use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Places
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub city: City,
    #[serde(default)]
    pub country: Country,
}

// ============================================================================
// Fares
// ============================================================================

/// Fare brand. Anything that is not one of the three economy brands is
/// treated as a business-tier (unbranded) offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrandCode {
    EcoFly,
    ExtraFly,
    PrimeFly,
    Other(String),
}

impl BrandCode {
    pub fn as_str(&self) -> &str {
        match self {
            BrandCode::EcoFly => "ecoFly",
            BrandCode::ExtraFly => "extraFly",
            BrandCode::PrimeFly => "primeFly",
            BrandCode::Other(code) => code,
        }
    }

    pub fn is_eco_fly(&self) -> bool {
        matches!(self, BrandCode::EcoFly)
    }

    /// True for brands outside the economy family.
    pub fn is_business(&self) -> bool {
        matches!(self, BrandCode::Other(_))
    }
}

impl Default for BrandCode {
    fn default() -> Self {
        BrandCode::Other(String::new())
    }
}

impl From<String> for BrandCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ecoFly" => BrandCode::EcoFly,
            "extraFly" => BrandCode::ExtraFly,
            "primeFly" => BrandCode::PrimeFly,
            _ => BrandCode::Other(code),
        }
    }
}

impl From<&str> for BrandCode {
    fn from(code: &str) -> Self {
        BrandCode::from(code.to_string())
    }
}

impl From<BrandCode> for String {
    fn from(brand: BrandCode) -> Self {
        match brand {
            BrandCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BrandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FareStatus {
    #[default]
    Available,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarePrice {
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSubcategory {
    #[serde(default)]
    pub brand_code: BrandCode,
    pub price: FarePrice,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub status: FareStatus,
    /// Benefit descriptions, in display order
    #[serde(default)]
    pub rights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareCategory {
    #[serde(default)]
    pub subcategories: Vec<FareSubcategory>,
}

/// Cabin section of a flight's fares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinSection {
    Economy,
    Business,
}

/// A missing category deserializes to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareCategories {
    #[serde(rename = "ECONOMY", default)]
    pub economy: FareCategory,
    #[serde(rename = "BUSINESS", default)]
    pub business: FareCategory,
}

impl FareCategories {
    pub fn section(&self, section: CabinSection) -> &[FareSubcategory] {
        match section {
            CabinSection::Economy => &self.economy.subcategories,
            CabinSection::Business => &self.business.subcategories,
        }
    }
}

// ============================================================================
// Flights
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default)]
    pub origin_airport: Airport,
    #[serde(default)]
    pub destination_airport: Airport,
    /// Locale-formatted display strings, not timestamps
    #[serde(default)]
    pub arrival_date_time_display: String,
    #[serde(default)]
    pub departure_date_time_display: String,
    #[serde(default)]
    pub flight_duration: String,
    #[serde(default)]
    pub fare_categories: FareCategories,
}

impl Flight {
    pub fn economy(&self) -> &[FareSubcategory] {
        self.fare_categories.section(CabinSection::Economy)
    }

    pub fn business(&self) -> &[FareSubcategory] {
        self.fare_categories.section(CabinSection::Business)
    }

    /// Exact city-code match on both ends of the route.
    pub fn serves(&self, origin_city: &str, destination_city: &str) -> bool {
        self.origin_airport.city.code == origin_city
            && self.destination_airport.city.code == destination_city
    }

    pub fn key(&self) -> String {
        generate_flight_key(self)
    }
}

/// Builds the `origin-destination-departure` key that addresses a flight in
/// expansion and selection state.
pub fn generate_flight_key(flight: &Flight) -> String {
    let origin = non_empty_or(&flight.origin_airport.code, "UNKNOWN");
    let destination = non_empty_or(&flight.destination_airport.code, "UNKNOWN");
    let departure = non_empty_or(&flight.departure_date_time_display, "NODATE");
    format!("{}-{}-{}", origin, destination, departure)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightsData {
    #[serde(default)]
    pub flights: Vec<Flight>,
}
