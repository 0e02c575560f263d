use serde::Serialize;
use skyroute_core::{AutocompleteOption, City, Flight, FlightsData};
use std::collections::HashMap;

/// Number of routes suggested on the search form.
pub const POPULAR_ROUTE_LIMIT: usize = 5;

/// Aggregate of all flights sharing an origin/destination city pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub from: City,
    pub to: City,
    pub flight_count: usize,
    /// Minimum over each flight's first economy fare amount
    pub min_price: Option<f64>,
    /// Departure display strings in encounter order, duplicates kept
    pub popular_times: Vec<String>,
}

/// Every city that appears as an origin or a destination, in first
/// occurrence order (origins before destinations). A repeated code keeps its
/// first position but takes the last label seen.
pub fn unique_cities(data: &FlightsData) -> Vec<AutocompleteOption> {
    let cities = data
        .flights
        .iter()
        .map(|f| &f.origin_airport.city)
        .chain(data.flights.iter().map(|f| &f.destination_airport.city));
    dedup_cities(cities, true)
}

/// Distinct destination cities reachable from `origin_code`.
pub fn available_destinations(data: &FlightsData, origin_code: &str) -> Vec<AutocompleteOption> {
    let cities = data
        .flights
        .iter()
        .filter(|f| f.origin_airport.city.code == origin_code)
        .map(|f| &f.destination_airport.city);
    dedup_cities(cities, false)
}

fn dedup_cities<'a>(cities: impl Iterator<Item = &'a City>, last_label_wins: bool) -> Vec<AutocompleteOption> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut options: Vec<AutocompleteOption> = Vec::new();

    for city in cities {
        match positions.get(city.code.as_str()) {
            Some(&idx) => {
                if last_label_wins {
                    options[idx].label = city.name.clone();
                }
            }
            None => {
                positions.insert(city.code.as_str(), options.len());
                options.push(AutocompleteOption::from(city));
            }
        }
    }

    options
}

/// Groups flights by (origin city, destination city) in encounter order.
///
/// The route price is the cheapest *first* economy fare across the group,
/// unlike `lowest_economy_price`. Flights with no economy fare still count
/// towards the route but do not affect its price.
pub fn route_info(flights: &[Flight]) -> Vec<RouteInfo> {
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut routes: Vec<RouteInfo> = Vec::new();

    for flight in flights {
        let from = &flight.origin_airport.city;
        let to = &flight.destination_airport.city;
        let key = (from.code.clone(), to.code.clone());

        let idx = *positions.entry(key).or_insert_with(|| {
            routes.push(RouteInfo {
                from: from.clone(),
                to: to.clone(),
                flight_count: 0,
                min_price: None,
                popular_times: Vec::new(),
            });
            routes.len() - 1
        });

        let route = &mut routes[idx];
        route.flight_count += 1;

        if let Some(first) = flight.economy().first() {
            let amount = first.price.amount;
            if route.min_price.map_or(true, |min| amount < min) {
                route.min_price = Some(amount);
            }
        }

        route.popular_times.push(flight.departure_date_time_display.clone());
    }

    routes
}

/// The busiest routes, as ready-to-display options.
pub fn popular_routes(data: &FlightsData) -> Vec<AutocompleteOption> {
    top_routes(data, POPULAR_ROUTE_LIMIT)
}

/// Routes ranked by descending flight count; ties keep encounter order.
pub fn top_routes(data: &FlightsData, limit: usize) -> Vec<AutocompleteOption> {
    let mut routes = route_info(&data.flights);
    routes.sort_by(|a, b| b.flight_count.cmp(&a.flight_count));

    routes
        .into_iter()
        .take(limit)
        .map(|route| AutocompleteOption {
            value: format!("{}-{}", route.from.code, route.to.code),
            label: format!("{} → {}", route.from.name, route.to.name),
            recent: false,
            popular: true,
            price: route.min_price,
            times: Some(route.popular_times),
        })
        .collect()
}

/// Whether at least one flight serves `from` → `to`. An unselected endpoint
/// is never valid.
pub fn is_valid_route(
    data: &FlightsData,
    from: Option<&AutocompleteOption>,
    to: Option<&AutocompleteOption>,
) -> bool {
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };
    data.flights.iter().any(|f| f.serves(&from.value, &to.value))
}
