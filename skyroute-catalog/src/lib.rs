pub mod pricing;
pub mod fares;
pub mod routes;

pub use pricing::fare_price;
pub use fares::{actual_eco_fly_price, business_price, lowest_economy_price};
pub use routes::{
    available_destinations, is_valid_route, popular_routes, route_info, top_routes,
    unique_cities, RouteInfo, POPULAR_ROUTE_LIMIT,
};
