use skyroute_core::Flight;
use crate::pricing::fare_price;

/// Lowest economy price of a flight.
///
/// The promo flag is forwarded per subcategory, and only for `ecoFly`
/// subcategories. Returns `None` when the flight has no economy fares.
pub fn lowest_economy_price(flight: &Flight, apply_promo: bool) -> Option<f64> {
    flight
        .economy()
        .iter()
        .filter_map(|sub| fare_price(Some(sub), apply_promo && sub.brand_code.is_eco_fly()))
        .fold(None, |min: Option<f64>, price| match min {
            Some(current) if current <= price => Some(current),
            _ => Some(price),
        })
}

/// Listed amount of the first business fare. Later business fares are
/// never compared.
pub fn business_price(flight: &Flight) -> Option<f64> {
    flight.business().first().map(|sub| sub.price.amount)
}

/// Price of the flight's `ecoFly` economy fare, if it has one.
pub fn actual_eco_fly_price(flight: &Flight, apply_promo: bool) -> Option<f64> {
    let eco_fly = flight.economy().iter().find(|sub| sub.brand_code.is_eco_fly());
    fare_price(eco_fly, apply_promo)
}
