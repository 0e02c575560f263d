use skyroute_core::FareSubcategory;

/// Promo codes halve eco-fly fares.
pub const PROMO_DIVISOR: f64 = 2.0;

/// Price of a single fare offer.
///
/// `None` means the fare is not offered at all, which is different from a
/// zero price. The promo discount only ever applies to the `ecoFly` brand;
/// every other brand ignores `apply_promo`. No rounding is applied, so odd
/// amounts produce fractional prices.
pub fn fare_price(fare: Option<&FareSubcategory>, apply_promo: bool) -> Option<f64> {
    let fare = fare?;
    let mut price = fare.price.amount;
    if apply_promo && fare.brand_code.is_eco_fly() {
        price /= PROMO_DIVISOR;
    }
    Some(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fare;

    #[test]
    fn test_absent_fare_has_no_price() {
        assert_eq!(fare_price(None, true), None);
        assert_eq!(fare_price(None, false), None);
    }

    #[test]
    fn test_promo_halves_eco_fly_only() {
        let eco = fare("ecoFly", 300.0);
        assert_eq!(fare_price(Some(&eco), false), Some(300.0));
        assert_eq!(fare_price(Some(&eco), true), Some(150.0));

        for brand in ["extraFly", "primeFly", "business", ""] {
            let other = fare(brand, 300.0);
            assert_eq!(
                fare_price(Some(&other), true),
                fare_price(Some(&other), false),
                "brand {} must ignore promo",
                brand
            );
        }
    }

    #[test]
    fn test_odd_amount_is_not_rounded() {
        let eco = fare("ecoFly", 255.0);
        assert_eq!(fare_price(Some(&eco), true), Some(127.5));
    }
}
