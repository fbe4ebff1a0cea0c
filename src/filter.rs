//! Filter engine: narrows a vehicle sequence to one city.
//!
//! Pure and deterministic. The result borrows the input vehicles and keeps
//! their original order, so the same inputs always produce the same
//! sequence of the same records.

use crate::catalog::{CityId, Vehicle};

/// Filter `vehicles` down to those offered in `city`.
///
/// - `None` or an empty id returns every vehicle.
/// - Otherwise returns the vehicles whose `cities` contain the id, in
///   input order. An id no vehicle knows about, whitespace included,
///   yields an empty result.
///
/// Accepts anything iterating `&Vehicle`, so its own output can be fed
/// back in.
///
/// # Example
///
/// ```rust
/// use car_rental::catalog::{CityId, Vehicle};
/// use car_rental::filter;
///
/// let fleet = vec![
///     Vehicle::new("v1", "Dacia Duster", 350).offered_in("casablanca"),
///     Vehicle::new("v2", "Peugeot 208", 300).offered_in("marrakech"),
/// ];
///
/// let casa = CityId::from("casablanca");
/// let visible = filter(&fleet, Some(&casa));
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id.as_str(), "v1");
///
/// assert_eq!(filter(&fleet, None).len(), 2);
/// assert!(filter(&fleet, Some(&CityId::from("ouarzazate"))).is_empty());
/// ```
pub fn filter<'a, I>(vehicles: I, city: Option<&CityId>) -> Vec<&'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    match city.filter(|id| !id.is_empty()) {
        None => vehicles.into_iter().collect(),
        Some(id) => vehicles
            .into_iter()
            .filter(|vehicle| vehicle.cities.contains(id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("v1", "One", 100).offered_in("casablanca"),
            Vehicle::new("v2", "Two", 200).offered_in("marrakech"),
            Vehicle::new("v3", "Three", 300)
                .offered_in("casablanca")
                .offered_in("marrakech"),
        ]
    }

    fn ids<'a>(vehicles: &[&'a Vehicle]) -> Vec<&'a str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn no_city_returns_everything_in_order() {
        let fleet = fleet();
        let result = filter(&fleet, None);

        assert_eq!(ids(&result), vec!["v1", "v2", "v3"]);
        for (filtered, original) in result.iter().zip(&fleet) {
            assert!(std::ptr::eq(*filtered, original));
        }
    }

    #[test]
    fn empty_city_is_no_filter() {
        let fleet = fleet();
        let empty = CityId::from("");
        assert_eq!(filter(&fleet, Some(&empty)).len(), 3);
    }

    #[test]
    fn whitespace_city_matches_nothing() {
        let fleet = fleet();
        for raw in ["  ", "\t", " casablanca"] {
            let city = CityId::from(raw);
            assert!(filter(&fleet, Some(&city)).is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn city_keeps_matching_vehicles_in_order() {
        let fleet = fleet();
        let city = CityId::from("casablanca");
        assert_eq!(ids(&filter(&fleet, Some(&city))), vec!["v1", "v3"]);
    }

    #[test]
    fn unknown_city_matches_nothing() {
        let fleet = fleet();
        let city = CityId::from("ghost-town");
        assert!(filter(&fleet, Some(&city)).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let fleet = fleet();
        let city = CityId::from("marrakech");
        let once = filter(&fleet, Some(&city));
        let twice = filter(once.iter().copied(), Some(&city));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        let empty: Vec<Vehicle> = Vec::new();
        let city = CityId::from("rabat");
        assert!(filter(&empty, Some(&city)).is_empty());
        assert!(filter(&empty, None).is_empty());
    }
}
