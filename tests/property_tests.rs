//! Property-based tests for the filter engine and selection controller.
//!
//! These tests use proptest to verify the filter laws and the
//! controller's invariants across many randomly generated catalogs.

use car_rental::catalog::{Catalog, City, CityId, Vehicle};
use car_rental::{filter, Intent, SelectionController, TransitionOutcome};
use proptest::prelude::*;

const CITIES: [&str; 4] = ["casablanca", "marrakech", "rabat", "tangier"];

prop_compose! {
    fn arbitrary_vehicle(index: usize)(
        offered in prop::collection::vec(any::<bool>(), CITIES.len()),
        price in 100u32..4000,
    ) -> Vehicle {
        CITIES
            .iter()
            .zip(offered)
            .filter(|(_, offered)| *offered)
            .fold(
                Vehicle::new(format!("v{index}"), format!("Car {index}"), price),
                |vehicle, (city, _)| vehicle.offered_in(*city),
            )
    }
}

fn arbitrary_fleet() -> impl Strategy<Value = Vec<Vehicle>> {
    (0usize..12).prop_flat_map(|len| {
        (0..len)
            .map(arbitrary_vehicle)
            .collect::<Vec<_>>()
    })
}

fn arbitrary_city_input() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(CITIES.to_vec()).prop_map(str::to_string),
        Just(String::new()),
        Just("ghost-town".to_string()),
        Just(" ".to_string()),
        Just("\t".to_string()),
    ]
}

fn arbitrary_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        arbitrary_city_input().prop_map(|city| Intent::set_city(city)),
        (0usize..14).prop_map(|i| Intent::book_click(format!("v{i}"))),
        Just(Intent::close_modal()),
    ]
}

fn catalog_for(fleet: Vec<Vehicle>) -> Catalog {
    let cities = CITIES.iter().map(|id| City::new(*id, id.to_uppercase()));
    Catalog::new(cities.collect(), fleet).unwrap()
}

fn city_arg(input: &str) -> Option<CityId> {
    if input.is_empty() {
        None
    } else {
        Some(CityId::from(input))
    }
}

proptest! {
    #[test]
    fn filter_is_order_preserving_subsequence(
        fleet in arbitrary_fleet(),
        city in arbitrary_city_input(),
    ) {
        let city = city_arg(&city);
        let result = filter(&fleet, city.as_ref());

        let mut remaining = fleet.iter();
        for picked in &result {
            prop_assert!(remaining.any(|v| std::ptr::eq(v, *picked)));
        }
    }

    #[test]
    fn only_empty_input_shows_whole_fleet(
        fleet in arbitrary_fleet(),
        city in arbitrary_city_input(),
    ) {
        let mut controller = SelectionController::new(catalog_for(fleet));
        controller.set_city(city.as_str());

        let selected = controller.state().selected_city_id().map(|c| c.as_str());
        if city.is_empty() {
            prop_assert_eq!(selected, None);
            prop_assert_eq!(controller.filtered_vehicles().len(), controller.catalog().len());
        } else {
            prop_assert_eq!(selected, Some(city.as_str()));
            if city.trim() != city {
                prop_assert!(controller.filtered_vehicles().is_empty());
            }
        }
    }

    #[test]
    fn filter_without_city_is_identity(fleet in arbitrary_fleet()) {
        let result = filter(&fleet, None);
        prop_assert_eq!(result.len(), fleet.len());
        for (picked, original) in result.iter().zip(&fleet) {
            prop_assert!(std::ptr::eq(*picked, original));
        }
    }

    #[test]
    fn filter_is_idempotent(
        fleet in arbitrary_fleet(),
        city in arbitrary_city_input(),
    ) {
        let city = city_arg(&city);
        let once = filter(&fleet, city.as_ref());
        let twice = filter(once.iter().copied(), city.as_ref());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_membership_matches_city_set(
        fleet in arbitrary_fleet(),
        city in prop::sample::select(CITIES.to_vec()),
    ) {
        let id = CityId::from(city);
        let result = filter(&fleet, Some(&id));

        for vehicle in &fleet {
            let included = result.iter().any(|v| std::ptr::eq(*v, vehicle));
            prop_assert_eq!(included, vehicle.cities.contains(&id));
        }
    }

    #[test]
    fn filter_is_deterministic(
        fleet in arbitrary_fleet(),
        city in arbitrary_city_input(),
    ) {
        let city = city_arg(&city);
        let first = filter(&fleet, city.as_ref());
        let second = filter(&fleet, city.as_ref());

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn open_flow_always_targets_catalog_vehicle(
        fleet in arbitrary_fleet(),
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
    ) {
        let mut controller = SelectionController::new(catalog_for(fleet));

        for intent in intents {
            controller.dispatch(intent);

            let state = controller.state();
            if state.is_booking_flow_open() {
                let id = state.selected_vehicle_id().map(|v| v.as_str());
                prop_assert!(id.is_some());
                prop_assert!(controller.catalog().contains_vehicle(id.unwrap_or_default()));
            } else {
                prop_assert!(state.selected_vehicle_id().is_none());
            }
        }
    }

    #[test]
    fn city_changes_never_touch_booking(
        fleet in arbitrary_fleet(),
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
        city in arbitrary_city_input(),
    ) {
        let mut controller = SelectionController::new(catalog_for(fleet));
        for intent in intents {
            controller.dispatch(intent);
        }

        let booking_before = controller.state().booking().clone();
        controller.set_city(city);
        prop_assert_eq!(controller.state().booking(), &booking_before);
    }

    #[test]
    fn close_modal_never_touches_city(
        fleet in arbitrary_fleet(),
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
    ) {
        let mut controller = SelectionController::new(catalog_for(fleet));
        for intent in intents {
            controller.dispatch(intent);
        }

        let city_before = controller.state().city_filter().clone();
        controller.close_modal();
        prop_assert_eq!(controller.state().city_filter(), &city_before);
        prop_assert!(!controller.state().is_booking_flow_open());
    }

    #[test]
    fn history_records_only_transitions(
        fleet in arbitrary_fleet(),
        intents in prop::collection::vec(arbitrary_intent(), 0..30),
    ) {
        let mut controller = SelectionController::new(catalog_for(fleet));
        let mut transitioned = 0;
        for intent in intents {
            if controller.dispatch(intent) == TransitionOutcome::Transitioned {
                transitioned += 1;
            }
        }

        prop_assert_eq!(controller.history().len(), transitioned);
        if let Some(last) = controller.history().transitions().last() {
            prop_assert_eq!(&last.to, controller.state());
        }
    }
}
