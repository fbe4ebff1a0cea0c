//! Car Rental: catalog filtering and booking selection for a multi-city rental front end.
//!
//! The crate follows a "pure core, thin shell" layout. The catalog is an
//! immutable dataset loaded once, the filter engine is a pure function over
//! it, and a single [`SelectionController`] owns the session's UI state and
//! is the only thing allowed to change it.
//!
//! # Core Concepts
//!
//! - **Catalog**: read-only vehicles and cities, see [`catalog`]
//! - **Filter**: stable, order-preserving narrowing by city, see [`filter`]
//! - **Selection**: two independent sub-machines (city filter, booking flow)
//!   driven by [`Intent`]s
//! - **Booking review**: validation of the booking modal's form, reporting
//!   every problem at once
//!
//! # Example
//!
//! ```rust
//! use car_rental::catalog::{CatalogBuilder, City, Vehicle};
//! use car_rental::{SelectionController, TransitionOutcome};
//!
//! let catalog = CatalogBuilder::new()
//!     .city(City::new("casablanca", "Casablanca"))
//!     .city(City::new("marrakech", "Marrakech"))
//!     .vehicle(Vehicle::new("v1", "Dacia Duster", 350).offered_in("casablanca"))
//!     .vehicle(Vehicle::new("v2", "Range Rover Evoque", 1200).offered_in("marrakech"))
//!     .build()
//!     .unwrap();
//!
//! let mut controller = SelectionController::new(catalog);
//! controller.set_city("casablanca");
//!
//! let visible: Vec<&str> = controller
//!     .filtered_vehicles()
//!     .iter()
//!     .map(|v| v.id.as_str())
//!     .collect();
//! assert_eq!(visible, vec!["v1"]);
//!
//! assert_eq!(controller.book_click("v1"), TransitionOutcome::Transitioned);
//! assert!(controller.state().is_booking_flow_open());
//! ```

mod macros;

pub mod booking;
pub mod catalog;
pub mod controller;
pub mod core;
pub mod filter;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, City, CityId, Vehicle, VehicleId};
pub use controller::{CatalogView, SelectionController, TransitionOutcome};
pub use crate::core::{BookingState, CityFilter, Intent, SelectionState, SessionHistory, State};
pub use filter::filter;
