//! Read-only snapshots handed to the presentation layer.

use crate::catalog::{City, CityId, Vehicle};
use crate::core::SelectionState;

/// Everything the catalog page renders for one state.
#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Vehicles visible under the current filter, in catalog order
    pub vehicles: Vec<&'a Vehicle>,
    /// Copy of the state the view was taken from
    pub selection: SelectionState,
    pub heading: Heading<'a>,
    /// Present while the booking modal is open
    pub booking: Option<BookingView<'a>>,
}

/// Title banner above the car grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Heading<'a> {
    /// No filter: every vehicle across all cities.
    AllCities { total: usize },
    /// Filtered: `city` is `None` when the id is not in the catalog.
    City {
        city_id: &'a CityId,
        city: Option<&'a City>,
        available: usize,
    },
}

/// Data for the booking modal.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingView<'a> {
    pub vehicle: &'a Vehicle,
    /// The city selected in the catalog, if it is a known one
    pub city: Option<&'a City>,
}
