//! Sub-machine states for the selection controller.
//!
//! The session is the product of two independent machines: the city
//! filter and the booking flow. Each is a small enum implementing
//! [`State`], which gives uniform naming for logs and history.

use crate::catalog::{CityId, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for sub-machine states.
///
/// All methods are pure. States are plain values describing where a
/// sub-machine currently is.
///
/// # Example
///
/// ```rust
/// use car_rental::core::{BookingState, CityFilter, State};
///
/// assert_eq!(CityFilter::NoFilter.name(), "NoFilter");
/// assert!(BookingState::Idle.is_initial());
/// assert!(!BookingState::Selecting("v1".into()).is_initial());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the state a fresh session starts in.
    fn is_initial(&self) -> bool;
}

/// City filter sub-machine.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "city_id")]
pub enum CityFilter {
    /// Show the whole catalog.
    #[default]
    NoFilter,
    /// Show only vehicles offered in this city. The id may be unknown.
    FilteredBy(CityId),
}

impl CityFilter {
    /// Interpret a raw city selection; only the empty string clears the
    /// filter. Whitespace is an ordinary (unknown) city id.
    ///
    /// ```rust
    /// use car_rental::core::CityFilter;
    ///
    /// assert_eq!(CityFilter::from_input(""), CityFilter::NoFilter);
    /// assert_eq!(
    ///     CityFilter::from_input("rabat"),
    ///     CityFilter::FilteredBy("rabat".into())
    /// );
    /// ```
    pub fn from_input(raw: &str) -> Self {
        if raw.is_empty() {
            Self::NoFilter
        } else {
            Self::FilteredBy(CityId::from(raw))
        }
    }

    /// The selected city, if any.
    pub fn city_id(&self) -> Option<&CityId> {
        match self {
            Self::NoFilter => None,
            Self::FilteredBy(id) => Some(id),
        }
    }
}

impl State for CityFilter {
    fn name(&self) -> &str {
        match self {
            Self::NoFilter => "NoFilter",
            Self::FilteredBy(_) => "FilteredBy",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::NoFilter)
    }
}

/// Booking flow sub-machine.
///
/// `Selecting` carries the targeted vehicle, so an open booking flow
/// without a vehicle cannot be represented.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "vehicle_id")]
pub enum BookingState {
    #[default]
    Idle,
    Selecting(VehicleId),
}

impl BookingState {
    /// The vehicle targeted for booking, if the flow is open.
    pub fn vehicle_id(&self) -> Option<&VehicleId> {
        match self {
            Self::Idle => None,
            Self::Selecting(id) => Some(id),
        }
    }

    /// Whether the booking modal is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }
}

impl State for BookingState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Selecting(_) => "Selecting",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
