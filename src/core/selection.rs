//! Combined session UI state.

use super::state::{BookingState, CityFilter, State};
use crate::catalog::{CityId, VehicleId};
use serde::{Deserialize, Serialize};

/// UI state for one visitor session.
///
/// Created with everything empty, mutated only by the
/// [`SelectionController`](crate::SelectionController), dropped with it.
/// Readers get `&SelectionState` or a clone, never a mutable handle.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SelectionState {
    city: CityFilter,
    booking: BookingState,
}

impl SelectionState {
    /// Fresh session state: `NoFilter` × `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city_filter(&self) -> &CityFilter {
        &self.city
    }

    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    pub fn selected_city_id(&self) -> Option<&CityId> {
        self.city.city_id()
    }

    pub fn selected_vehicle_id(&self) -> Option<&VehicleId> {
        self.booking.vehicle_id()
    }

    pub fn is_booking_flow_open(&self) -> bool {
        self.booking.is_open()
    }

    /// True for the state a session starts in.
    pub fn is_initial(&self) -> bool {
        self.city.is_initial() && self.booking.is_initial()
    }

    /// Copy with the city filter replaced; the booking flow is untouched.
    pub(crate) fn with_city(&self, city: CityFilter) -> Self {
        Self {
            city,
            booking: self.booking.clone(),
        }
    }

    /// Copy with the booking flow replaced; the city filter is untouched.
    pub(crate) fn with_booking(&self, booking: BookingState) -> Self {
        Self {
            city: self.city.clone(),
            booking,
        }
    }
}
