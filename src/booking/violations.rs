//! Problems found while reviewing a booking form.

use crate::catalog::{CityId, VehicleId};
use chrono::NaiveDate;
use thiserror::Error;

/// A single reason a booking form cannot be summarised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingViolation {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("Pickup date {pickup} is before today ({today})")]
    PickupInPast { pickup: NaiveDate, today: NaiveDate },

    #[error("Return date {return_date} must be after pickup date {pickup}")]
    ReturnNotAfterPickup {
        pickup: NaiveDate,
        return_date: NaiveDate,
    },

    #[error("Vehicle '{vehicle}' is not offered in '{city}'")]
    CityNotServed { vehicle: VehicleId, city: CityId },
}
