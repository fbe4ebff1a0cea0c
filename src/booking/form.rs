//! Booking modal input and the summary shown back to the visitor.

use crate::catalog::{CityId, Vehicle, VehicleId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the visitor typed into the booking modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Blank means "use the city currently selected in the catalog".
    #[serde(default = "blank_city")]
    pub pickup_city: CityId,
}

fn blank_city() -> CityId {
    CityId::from("")
}

impl BookingForm {
    pub fn new(pickup_date: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            email: String::new(),
            phone: String::new(),
            pickup_date,
            return_date,
            pickup_city: blank_city(),
        }
    }

    pub fn customer(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.customer_name = name.into();
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    pub fn pickup_city(mut self, city: impl Into<CityId>) -> Self {
        self.pickup_city = city.into();
        self
    }
}

/// Reviewed booking intent.
///
/// This is what the modal displays after a successful review. It is not
/// a reservation: nothing is stored and no availability was checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Reference the visitor can quote when contacting the agency
    pub reference: Uuid,
    pub vehicle_id: VehicleId,
    pub vehicle_name: String,
    pub pickup_city: CityId,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub rental_days: u64,
    pub price_per_day: u32,
    pub total_price: u64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub reviewed_at: DateTime<Utc>,
}

impl BookingSummary {
    /// Summarise a form that already passed review.
    pub(crate) fn new(vehicle: &Vehicle, form: &BookingForm) -> Self {
        let rental_days = (form.return_date - form.pickup_date)
            .num_days()
            .max(1)
            .unsigned_abs();
        Self {
            reference: Uuid::new_v4(),
            vehicle_id: vehicle.id.clone(),
            vehicle_name: vehicle.name.clone(),
            pickup_city: form.pickup_city.clone(),
            pickup_date: form.pickup_date,
            return_date: form.return_date,
            rental_days,
            price_per_day: vehicle.price_per_day,
            total_price: rental_days * u64::from(vehicle.price_per_day),
            customer_name: form.customer_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            reviewed_at: Utc::now(),
        }
    }
}
