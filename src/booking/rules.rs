//! Review rules for booking forms using Validation.

use super::form::{BookingForm, BookingSummary};
use super::violations::BookingViolation;
use crate::catalog::Vehicle;
use chrono::NaiveDate;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of reviewing a booking form.
pub type BookingValidation = Validation<BookingSummary, NonEmptyVec<BookingViolation>>;

type Check = Validation<(), NonEmptyVec<BookingViolation>>;

/// Review a booking form for `vehicle`, accumulating ALL violations.
///
/// Returns `Validation::Success` with a summary if every rule passes, or
/// `Validation::Failure` listing every rule that failed. `today` is the
/// earliest acceptable pickup date.
pub fn review(form: &BookingForm, vehicle: &Vehicle, today: NaiveDate) -> BookingValidation {
    let checks = vec![
        require_text("customer_name", &form.customer_name),
        check_email(&form.email),
        require_text("phone", &form.phone),
        check_pickup(form.pickup_date, today),
        check_return(form.pickup_date, form.return_date),
        check_city(form, vehicle),
    ];

    Validation::all_vec(checks).map(|_| BookingSummary::new(vehicle, form))
}

fn require_text(field: &'static str, value: &str) -> Check {
    if value.trim().is_empty() {
        Validation::fail(BookingViolation::MissingField { field })
    } else {
        Validation::success(())
    }
}

fn check_email(email: &str) -> Check {
    let email = email.trim();
    if email.is_empty() {
        return Validation::fail(BookingViolation::MissingField { field: "email" });
    }
    if is_plausible_email(email) {
        Validation::success(())
    } else {
        Validation::fail(BookingViolation::InvalidEmail {
            email: email.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn check_pickup(pickup: NaiveDate, today: NaiveDate) -> Check {
    if pickup < today {
        Validation::fail(BookingViolation::PickupInPast { pickup, today })
    } else {
        Validation::success(())
    }
}

fn check_return(pickup: NaiveDate, return_date: NaiveDate) -> Check {
    if return_date > pickup {
        Validation::success(())
    } else {
        Validation::fail(BookingViolation::ReturnNotAfterPickup {
            pickup,
            return_date,
        })
    }
}

fn check_city(form: &BookingForm, vehicle: &Vehicle) -> Check {
    if form.pickup_city.is_blank() {
        return Validation::fail(BookingViolation::MissingField {
            field: "pickup_city",
        });
    }
    if vehicle.cities.contains(&form.pickup_city) {
        Validation::success(())
    } else {
        Validation::fail(BookingViolation::CityNotServed {
            vehicle: vehicle.id.clone(),
            city: form.pickup_city.clone(),
        })
    }
}
