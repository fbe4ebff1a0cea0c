//! Booking flow review.
//!
//! The booking modal only collects intent. This module checks what the
//! visitor entered and turns it into a summary to display, using
//! Stillwater's `Validation` so every problem is reported in one pass
//! instead of one at a time.
//!
//! Nothing here reserves a vehicle, checks availability or takes payment.
//!
//! # Example
//!
//! ```rust
//! use car_rental::booking::{review, BookingForm};
//! use car_rental::catalog::Vehicle;
//! use chrono::NaiveDate;
//!
//! let vehicle = Vehicle::new("v1", "Dacia Duster", 350).offered_in("agadir");
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//!
//! let form = BookingForm::new(
//!     NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 10, 23).unwrap(),
//! )
//! .customer("Omar", "omar@example.ma", "+212600000000")
//! .pickup_city("agadir");
//!
//! let result = review(&form, &vehicle, today);
//! assert!(result.is_success());
//! ```

pub mod form;
pub mod rules;
pub mod violations;

pub use form::{BookingForm, BookingSummary};
pub use rules::{review, BookingValidation};
pub use violations::BookingViolation;
