//! User intents emitted by the presentation layer.

use crate::catalog::{CityId, VehicleId};
use serde::{Deserialize, Serialize};

/// A discrete user action forwarded into the selection controller.
///
/// Intents are applied strictly in the order they arrive.
///
/// # Example
///
/// ```rust
/// use car_rental::Intent;
///
/// let intent: Intent = serde_json::from_str(
///     r#"{"type":"book_click","vehicle_id":"v1"}"#,
/// ).unwrap();
/// assert_eq!(intent, Intent::book_click("v1"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// City dropdown changed. An empty string clears the filter.
    SetCity { city_id: CityId },
    /// "Book" pressed on a vehicle card.
    BookClick { vehicle_id: VehicleId },
    /// Booking modal dismissed.
    CloseModal,
}

impl Intent {
    pub fn set_city(city_id: impl Into<CityId>) -> Self {
        Self::SetCity {
            city_id: city_id.into(),
        }
    }

    pub fn book_click(vehicle_id: impl Into<VehicleId>) -> Self {
        Self::BookClick {
            vehicle_id: vehicle_id.into(),
        }
    }

    pub fn close_modal() -> Self {
        Self::CloseModal
    }

    /// Get the intent's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::SetCity { .. } => "setCity",
            Self::BookClick { .. } => "bookClick",
            Self::CloseModal => "closeModal",
        }
    }
}
