//! Selection controller that applies user intents.

use super::view::{BookingView, CatalogView, Heading};
use crate::booking::{self, BookingForm, BookingValidation};
use crate::catalog::{Catalog, City, CityId, Vehicle};
use crate::core::{
    BookingState, CityFilter, Intent, SelectionState, SessionHistory, SessionTransition, State,
};
use crate::filter::filter;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Result of applying one intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The state changed and the transition was recorded
    Transitioned,
    /// The intent was valid but left the state as it was
    Unchanged,
    /// The intent referenced something not in the catalog and was dropped
    Ignored,
}

/// Owner of a session's [`SelectionState`].
///
/// The state can only change through [`set_city`](Self::set_city),
/// [`book_click`](Self::book_click), [`close_modal`](Self::close_modal)
/// or [`dispatch`](Self::dispatch). The city filter and the booking flow
/// never reset each other.
pub struct SelectionController {
    catalog: Arc<Catalog>,
    state: SelectionState,
    history: SessionHistory,
}

impl SelectionController {
    /// Start a session in `NoFilter` × `Idle`.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            state: SelectionState::new(),
            history: SessionHistory::new(),
        }
    }

    /// Start a session that retains at most `limit` transitions.
    pub fn with_history_limit(catalog: impl Into<Arc<Catalog>>, limit: usize) -> Self {
        Self {
            history: SessionHistory::with_limit(limit),
            ..Self::new(catalog)
        }
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get current state (pure)
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Get applied transitions (pure)
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Select a city; an empty id clears the filter. Never rejected.
    pub fn set_city(&mut self, city_id: impl Into<CityId>) -> TransitionOutcome {
        self.dispatch(Intent::set_city(city_id))
    }

    /// Clear the city filter.
    pub fn clear_city(&mut self) -> TransitionOutcome {
        self.dispatch(Intent::set_city(""))
    }

    /// Open the booking flow for a vehicle.
    ///
    /// The id is looked up in the full catalog, not the filtered view.
    /// Unknown ids are ignored and leave the state untouched.
    pub fn book_click(&mut self, vehicle_id: &str) -> TransitionOutcome {
        self.dispatch(Intent::book_click(vehicle_id))
    }

    /// Close the booking flow. A no-op when it is not open.
    pub fn close_modal(&mut self) -> TransitionOutcome {
        self.dispatch(Intent::close_modal())
    }

    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> TransitionOutcome {
        let next = match &intent {
            Intent::SetCity { city_id } => self
                .state
                .with_city(CityFilter::from_input(city_id.as_str())),
            Intent::BookClick { vehicle_id } => {
                if !self.catalog.contains_vehicle(vehicle_id.as_str()) {
                    tracing::warn!(
                        vehicle = %vehicle_id,
                        booking = self.state.booking().name(),
                        "ignoring book click for a vehicle that is not in the catalog"
                    );
                    return TransitionOutcome::Ignored;
                }
                self.state
                    .with_booking(BookingState::Selecting(vehicle_id.clone()))
            }
            Intent::CloseModal => self.state.with_booking(BookingState::Idle),
        };

        if next == self.state {
            tracing::trace!(intent = intent.name(), "intent left state unchanged");
            return TransitionOutcome::Unchanged;
        }

        if let Some(city) = next.selected_city_id() {
            if !self.catalog.contains_city(city.as_str()) {
                tracing::warn!(city = %city, "filtering by a city that is not in the catalog");
            }
        }

        tracing::debug!(
            intent = intent.name(),
            from_city = self.state.city_filter().name(),
            to_city = next.city_filter().name(),
            from_booking = self.state.booking().name(),
            to_booking = next.booking().name(),
            "selection transition"
        );

        let from = std::mem::replace(&mut self.state, next);
        self.history.push(SessionTransition {
            from,
            to: self.state.clone(),
            intent,
            timestamp: Utc::now(),
        });
        TransitionOutcome::Transitioned
    }

    /// Vehicles visible under the current city filter, in catalog order.
    pub fn filtered_vehicles(&self) -> Vec<&Vehicle> {
        filter(self.catalog.vehicles(), self.state.selected_city_id())
    }

    /// The selected city's record, if a known city is selected.
    pub fn selected_city(&self) -> Option<&City> {
        self.state
            .selected_city_id()
            .and_then(|id| self.catalog.city(id.as_str()))
    }

    /// The vehicle targeted by the open booking flow.
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.state
            .selected_vehicle_id()
            .and_then(|id| self.catalog.vehicle(id.as_str()))
    }

    /// Everything a renderer needs for the current state.
    pub fn snapshot(&self) -> CatalogView<'_> {
        let vehicles = self.filtered_vehicles();
        let heading = match self.state.selected_city_id() {
            None => Heading::AllCities {
                total: self.catalog.len(),
            },
            Some(city_id) => Heading::City {
                city_id,
                city: self.selected_city(),
                available: vehicles.len(),
            },
        };
        let booking = self.selected_vehicle().map(|vehicle| BookingView {
            vehicle,
            city: self.selected_city(),
        });

        CatalogView {
            vehicles,
            selection: self.state.clone(),
            heading,
            booking,
        }
    }

    /// Review the booking modal's form against the targeted vehicle.
    ///
    /// A blank pickup city falls back to the city selected in the catalog.
    /// Returns `None` when no booking flow is open.
    pub fn review_booking(
        &self,
        form: &BookingForm,
        today: NaiveDate,
    ) -> Option<BookingValidation> {
        let vehicle = self.selected_vehicle()?;

        let mut form = form.clone();
        if form.pickup_city.is_blank() {
            if let Some(city) = self.state.selected_city_id() {
                form.pickup_city = city.clone();
            }
        }

        Some(booking::review(&form, vehicle, today))
    }
}
