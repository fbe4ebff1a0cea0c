//! Session state types and transition bookkeeping.
//!
//! This module contains the pure part of the selection state machine:
//! - Sub-machine states via the `State` trait
//! - The combined `SelectionState` owned by the controller
//! - User intents and the immutable session history
//!
//! Nothing in here touches the catalog or performs lookups; deciding
//! whether an intent applies is the controller's job.

mod history;
mod intent;
mod selection;
mod state;

pub use history::{SessionHistory, SessionTransition, DEFAULT_HISTORY_LIMIT};
pub use intent::Intent;
pub use selection::SelectionState;
pub use state::{BookingState, CityFilter, State};
