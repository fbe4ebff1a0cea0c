//! Selection controller: the single owner of session UI state.
//!
//! The presentation layer forwards intents in, and reads back a
//! [`CatalogView`] to render. Every derived value (filtered vehicles,
//! resolved city, targeted vehicle) is recomputed from the canonical
//! [`SelectionState`](crate::SelectionState) on each read, so nothing can
//! drift out of sync with it.

mod machine;
mod view;

pub use machine::{SelectionController, TransitionOutcome};
pub use view::{BookingView, CatalogView, Heading};
