//! Session transition history.
//!
//! Record of the transitions a session went through. Only intents that
//! actually changed the state are recorded, and only the most recent
//! `limit` of them are retained.

use super::intent::Intent;
use super::selection::SelectionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Transitions kept by [`SessionHistory::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single applied intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionTransition {
    /// The state before the intent was applied
    pub from: SelectionState,
    /// The state after the intent was applied
    pub to: SelectionState,
    /// The intent that caused the change
    pub intent: Intent,
    /// When the intent was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of session transitions.
///
/// Once `limit` transitions are held, each new one evicts the oldest.
/// The `record` method returns a new history with the transition added
/// and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use car_rental::core::{Intent, SelectionState, SessionHistory, SessionTransition};
/// use chrono::Utc;
///
/// let history = SessionHistory::new();
/// let history = history.record(SessionTransition {
///     from: SelectionState::new(),
///     to: SelectionState::new(),
///     intent: Intent::close_modal(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: VecDeque<SessionTransition>,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHistory {
    /// Create a new empty history keeping [`DEFAULT_HISTORY_LIMIT`] transitions.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty history keeping at most `limit` transitions.
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: SessionTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest past the limit.
    pub(crate) fn push(&mut self, transition: SessionTransition) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Maximum number of transitions retained.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Get the path of states traversed.
    ///
    /// Returns the oldest retained `from` state followed by the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&SelectionState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Intents in the order they were applied.
    pub fn intents(&self) -> impl Iterator<Item = &Intent> {
        self.transitions.iter().map(|t| &t.intent)
    }

    /// Time between the oldest and newest retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Retained transitions, oldest first.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = &SessionTransition> + ExactSizeIterator {
        self.transitions.iter()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when no transition has been retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BookingState, CityFilter};

    fn filtered(city: &str) -> SelectionState {
        SelectionState::new().with_city(CityFilter::FilteredBy(city.into()))
    }

    #[test]
    fn new_history_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_does_not_mutate_original() {
        let history = SessionHistory::new();
        let transition = SessionTransition {
            from: SelectionState::new(),
            to: filtered("casablanca"),
            intent: Intent::set_city("casablanca"),
            timestamp: Utc::now(),
        };

        let new_history = history.record(transition);

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_follows_recorded_states() {
        let start = SelectionState::new();
        let in_fes = filtered("fes");
        let booking = in_fes.with_booking(BookingState::Selecting("v3".into()));

        let history = SessionHistory::new()
            .record(SessionTransition {
                from: start.clone(),
                to: in_fes.clone(),
                intent: Intent::set_city("fes"),
                timestamp: Utc::now(),
            })
            .record(SessionTransition {
                from: in_fes.clone(),
                to: booking.clone(),
                intent: Intent::book_click("v3"),
                timestamp: Utc::now(),
            });

        let path = history.get_path();
        assert_eq!(path, vec![&start, &in_fes, &booking]);

        let names: Vec<&str> = history.intents().map(|i| i.name()).collect();
        assert_eq!(names, vec!["setCity", "bookClick"]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = SessionHistory::new()
            .record(SessionTransition {
                from: SelectionState::new(),
                to: filtered("rabat"),
                intent: Intent::set_city("rabat"),
                timestamp: start,
            })
            .record(SessionTransition {
                from: filtered("rabat"),
                to: SelectionState::new(),
                intent: Intent::set_city(""),
                timestamp: start + chrono::Duration::seconds(30),
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn push_evicts_oldest_past_limit() {
        let mut history = SessionHistory::with_limit(2);
        for city in ["fes", "rabat", "tangier"] {
            history.push(SessionTransition {
                from: SelectionState::new(),
                to: filtered(city),
                intent: Intent::set_city(city),
                timestamp: Utc::now(),
            });
        }

        assert_eq!(history.len(), 2);
        let kept: Vec<&SelectionState> = history.transitions().map(|t| &t.to).collect();
        assert_eq!(kept, vec![&filtered("rabat"), &filtered("tangier")]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = SessionHistory::with_limit(0);
        history.push(SessionTransition {
            from: SelectionState::new(),
            to: filtered("agadir"),
            intent: Intent::set_city("agadir"),
            timestamp: Utc::now(),
        });
        assert!(history.is_empty());
        assert_eq!(history.limit(), 0);
    }

    #[test]
    fn new_history_uses_default_limit() {
        assert_eq!(SessionHistory::new().limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(SessionHistory::default().limit(), DEFAULT_HISTORY_LIMIT);
    }
}
