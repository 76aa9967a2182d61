//! Event-driven state transitions
//!
//! Controller state enums implement [`StateTransitions`] to describe which
//! events move them to which state:
//!
//! ```rust
//! use scrollplus_core::events::event_types::*;
//! use scrollplus_core::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Toolbar {
//!     Shown,
//!     Hidden,
//! }
//!
//! impl StateTransitions for Toolbar {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Toolbar::Shown, HIDE_VELOCITY) => Some(Toolbar::Hidden),
//!             (Toolbar::Hidden, SHOW_VELOCITY) => Some(Toolbar::Shown),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Toolbar::Shown;
//! assert!(state.apply(SHOW_VELOCITY).is_none());
//! assert_eq!(state.apply(HIDE_VELOCITY), Some(Toolbar::Hidden));
//! ```

use std::hash::Hash;

use crate::events::{event_name, EventType};

/// Trait for state types that can handle event transitions
///
/// `on_event` returns `None` when the event is not valid in the current
/// state. Implementations must never return the current state: a transition
/// always changes the value.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply an event in place, returning the new state if one was entered
    fn apply(&mut self, event: EventType) -> Option<Self> {
        let next = self.on_event(event).filter(|next| next != self)?;
        tracing::debug!(
            "{:?} --{}--> {:?}",
            self,
            event_name(event),
            next
        );
        *self = next;
        Some(next)
    }
}
