//! Show/hide-on-scroll controller
//!
//! Toggles a visibility flag (toolbar, tab bar, floating button) from the
//! vertical velocity of the scroll view's pan gesture. Fast upward pans hide
//! it, fast downward pans show it again. Hiding and showing use separate
//! thresholds, and each state only listens for the velocity that leaves it,
//! so noise between the two thresholds never flips the flag.
//!
//! ```rust
//! use scrollplus::visibility::{Visibility, VisibilityVelocityController};
//!
//! let controller = VisibilityVelocityController::default();
//! let mut toolbar = Visibility::Visible;
//!
//! assert_eq!(controller.on_velocity_sample(-400.0, &mut toolbar), Some(Visibility::Hidden));
//! assert_eq!(controller.on_velocity_sample(150.0, &mut toolbar), None);
//! assert_eq!(controller.on_velocity_sample(250.0, &mut toolbar), Some(Visibility::Visible));
//! ```

use scrollplus_core::events::event_types::{HIDE_VELOCITY, SHOW_VELOCITY};
use scrollplus_core::{ChangeListeners, EventType, ListenerId, Result, StateTransitions};
use serde::{Deserialize, Serialize};

use crate::config::{validate_threshold, VisibilityConfig};

/// Default upward velocity (points/second) that hides content
pub const DEFAULT_HIDE_VELOCITY: f32 = 300.0;

/// Default downward velocity (points/second) that shows content
pub const DEFAULT_SHOW_VELOCITY: f32 = 200.0;

// ============================================================================
// Visibility
// ============================================================================

/// Two-state visibility flag owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Visibility::Hidden)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }
}

impl StateTransitions for Visibility {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (Visibility::Visible, HIDE_VELOCITY) => Some(Visibility::Hidden),
            (Visibility::Hidden, SHOW_VELOCITY) => Some(Visibility::Visible),
            _ => None,
        }
    }
}

// ============================================================================
// Gesture Options
// ============================================================================

/// Settings handed to the host gesture system unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOptions {
    /// Recognize the velocity pan alongside the scroll view's own recognizers
    pub recognize_simultaneously: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            recognize_simultaneously: true,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Velocity hysteresis for a bound [`Visibility`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityVelocityController {
    hide_velocity_threshold: f32,
    show_velocity_threshold: f32,
    gesture: GestureOptions,
}

impl Default for VisibilityVelocityController {
    fn default() -> Self {
        Self {
            hide_velocity_threshold: DEFAULT_HIDE_VELOCITY,
            show_velocity_threshold: DEFAULT_SHOW_VELOCITY,
            gesture: GestureOptions::default(),
        }
    }
}

impl VisibilityVelocityController {
    /// Create a controller with explicit thresholds
    ///
    /// Thresholds are speeds: they must be finite and non-negative.
    pub fn new(hide_velocity_threshold: f32, show_velocity_threshold: f32) -> Result<Self> {
        validate_threshold("hide", hide_velocity_threshold)?;
        validate_threshold("show", show_velocity_threshold)?;
        Ok(Self {
            hide_velocity_threshold,
            show_velocity_threshold,
            ..Default::default()
        })
    }

    pub fn from_config(config: &VisibilityConfig) -> Result<Self> {
        let controller = Self::new(config.hide_velocity, config.show_velocity)?;
        Ok(controller.with_gesture_options(GestureOptions {
            recognize_simultaneously: config.recognize_simultaneously,
        }))
    }

    pub fn with_gesture_options(mut self, gesture: GestureOptions) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn hide_velocity_threshold(&self) -> f32 {
        self.hide_velocity_threshold
    }

    pub fn show_velocity_threshold(&self) -> f32 {
        self.show_velocity_threshold
    }

    pub fn gesture_options(&self) -> GestureOptions {
        self.gesture
    }

    /// Map a vertical velocity to the event it triggers, if any
    ///
    /// Both comparisons are strict: a velocity exactly at a threshold does
    /// nothing. NaN never triggers.
    pub fn classify(&self, vertical_velocity: f32) -> Option<EventType> {
        if vertical_velocity < -self.hide_velocity_threshold {
            Some(HIDE_VELOCITY)
        } else if vertical_velocity > self.show_velocity_threshold {
            Some(SHOW_VELOCITY)
        } else {
            None
        }
    }

    /// Apply a pan velocity sample to a bound visibility flag
    ///
    /// Returns the new state when the flag changed.
    pub fn on_velocity_sample(
        &self,
        vertical_velocity: f32,
        visibility: &mut Visibility,
    ) -> Option<Visibility> {
        let event = self.classify(vertical_velocity)?;
        let next = visibility.apply(event)?;
        tracing::debug!(
            "Velocity {:.0} pt/s -> {:?}",
            vertical_velocity,
            next
        );
        Some(next)
    }
}

// ============================================================================
// Owned State
// ============================================================================

/// A controller bundled with the visibility flag it drives
///
/// For hosts without two-way bindings: the flag lives here and listeners are
/// told whenever it changes.
#[derive(Debug)]
pub struct VisibilityState {
    controller: VisibilityVelocityController,
    visibility: Visibility,
    listeners: ChangeListeners<Visibility>,
}

impl VisibilityState {
    pub fn new(controller: VisibilityVelocityController, initial: Visibility) -> Self {
        Self {
            controller,
            visibility: initial,
            listeners: ChangeListeners::new(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn controller(&self) -> &VisibilityVelocityController {
        &self.controller
    }

    /// Apply a pan velocity sample, notifying listeners on change
    pub fn on_velocity_sample(&mut self, vertical_velocity: f32) -> Option<Visibility> {
        let next = self
            .controller
            .on_velocity_sample(vertical_velocity, &mut self.visibility)?;
        self.listeners.notify(&next);
        Some(next)
    }

    /// Set the flag from the host side (e.g. after a tap)
    pub fn set_visibility(&mut self, visibility: Visibility) {
        if visibility != self.visibility {
            self.visibility = visibility;
            self.listeners.notify(&visibility);
        }
    }

    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Visibility) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::new(VisibilityVelocityController::default(), Visibility::Visible)
    }
}
