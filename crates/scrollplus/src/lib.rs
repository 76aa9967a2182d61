//! ScrollPlus
//!
//! Scroll view controllers that are independent of any particular UI
//! toolkit. The host feeds them layout and gesture samples and renders what
//! they report.
//!
//! - [`HeaderScrollController`]: collapsing, fading header that follows the
//!   scroll offset and snaps fully open or closed once scrolling pauses
//! - [`VisibilityVelocityController`]: hides a toolbar on fast upward pans
//!   and shows it again on fast downward pans
//!
//! # Example
//!
//! ```rust
//! use scrollplus::prelude::*;
//!
//! let mut header = HeaderScrollController::new();
//! header.on_header_height_measured(HeaderGeometry::measured_height(56.0, 44.0));
//! header.on_scroll(0.0, 30.0, 44.0);
//!
//! let prefs = header.preferences();
//! assert_eq!(prefs.offset, 30.0);
//!
//! let toolbar = VisibilityVelocityController::default();
//! let mut visibility = Visibility::Visible;
//! toolbar.on_velocity_sample(-350.0, &mut visibility);
//! assert!(visibility.is_hidden());
//! ```

pub mod config;
#[cfg(feature = "driver")]
pub mod driver;
pub mod geometry;
pub mod header;
pub mod preferences;
pub mod visibility;

pub use config::{HeaderScrollConfig, ScrollPlusConfig, VisibilityConfig};
#[cfg(feature = "driver")]
pub use driver::{SettleDriver, SettleHandle, SharedHeaderController};
pub use geometry::{ContentGeometry, GeometryChange, HeaderGeometry};
pub use header::{HeaderPhase, HeaderScrollController, HeaderState};
pub use preferences::{
    HeaderOffsetPreference, HeaderOpacityPreference, HeaderPreferences, PreferenceKey,
};
pub use visibility::{GestureOptions, Visibility, VisibilityState, VisibilityVelocityController};

pub use scrollplus_animation::SpringConfig;
pub use scrollplus_core::{ConfigError, ListenerId};

/// Commonly used types
pub mod prelude {
    pub use crate::config::{HeaderScrollConfig, ScrollPlusConfig, VisibilityConfig};
    pub use crate::geometry::{ContentGeometry, HeaderGeometry};
    pub use crate::header::{HeaderPhase, HeaderScrollController, HeaderState};
    pub use crate::preferences::{HeaderPreferences, PreferenceKey};
    pub use crate::visibility::{Visibility, VisibilityState, VisibilityVelocityController};
}
