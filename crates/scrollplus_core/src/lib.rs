//! ScrollPlus Core Runtime
//!
//! This crate provides the foundational primitives shared by the ScrollPlus
//! scroll controllers:
//!
//! - **Event Types**: Identifiers for scroll, settle and velocity events
//! - **State Transitions**: Event-driven transitions for small controller FSMs
//! - **Change Notification**: Subscribe/notify hooks for host UI layers
//! - **Debounce**: Restartable trailing-edge timers and newest-N sample buffers
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use scrollplus_core::debounce::Debouncer;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! let start = Instant::now();
//!
//! debouncer.restart(start);
//! assert!(!debouncer.poll(start + Duration::from_millis(100)));
//! assert!(debouncer.poll(start + Duration::from_millis(300)));
//!
//! // Fires once per quiet period
//! assert!(!debouncer.poll(start + Duration::from_millis(600)));
//! ```

pub mod debounce;
pub mod error;
pub mod events;
pub mod observe;
pub mod state;

pub use debounce::{Debouncer, SampleBuffer};
pub use error::{ConfigError, Result};
pub use events::EventType;
pub use observe::{ChangeListeners, ListenerId};
pub use state::StateTransitions;
