//! ScrollPlus Animation System
//!
//! Spring physics used to animate the header when it snaps open or closed.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Perceptual Presets**: Springs described by response duration and bounce
//! - **Interruptible**: Retargeting keeps the current velocity

pub mod spring;

pub use spring::{Spring, SpringConfig};
