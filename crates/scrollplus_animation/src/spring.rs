//! Spring physics
//!
//! Damped harmonic oscillator integrated with fourth-order Runge-Kutta.
//! Long frames are split into fixed substeps so a stalled frame clock cannot
//! make the spring explode; frames too long to integrate jump to rest.

use serde::{Deserialize, Serialize};

/// Largest integration step in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Most substeps integrated in one call; longer frames jump to rest
const MAX_SUBSTEPS: u32 = 960;

/// Distance and speed below which the spring is considered at rest
const REST_THRESHOLD: f32 = 0.01;

/// Physical spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_mass() -> f32 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Spring described by its perceptual response time and bounce
    ///
    /// `bounce` of 0.0 is critically damped, positive values overshoot.
    /// Uses unit mass: stiffness = (2π / duration)², damping = 4π(1 - bounce) / duration.
    pub fn from_duration(duration: f32, bounce: f32) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.25
        };
        let bounce = if bounce.is_finite() {
            bounce.clamp(0.0, 0.99)
        } else {
            0.0
        };
        let omega = std::f32::consts::TAU / duration;
        Self {
            stiffness: omega * omega,
            damping: 4.0 * std::f32::consts::PI * (1.0 - bounce) / duration,
            mass: 1.0,
        }
    }

    /// Quick spring with a hint of bounce (0.25s response)
    pub fn snappy() -> Self {
        Self::from_duration(0.25, 0.15)
    }

    /// Critically damped spring with a 0.5s response
    pub fn smooth() -> Self {
        Self::from_duration(0.5, 0.0)
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

/// An animated scalar value driven by a spring
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let steps = (dt / MAX_SUBSTEP).ceil();
        if steps > MAX_SUBSTEPS as f32 {
            tracing::trace!("frame of {:.2}s, jumping spring to {:.2}", dt, self.target);
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let steps = (steps as u32).max(1);
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.integrate(h);
            if self.is_settled() {
                break;
            }
        }

        if self.is_settled() {
            tracing::trace!("spring settled at {:.2}", self.target);
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let mass = if self.config.mass > 0.0 {
            self.config.mass
        } else {
            1.0
        };
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / mass
    }

    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + k1v * h * 0.5;
        let k2v = self.acceleration(x + k1x * h * 0.5, k2x);

        let k3x = v + k2v * h * 0.5;
        let k3v = self.acceleration(x + k2x * h * 0.5, k3x);

        let k4x = v + k3v * h;
        let k4v = self.acceleration(x + k3x * h, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_reaches_target() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);
        assert!(!spring.is_settled());

        for _ in 0..60 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_snappy_barely_overshoots() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);

        let mut peak = 0.0f32;
        for _ in 0..120 {
            spring.step(1.0 / 120.0);
            peak = peak.max(spring.value());
        }

        assert!(peak < 102.0, "overshoot too large: {}", peak);
    }

    #[test]
    fn test_smooth_is_critically_damped() {
        let config = SpringConfig::smooth();
        assert!((config.damping_ratio() - 1.0).abs() < 1e-3);
        assert!(SpringConfig::snappy().damping_ratio() < 1.0);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);
        for _ in 0..3 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        let mut spring = Spring::new(SpringConfig::snappy(), 10.0);
        spring.set_target(f32::NAN);
        spring.step(f32::INFINITY);
        spring.step(-1.0);
        spring.snap_to(f32::NAN);

        assert_eq!(spring.value(), 10.0);
        assert_eq!(spring.target(), 10.0);
    }

    #[test]
    fn test_long_frame_is_stable() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(50.0);
        spring.step(2.0);

        assert!(spring.value().is_finite());
        assert!(spring.is_settled());
    }

    #[test]
    fn test_stalled_frame_clock_jumps_to_rest() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(80.0);
        spring.step(1.0e6);

        assert_eq!(spring.value(), 80.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_config_from_toml() {
        let config: SpringConfig = toml::from_str("stiffness = 300.0\ndamping = 20.0\n").unwrap();
        assert_eq!(config, SpringConfig::new(300.0, 20.0, 1.0));
    }
}
