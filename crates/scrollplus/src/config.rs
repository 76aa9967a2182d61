//! Controller configuration
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! [header]
//! fade_distance = 35.0
//! collapse_threshold = 0.5
//! settle_delay_ms = 300
//!
//! [header.settle_spring]
//! stiffness = 631.7
//! damping = 42.7
//!
//! [visibility]
//! hide_velocity = 300.0
//! show_velocity = 200.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use scrollplus_animation::SpringConfig;
use scrollplus_core::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration (scrollplus.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScrollPlusConfig {
    #[serde(default)]
    pub header: HeaderScrollConfig,
    #[serde(default)]
    pub visibility: VisibilityConfig,
}

/// Collapsing header behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeaderScrollConfig {
    /// Scroll distance over which the header fades from opaque to transparent
    #[serde(default = "default_fade_distance")]
    pub fade_distance: f32,
    /// Fraction of the header height past which a paused header collapses
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: f32,
    /// Quiet period before the header snaps open or closed
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Animate the snap (false jumps straight to the target)
    #[serde(default = "default_true")]
    pub animate_settle: bool,
    /// Raw scroll samples retained for the settle detector
    #[serde(default = "default_sample_capacity")]
    pub sample_capacity: usize,
    /// Spring used to animate the snap
    #[serde(default)]
    pub settle_spring: SpringConfig,
}

fn default_fade_distance() -> f32 {
    35.0
}

fn default_collapse_threshold() -> f32 {
    0.5
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

fn default_sample_capacity() -> usize {
    2
}

impl Default for HeaderScrollConfig {
    fn default() -> Self {
        Self {
            fade_distance: default_fade_distance(),
            collapse_threshold: default_collapse_threshold(),
            settle_delay_ms: default_settle_delay_ms(),
            animate_settle: true,
            sample_capacity: default_sample_capacity(),
            settle_spring: SpringConfig::snappy(),
        }
    }
}

impl HeaderScrollConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.fade_distance.is_finite() || self.fade_distance <= 0.0 {
            return Err(ConfigError::InvalidFadeDistance(self.fade_distance));
        }
        if !(0.0..=1.0).contains(&self.collapse_threshold) {
            return Err(ConfigError::InvalidCollapseThreshold(
                self.collapse_threshold,
            ));
        }
        if self.sample_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.sample_capacity));
        }
        Ok(())
    }
}

/// Show/hide-on-scroll thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VisibilityConfig {
    /// Upward pan speed (points/second) that hides the bound content
    #[serde(default = "default_hide_velocity")]
    pub hide_velocity: f32,
    /// Downward pan speed (points/second) that shows it again
    #[serde(default = "default_show_velocity")]
    pub show_velocity: f32,
    /// Let the host pan recognizer run alongside the scroll view's own
    #[serde(default = "default_true")]
    pub recognize_simultaneously: bool,
}

fn default_hide_velocity() -> f32 {
    300.0
}

fn default_show_velocity() -> f32 {
    200.0
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            hide_velocity: default_hide_velocity(),
            show_velocity: default_show_velocity(),
            recognize_simultaneously: true,
        }
    }
}

impl VisibilityConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threshold("hide", self.hide_velocity)?;
        validate_threshold("show", self.show_velocity)
    }
}

pub(crate) fn validate_threshold(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

impl ScrollPlusConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScrollPlusConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, or from `scrollplus.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("scrollplus.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)?;
        tracing::debug!("Loaded configuration from {}", config_path.display());
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.header.validate()?;
        self.visibility.validate()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
