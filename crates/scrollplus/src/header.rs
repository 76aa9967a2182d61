//! Collapsing header controller
//!
//! Tracks the clamped scroll offset of a scroll view and derives how far its
//! header is pushed off screen and how opaque it should be. When scrolling
//! pauses, the header snaps fully open or fully closed.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use scrollplus::header::HeaderScrollController;
//!
//! let mut header = HeaderScrollController::new();
//! header.on_header_height_measured(100.0);
//!
//! // Content scrolled from 0 to 40 points
//! header.on_scroll(0.0, 40.0, 0.0);
//! assert_eq!(header.header_offset(), 40.0);
//! assert_eq!(header.opacity(), 0.0);
//!
//! // Raw samples feed the settle detector
//! let now = Instant::now();
//! header.on_raw_scroll_sample(40.0, now);
//! assert!(header.poll_settle(now + Duration::from_millis(300)));
//!
//! // 40 < 50 (half the header), so it snaps open again
//! assert_eq!(header.header_offset(), 0.0);
//! ```
//!
//! # Direction flag
//!
//! `is_scrolling_up` is `old_offset < new_offset` on the clamped offset,
//! i.e. true while the content moves towards its end. The name is kept for
//! hosts that bind to it; only the literal comparison matters.

use std::time::{Duration, Instant};

use scrollplus_animation::Spring;
use scrollplus_core::events::event_types::{SCROLL, SCROLL_SETTLE, SETTLE_END};
use scrollplus_core::{
    ChangeListeners, Debouncer, EventType, ListenerId, Result, SampleBuffer, StateTransitions,
};

use crate::config::HeaderScrollConfig;
use crate::geometry::GeometryChange;
use crate::preferences::HeaderPreferences;

// ============================================================================
// Header Phase
// ============================================================================

/// What the header is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderPhase {
    /// No scroll activity since the last settle
    #[default]
    Idle,
    /// Following scroll samples
    Scrolling,
    /// Animating towards fully open or fully collapsed
    Settling,
}

impl StateTransitions for HeaderPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (HeaderPhase::Idle, SCROLL) => Some(HeaderPhase::Scrolling),
            // A new sample interrupts the snap animation
            (HeaderPhase::Settling, SCROLL) => Some(HeaderPhase::Scrolling),
            (HeaderPhase::Idle | HeaderPhase::Scrolling, SCROLL_SETTLE) => {
                Some(HeaderPhase::Settling)
            }
            (HeaderPhase::Scrolling | HeaderPhase::Settling, SETTLE_END) => {
                Some(HeaderPhase::Idle)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Header State
// ============================================================================

/// Snapshot of the observable header state, passed to change listeners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    /// Latest clamped scroll offset
    pub natural_scroll_offset: f32,
    /// Offset recorded at the last direction change or settle
    pub last_natural_offset: f32,
    /// `old < new` of the last processed sample
    pub is_scrolling_up: bool,
    /// Measured header height, including the top safe-area inset
    pub header_height: f32,
    /// How far the header is pushed up
    pub header_offset: f32,
    /// Header opacity in 0.0..=1.0
    pub opacity: f32,
    /// Whether the header follows samples, animates a snap or rests
    pub phase: HeaderPhase,
}

// ============================================================================
// Controller
// ============================================================================

/// Scroll-offset state machine for a collapsing, fading header
pub struct HeaderScrollController {
    natural_scroll_offset: f32,
    last_natural_offset: f32,
    is_scrolling_up: bool,
    header_height: f32,
    header_offset: f32,
    opacity: f32,
    /// Safe-area inset from the most recent scroll sample
    safe_top: f32,
    phase: HeaderPhase,
    /// Header offset as presented on screen while a snap animates
    presented: Spring,
    settle_timer: Debouncer,
    raw_samples: SampleBuffer<f32>,
    listeners: ChangeListeners<HeaderState>,
    config: HeaderScrollConfig,
}

impl Default for HeaderScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderScrollController {
    /// Create a controller with all state zeroed and default behavior
    pub fn new() -> Self {
        let config = HeaderScrollConfig::default();
        Self {
            natural_scroll_offset: 0.0,
            last_natural_offset: 0.0,
            is_scrolling_up: false,
            header_height: 0.0,
            header_offset: 0.0,
            opacity: 1.0,
            safe_top: 0.0,
            phase: HeaderPhase::Idle,
            presented: Spring::new(config.settle_spring, 0.0),
            settle_timer: Debouncer::new(config.settle_delay()),
            raw_samples: SampleBuffer::new(),
            listeners: ChangeListeners::new(),
            config,
        }
    }

    /// Create a controller with custom behavior
    pub fn with_config(config: HeaderScrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            presented: Spring::new(config.settle_spring, 0.0),
            settle_timer: Debouncer::new(config.settle_delay()),
            raw_samples: SampleBuffer::with_capacity(config.sample_capacity)?,
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &HeaderScrollConfig {
        &self.config
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Apply a change of the clamped, content-relative scroll offset
    pub fn on_scroll(&mut self, old_offset: f32, new_offset: f32, safe_top_inset: f32) {
        let old_offset = finite_or_zero(old_offset, "old scroll offset");
        let new_offset = finite_or_zero(new_offset, "new scroll offset");
        let safe_top = finite_or_zero(safe_top_inset, "safe-area inset").max(0.0);

        let is_scrolling_up = old_offset < new_offset;
        let previous_offset = self.header_offset;

        self.safe_top = safe_top;
        self.header_offset = (new_offset - self.last_natural_offset)
            .max(0.0)
            .min(self.offset_limit());
        self.natural_scroll_offset = new_offset;

        if is_scrolling_up != self.is_scrolling_up {
            // Re-anchor so the header continues from where it is
            self.last_natural_offset = self.natural_scroll_offset - self.header_offset;
            tracing::debug!(
                "Scroll direction changed (up={}), anchor at {:.1}",
                is_scrolling_up,
                self.last_natural_offset
            );
        }

        self.opacity = self.compute_opacity();
        self.is_scrolling_up = is_scrolling_up;

        self.phase.apply(SCROLL);
        self.presented.snap_to(self.header_offset);

        tracing::trace!(
            "Scroll {:.1} -> {:.1}: header offset {:.1} -> {:.1}, opacity {:.2}",
            old_offset,
            new_offset,
            previous_offset,
            self.header_offset,
            self.opacity
        );

        self.notify();
    }

    /// Feed a raw (unclamped) scroll sample to the settle detector
    ///
    /// Each sample pushes the settle deadline back by the configured delay.
    pub fn on_raw_scroll_sample(&mut self, value: f32, now: Instant) {
        self.raw_samples.push(finite_or_zero(value, "raw scroll sample"));
        self.settle_timer.restart(now);
    }

    /// Record a new header height (already including the top safe-area inset)
    pub fn on_header_height_measured(&mut self, height: f32) {
        let height = finite_or_zero(height, "header height").max(0.0);
        if height == self.header_height {
            return;
        }

        tracing::debug!(
            "Header height {:.1} -> {:.1}",
            self.header_height,
            height
        );
        self.header_height = height;
        self.header_offset = self.header_offset.min(self.offset_limit());
        self.notify();
    }

    /// Apply the output of [`crate::geometry::ContentGeometry::update`]
    pub fn apply_geometry(&mut self, change: GeometryChange, safe_top_inset: f32, now: Instant) {
        if let Some((old, new)) = change.clamped {
            self.on_scroll(old, new, safe_top_inset);
        }
        if let Some(raw) = change.raw {
            self.on_raw_scroll_sample(raw, now);
        }
    }

    // ========================================================================
    // Settling
    // ========================================================================

    /// Fire the settle detector if scrolling has been quiet long enough
    ///
    /// Returns true when the debounce fired (once per quiet period).
    pub fn poll_settle(&mut self, now: Instant) -> bool {
        if !self.settle_timer.poll(now) {
            return false;
        }
        self.raw_samples.clear();
        self.settle_header_state();
        true
    }

    /// Time until the pending settle fires, if one is armed
    pub fn pending_settle(&self, now: Instant) -> Option<Duration> {
        self.settle_timer.remaining(now)
    }

    /// Drop any pending settle (view teardown)
    pub fn cancel_pending_settle(&mut self) -> bool {
        self.raw_samples.clear();
        self.settle_timer.cancel()
    }

    /// Snap a partially collapsed header fully open or fully collapsed
    ///
    /// Does nothing unless the header offset lies strictly between 0 and the
    /// header height. Returns true when the header was moved.
    pub fn settle_header_state(&mut self) -> bool {
        let height = self.header_height;
        if !(self.header_offset > 0.0 && self.header_offset < height) {
            if self.phase != HeaderPhase::Settling && self.phase.apply(SETTLE_END).is_some() {
                self.notify();
            }
            return false;
        }

        let collapse = self.header_offset > height * self.config.collapse_threshold
            && self.natural_scroll_offset > height;
        let target = if collapse { height } else { 0.0 };

        tracing::debug!(
            "Settling header {:.1} -> {:.1} (height {:.1}, scroll {:.1})",
            self.header_offset,
            target,
            height,
            self.natural_scroll_offset
        );

        self.header_offset = target;
        self.last_natural_offset = self.natural_scroll_offset - self.header_offset;

        self.phase.apply(SCROLL_SETTLE);
        if self.config.animate_settle {
            self.presented.set_target(target);
        } else {
            self.presented.snap_to(target);
            self.phase.apply(SETTLE_END);
        }

        self.notify();
        true
    }

    /// Advance the snap animation by `dt` seconds
    ///
    /// Returns true while the animation is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phase != HeaderPhase::Settling {
            return false;
        }

        self.presented.step(dt);
        if self.presented.is_settled() {
            self.phase.apply(SETTLE_END);
            self.notify();
            return false;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.phase == HeaderPhase::Settling
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    pub fn natural_scroll_offset(&self) -> f32 {
        self.natural_scroll_offset
    }

    pub fn last_natural_offset(&self) -> f32 {
        self.last_natural_offset
    }

    pub fn is_scrolling_up(&self) -> bool {
        self.is_scrolling_up
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Current collapse amount in `0.0..=safe_top + header_height`
    pub fn header_offset(&self) -> f32 {
        self.header_offset
    }

    /// Header offset to render, following the snap animation
    pub fn presented_offset(&self) -> f32 {
        self.presented.value().max(0.0).min(self.offset_limit())
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn phase(&self) -> HeaderPhase {
        self.phase
    }

    /// Raw samples waiting for the settle detector (newest last)
    pub fn buffered_samples(&self) -> &SampleBuffer<f32> {
        &self.raw_samples
    }

    /// Values published to ancestor views
    pub fn preferences(&self) -> HeaderPreferences {
        HeaderPreferences {
            offset: self.header_offset,
            opacity: self.opacity,
        }
    }

    pub fn snapshot(&self) -> HeaderState {
        HeaderState {
            natural_scroll_offset: self.natural_scroll_offset,
            last_natural_offset: self.last_natural_offset,
            is_scrolling_up: self.is_scrolling_up,
            header_height: self.header_height,
            header_offset: self.header_offset,
            opacity: self.opacity,
            phase: self.phase,
        }
    }

    // ========================================================================
    // Change Notification
    // ========================================================================

    /// Subscribe to state changes
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&HeaderState) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot);
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Upper bound of the header offset
    fn offset_limit(&self) -> f32 {
        (self.safe_top + self.header_height).max(0.0)
    }

    /// 1.0 at the top, fading linearly to 0.0 over the fade distance
    fn compute_opacity(&self) -> f32 {
        let distance = self.config.fade_distance;
        let progress = if distance > 0.0 {
            (self.natural_scroll_offset / distance).clamp(0.0, 1.0)
        } else if self.natural_scroll_offset > 0.0 {
            1.0
        } else {
            0.0
        };
        1.0 - progress
    }
}

/// Replace NaN and infinities with zero
fn finite_or_zero(value: f32, what: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("Ignoring non-finite {}: {}", what, value);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderScrollConfig;
    use std::sync::{Arc, Mutex};

    const HEIGHT: f32 = 100.0;

    fn controller() -> HeaderScrollController {
        let mut header = HeaderScrollController::new();
        header.on_header_height_measured(HEIGHT);
        header
    }

    /// Scroll through `offsets` one sample at a time
    fn scroll_through(header: &mut HeaderScrollController, start: f32, offsets: &[f32]) {
        let mut old = start;
        for &new in offsets {
            header.on_scroll(old, new, 0.0);
            old = new;
        }
    }

    /// Scroll well past the header, then back until the header offset is `offset`
    fn partially_revealed(offset: f32) -> HeaderScrollController {
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[100.0, 200.0]);
        assert_eq!(header.header_offset(), HEIGHT);

        // Reversal at 190 re-anchors at 190 - 100 = 90
        scroll_through(&mut header, 200.0, &[190.0]);
        assert_eq!(header.last_natural_offset(), 90.0);

        header.on_scroll(190.0, 90.0 + offset, 0.0);
        assert!((header.header_offset() - offset).abs() < 1e-4);
        header
    }

    #[test]
    fn test_initial_state() {
        let header = HeaderScrollController::new();
        assert_eq!(header.header_offset(), 0.0);
        assert_eq!(header.header_height(), 0.0);
        assert_eq!(header.natural_scroll_offset(), 0.0);
        assert_eq!(header.opacity(), 1.0);
        assert!(!header.is_scrolling_up());
        assert_eq!(header.phase(), HeaderPhase::Idle);
    }

    #[test]
    fn test_header_follows_scroll() {
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[10.0, 20.0, 30.0]);

        assert!(header.is_scrolling_up());
        assert_eq!(header.header_offset(), 30.0);
        assert_eq!(header.natural_scroll_offset(), 30.0);
        assert_eq!(header.phase(), HeaderPhase::Scrolling);
    }

    #[test]
    fn test_header_offset_clamped_to_height_plus_safe_top() {
        let mut header = controller();
        header.on_scroll(0.0, 500.0, 20.0);
        assert_eq!(header.header_offset(), 120.0);

        header.on_scroll(500.0, 0.0, 20.0);
        assert_eq!(header.header_offset(), 0.0);
    }

    #[test]
    fn test_unmeasured_header_clamps_to_safe_top() {
        let mut header = HeaderScrollController::new();
        header.on_header_height_measured(-40.0);
        assert_eq!(header.header_height(), 0.0);

        header.on_scroll(0.0, 80.0, 12.0);
        assert_eq!(header.header_offset(), 12.0);
        assert!(header.opacity().is_finite());
    }

    #[test]
    fn test_reversal_does_not_jump() {
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[20.0, 40.0, 60.0]);
        let before = header.header_offset();

        // Reverse by a single point
        header.on_scroll(60.0, 59.0, 0.0);
        assert!((header.header_offset() - before).abs() <= 1.0);

        // Continues smoothly from the re-anchored position
        header.on_scroll(59.0, 50.0, 0.0);
        assert!((header.header_offset() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_reversal_after_full_collapse_reveals_immediately() {
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[300.0, 600.0]);
        assert_eq!(header.header_offset(), HEIGHT);

        scroll_through(&mut header, 600.0, &[590.0, 570.0]);
        assert!((header.header_offset() - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_opacity_fades_over_35_points() {
        let mut header = controller();

        header.on_scroll(0.0, 0.0, 0.0);
        assert_eq!(header.opacity(), 1.0);

        let mut last = header.opacity();
        for step in 1..=50 {
            let offset = step as f32;
            header.on_scroll(offset - 1.0, offset, 0.0);
            assert!(header.opacity() <= last);
            assert!((0.0..=1.0).contains(&header.opacity()));
            last = header.opacity();
        }

        header.on_scroll(50.0, 35.0, 0.0);
        assert_eq!(header.opacity(), 0.0);
        header.on_scroll(35.0, 17.5, 0.0);
        assert!((header.opacity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_nan_input_is_sanitized() {
        let mut header = controller();
        header.on_scroll(0.0, f32::NAN, f32::INFINITY);

        assert_eq!(header.natural_scroll_offset(), 0.0);
        assert_eq!(header.header_offset(), 0.0);
        assert_eq!(header.opacity(), 1.0);

        header.on_header_height_measured(f32::NAN);
        assert_eq!(header.header_height(), 0.0);
    }

    #[test]
    fn test_settle_collapses_past_half() {
        let mut header = partially_revealed(60.0);
        assert!(header.natural_scroll_offset() > HEIGHT);

        assert!(header.settle_header_state());
        assert_eq!(header.header_offset(), HEIGHT);
        assert_eq!(
            header.last_natural_offset(),
            header.natural_scroll_offset() - HEIGHT
        );
    }

    #[test]
    fn test_settle_expands_below_half() {
        let mut header = partially_revealed(40.0);

        assert!(header.settle_header_state());
        assert_eq!(header.header_offset(), 0.0);
        assert_eq!(header.last_natural_offset(), header.natural_scroll_offset());
    }

    #[test]
    fn test_settle_expands_near_top() {
        // Past half the header but not scrolled beyond it
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[30.0, 70.0]);
        assert_eq!(header.header_offset(), 70.0);

        assert!(header.settle_header_state());
        assert_eq!(header.header_offset(), 0.0);
    }

    #[test]
    fn test_settle_is_noop_at_boundaries() {
        let mut header = controller();
        assert!(!header.settle_header_state());

        scroll_through(&mut header, 0.0, &[150.0]);
        assert_eq!(header.header_offset(), HEIGHT);
        assert!(!header.settle_header_state());
        assert_eq!(header.header_offset(), HEIGHT);
    }

    #[test]
    fn test_settle_animation_runs_to_target() {
        let mut header = partially_revealed(60.0);
        header.settle_header_state();

        assert_eq!(header.phase(), HeaderPhase::Settling);
        assert!(header.is_animating());
        assert!((header.presented_offset() - 60.0).abs() < 1e-4);

        let mut frames = 0;
        while header.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "settle animation never finished");
        }

        assert_eq!(header.phase(), HeaderPhase::Idle);
        assert_eq!(header.presented_offset(), HEIGHT);
    }

    #[test]
    fn test_scroll_interrupts_settle_animation() {
        let mut header = partially_revealed(60.0);
        let natural = header.natural_scroll_offset();
        header.settle_header_state();
        header.tick(1.0 / 60.0);

        header.on_scroll(natural, natural + 5.0, 0.0);
        assert_eq!(header.phase(), HeaderPhase::Scrolling);
        assert_eq!(header.presented_offset(), header.header_offset());
    }

    #[test]
    fn test_settle_at_boundary_notifies_idle() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let mut header = controller();
        scroll_through(&mut header, 0.0, &[150.0]);

        let phases_clone = phases.clone();
        header.on_change(move |state| phases_clone.lock().unwrap().push(state.phase));

        assert!(!header.settle_header_state());
        assert_eq!(header.phase(), HeaderPhase::Idle);
        assert_eq!(*phases.lock().unwrap(), vec![HeaderPhase::Idle]);

        // Already idle: nothing new to report
        assert!(!header.settle_header_state());
        assert_eq!(phases.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_tick_after_stalled_frame_clock() {
        let mut header = controller();
        header.on_scroll(0.0, 30.0, 0.0);
        assert!(header.settle_header_state());

        assert!(!header.tick(100_000.0));
        assert_eq!(header.phase(), HeaderPhase::Idle);
        assert_eq!(header.presented_offset(), 0.0);
    }

    #[test]
    fn test_settle_without_animation() {
        let config = HeaderScrollConfig {
            animate_settle: false,
            ..Default::default()
        };
        let mut header = HeaderScrollController::with_config(config).unwrap();
        header.on_header_height_measured(HEIGHT);
        scroll_through(&mut header, 0.0, &[30.0]);

        assert!(header.settle_header_state());
        assert_eq!(header.phase(), HeaderPhase::Idle);
        assert_eq!(header.presented_offset(), 0.0);
    }

    #[test]
    fn test_debounced_settle_fires_once() {
        let mut header = partially_revealed(60.0);
        let start = Instant::now();
        let ms = Duration::from_millis;

        header.on_raw_scroll_sample(150.0, start);
        header.on_raw_scroll_sample(150.0, start + ms(100));
        assert_eq!(header.buffered_samples().len(), 2);

        assert!(!header.poll_settle(start + ms(300)));
        assert_eq!(header.pending_settle(start + ms(300)), Some(ms(100)));
        assert!(header.poll_settle(start + ms(400)));
        assert_eq!(header.header_offset(), HEIGHT);
        assert!(header.buffered_samples().is_empty());

        assert!(!header.poll_settle(start + ms(2000)));
    }

    #[test]
    fn test_raw_samples_keep_newest_two() {
        let mut header = controller();
        let now = Instant::now();
        for value in [1.0, 2.0, 3.0, 4.0] {
            header.on_raw_scroll_sample(value, now);
        }

        let samples: Vec<f32> = header.buffered_samples().iter().copied().collect();
        assert_eq!(samples, vec![3.0, 4.0]);
        assert_eq!(header.buffered_samples().dropped(), 2);
    }

    #[test]
    fn test_cancel_pending_settle() {
        let mut header = partially_revealed(60.0);
        let now = Instant::now();
        header.on_raw_scroll_sample(150.0, now);

        assert!(header.cancel_pending_settle());
        assert!(!header.poll_settle(now + Duration::from_secs(1)));
        assert!((header.header_offset() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_height_change_reclamps_offset() {
        let mut header = controller();
        header.on_scroll(0.0, 90.0, 0.0);
        assert_eq!(header.header_offset(), 90.0);

        header.on_header_height_measured(50.0);
        assert_eq!(header.header_offset(), 50.0);
    }

    #[test]
    fn test_change_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut header = controller();

        let seen_clone = seen.clone();
        let id = header.on_change(move |state| {
            seen_clone.lock().unwrap().push(state.header_offset);
        });

        header.on_scroll(0.0, 10.0, 0.0);
        header.on_scroll(10.0, 20.0, 0.0);
        assert_eq!(*seen.lock().unwrap(), vec![10.0, 20.0]);

        assert!(header.remove_listener(id));
        header.on_scroll(20.0, 30.0, 0.0);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_preferences_follow_state() {
        let mut header = controller();
        header.on_scroll(0.0, 14.0, 0.0);

        let prefs = header.preferences();
        assert_eq!(prefs.offset, 14.0);
        assert!((prefs.opacity - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = HeaderScrollConfig {
            fade_distance: -1.0,
            ..Default::default()
        };
        assert!(HeaderScrollController::with_config(config).is_err());
    }
}
