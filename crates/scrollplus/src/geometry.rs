//! Scroll geometry helpers
//!
//! Turn the layout measurements a host reports (content frame origin,
//! content and viewport heights, header frame height, safe-area insets) into
//! the samples the header controller consumes.

/// Derives clamped and raw scroll offsets from the content frame
///
/// `update` reports a change only when a value differs from the previous
/// measurement, so the first measurement establishes the baseline.
#[derive(Debug, Clone, Default)]
pub struct ContentGeometry {
    last_clamped: Option<f32>,
    last_raw: Option<f32>,
}

/// Offsets that changed since the previous measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryChange {
    /// `(old, new)` clamped offset, for `HeaderScrollController::on_scroll`
    pub clamped: Option<(f32, f32)>,
    /// New raw offset, for `HeaderScrollController::on_raw_scroll_sample`
    pub raw: Option<f32>,
}

impl GeometryChange {
    pub fn is_empty(&self) -> bool {
        self.clamped.is_none() && self.raw.is_none()
    }
}

impl ContentGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll offset clamped to `0..=|content_height - viewport_height|`
    ///
    /// `frame_min_y` is the content's top edge in the scroll view's
    /// coordinate space (negative once scrolled).
    pub fn clamped_offset(frame_min_y: f32, content_height: f32, viewport_height: f32) -> f32 {
        let max_offset = (content_height - viewport_height).abs();
        let offset = -frame_min_y;
        if !offset.is_finite() || !max_offset.is_finite() {
            return 0.0;
        }
        offset.min(max_offset).max(0.0)
    }

    /// Unclamped scroll offset, including overscroll at either edge
    pub fn raw_offset(frame_min_y: f32) -> f32 {
        if frame_min_y.is_finite() {
            -frame_min_y
        } else {
            0.0
        }
    }

    /// Record a new measurement and report which offsets changed
    pub fn update(
        &mut self,
        frame_min_y: f32,
        content_height: f32,
        viewport_height: f32,
    ) -> GeometryChange {
        let clamped = Self::clamped_offset(frame_min_y, content_height, viewport_height);
        let raw = Self::raw_offset(frame_min_y);

        let change = GeometryChange {
            clamped: match self.last_clamped {
                Some(old) if old != clamped => Some((old, clamped)),
                _ => None,
            },
            raw: match self.last_raw {
                Some(old) if old != raw => Some(raw),
                _ => None,
            },
        };

        self.last_clamped = Some(clamped);
        self.last_raw = Some(raw);
        change
    }

    pub fn last_clamped(&self) -> Option<f32> {
        self.last_clamped
    }
}

/// Tracks the measured header height
#[derive(Debug, Clone, Default)]
pub struct HeaderGeometry {
    last_height: Option<f32>,
}

impl HeaderGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header frame height plus the top safe-area inset it sits under
    pub fn measured_height(frame_height: f32, safe_top: f32) -> f32 {
        let height = frame_height.max(0.0) + safe_top.max(0.0);
        if height.is_finite() {
            height
        } else {
            0.0
        }
    }

    /// Record a layout pass; returns the height when it changed
    pub fn measure(&mut self, frame_height: f32, safe_top: f32) -> Option<f32> {
        let height = Self::measured_height(frame_height, safe_top);
        if self.last_height == Some(height) {
            return None;
        }
        self.last_height = Some(height);
        Some(height)
    }
}
