//! Scroll event identifiers
//!
//! Events are plain `u32` identifiers so controller state enums can map
//! `(state, event)` pairs to transitions without carrying payloads.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// A new clamped scroll offset was applied
    pub const SCROLL: EventType = 30;
    /// Scrolling paused long enough for the header to snap
    pub const SCROLL_SETTLE: EventType = 33;
    /// Header settle animation reached its target
    pub const SETTLE_END: EventType = 34;

    /// Pan velocity crossed the hide threshold (content moving up fast)
    pub const HIDE_VELOCITY: EventType = 90;
    /// Pan velocity crossed the show threshold (content moving down fast)
    pub const SHOW_VELOCITY: EventType = 91;
}

/// Get a readable name for an event type (for logging)
pub fn event_name(event: EventType) -> &'static str {
    use event_types::*;
    match event {
        SCROLL => "scroll",
        SCROLL_SETTLE => "scroll_settle",
        SETTLE_END => "settle_end",
        HIDE_VELOCITY => "hide_velocity",
        SHOW_VELOCITY => "show_velocity",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::event_types::*;
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(event_name(SCROLL), "scroll");
        assert_eq!(event_name(HIDE_VELOCITY), "hide_velocity");
        assert_eq!(event_name(SHOW_VELOCITY), "show_velocity");
        assert_eq!(event_name(12345), "unknown");
    }
}
