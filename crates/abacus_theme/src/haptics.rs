//! Haptic feedback.
//!
//! The platform's haptic service sits behind [`HapticEngine`]. Calls are
//! fire-and-forget: an engine must not block and has no way to report
//! failure.

use parking_lot::Mutex;

/// Kind of haptic feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticKind {
    /// Light impact.
    Light,
    /// Medium impact.
    Medium,
    /// Heavy impact.
    Heavy,
    /// Success notification.
    Success,
    /// Warning notification.
    Warning,
    /// Error notification.
    Error,
    /// Selection tick.
    Selection,
}

/// Platform haptic service.
pub trait HapticEngine: Send + Sync {
    /// Plays the feedback. Must return immediately.
    fn trigger(&self, kind: HapticKind);
}

/// Engine that does nothing. Used on hosts without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticEngine for NoHaptics {
    fn trigger(&self, _kind: HapticKind) {}
}

/// Engine that records every trigger, for previews and tests.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: Mutex<Vec<HapticKind>>,
}

impl RecordingHaptics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<HapticKind> {
        self.events.lock().clone()
    }

    /// Returns and clears the recorded events.
    pub fn take(&self) -> Vec<HapticKind> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl HapticEngine for RecordingHaptics {
    fn trigger(&self, kind: HapticKind) {
        self.events.lock().push(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_engine() {
        let engine = RecordingHaptics::new();
        engine.trigger(HapticKind::Selection);
        engine.trigger(HapticKind::Success);

        assert_eq!(engine.events(), vec![HapticKind::Selection, HapticKind::Success]);
        assert_eq!(engine.take().len(), 2);
        assert!(engine.events().is_empty());
    }
}
