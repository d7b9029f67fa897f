//! Named animation curves.
//!
//! A curve is a spring described by how long it takes to settle and how
//! much it bounces. `bounce == 0` is critically damped: it approaches the
//! target without ever passing it.

use serde::Deserialize;

/// Named animation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveName {
    /// Effectively a jump; used when motion would be noise.
    Instant,
    /// Small state changes (button presses, toggles).
    Quick,
    /// Default for value changes.
    Standard,
    /// Large value changes (progress rings, counters).
    Smooth,
    /// Slow reveal on first appearance.
    Gentle,
    /// Playful overshoot (selection, celebration).
    Bouncy,
    /// Short spring with a little overshoot.
    Snappy,
    /// Tracks the finger during drags.
    Interactive,
}

impl CurveName {
    /// Number of named curves.
    pub const COUNT: usize = 8;

    /// All named curves.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Instant,
        Self::Quick,
        Self::Standard,
        Self::Smooth,
        Self::Gentle,
        Self::Bouncy,
        Self::Snappy,
        Self::Interactive,
    ];

    /// Slot in the curve table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Built-in descriptor for this curve.
    #[must_use]
    pub const fn builtin(self) -> CurveDescriptor {
        match self {
            Self::Instant => CurveDescriptor::new(0.05, 0.0),
            Self::Quick => CurveDescriptor::new(0.2, 0.0),
            Self::Standard => CurveDescriptor::new(0.35, 0.0),
            Self::Smooth => CurveDescriptor::new(0.5, 0.0),
            Self::Gentle => CurveDescriptor::new(0.8, 0.0),
            Self::Bouncy => CurveDescriptor::new(0.6, 0.3),
            Self::Snappy => CurveDescriptor::new(0.3, 0.15),
            Self::Interactive => CurveDescriptor::new(0.15, 0.0),
        }
    }
}

/// Spring parameters for one curve.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurveDescriptor {
    /// Settle time in seconds. Always > 0.
    pub duration: f32,
    /// Overshoot factor in `[0, 1)`. Zero never overshoots.
    #[serde(default)]
    pub bounce: f32,
}

impl CurveDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(duration: f32, bounce: f32) -> Self {
        Self { duration, bounce }
    }

    /// Returns true if the descriptor can drive an animation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.duration.is_finite()
            && self.duration > 0.0
            && self.bounce.is_finite()
            && (0.0..1.0).contains(&self.bounce)
    }

    /// Returns true if values driven by this curve may pass their target.
    #[must_use]
    pub fn overshoots(&self) -> bool {
        self.bounce > 0.0
    }
}
