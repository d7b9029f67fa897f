//! Animated values driven by theme spring curves.
//!
//! An [`AnimatedValue`] holds a target, the value currently on screen and
//! whether a run is in flight. Each new target starts a fresh run from
//! whatever is on screen at that moment; runs never queue.

use abacus_theme::CurveDescriptor;

/// Natural frequency of a critically damped run, in units of the curve
/// duration. Leaves < 0.1% of the distance at t = 1.
const SETTLE_OMEGA: f64 = 10.0;

/// Minimum decay exponent at t = 1 for underdamped runs.
const SETTLE_DECAY: f64 = 7.0;

/// Normalized spring step response.
///
/// `t` is time as a fraction of the curve duration. Returns 0 at `t <= 0`
/// and exactly 1 at `t >= 1`. With `bounce == 0` the response is
/// monotonic and never exceeds 1; with `bounce > 0` it overshoots and
/// rings down.
#[must_use]
pub fn spring_progress(t: f64, bounce: f64) -> f64 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    if bounce <= 0.0 {
        let wt = SETTLE_OMEGA * t;
        return 1.0 - (-wt).exp() * (1.0 + wt);
    }

    let zeta = (1.0 - bounce).max(0.01);
    let omega = (SETTLE_DECAY / zeta).max(SETTLE_OMEGA);
    let damped = omega * (1.0 - zeta * zeta).sqrt();
    let decay = (-zeta * omega * t).exp();
    1.0 - decay * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    /// Value currently displayed.
    current: f64,
    /// Value being animated toward.
    target: f64,
    /// Displayed value when the current run started.
    start: f64,
    /// Seconds since the current run started.
    elapsed: f64,
    /// Curve for the next and current run.
    curve: CurveDescriptor,
    /// A run is in progress.
    in_flight: bool,
}

impl AnimatedValue {
    /// Creates a settled value.
    #[must_use]
    pub fn new(value: f64, curve: CurveDescriptor) -> Self {
        let value = finite_or_zero(value);
        Self {
            current: value,
            target: value,
            start: value,
            elapsed: 0.0,
            curve,
            in_flight: false,
        }
    }

    /// Creates a value that starts at `baseline` and animates to `target`.
    ///
    /// This is how widgets mount: the first frame shows the baseline.
    #[must_use]
    pub fn mounted(baseline: f64, target: f64, curve: CurveDescriptor) -> Self {
        let mut value = Self::new(baseline, curve);
        value.set_target(target);
        value
    }

    /// Returns the displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns true while a run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight
    }

    /// Returns the curve.
    #[must_use]
    pub fn curve(&self) -> CurveDescriptor {
        self.curve
    }

    /// Changes the curve used by subsequent runs.
    pub fn set_curve(&mut self, curve: CurveDescriptor) {
        self.curve = curve;
    }

    /// Sets a new target, starting a run from the displayed value.
    ///
    /// Supersedes any run in flight. Non-finite targets are treated as 0.
    /// Returns false if the target is exactly the current one.
    #[allow(clippy::float_cmp)]
    pub fn set_target(&mut self, target: f64) -> bool {
        let target = finite_or_zero(target);
        if target == self.target {
            return false;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.in_flight = true;
        true
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f64) {
        let value = finite_or_zero(value);
        self.current = value;
        self.target = value;
        self.start = value;
        self.elapsed = 0.0;
        self.in_flight = false;
    }

    /// Advances the run by `dt` seconds.
    ///
    /// Returns true if the displayed value moved this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.in_flight {
            return false;
        }

        self.elapsed += f64::from(dt.max(0.0));
        let duration = f64::from(self.curve.duration);
        let t = if duration > 0.0 { self.elapsed / duration } else { 1.0 };

        let eased = spring_progress(t, f64::from(self.curve.bounce));
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if t >= 1.0 {
            self.current = self.target;
            self.in_flight = false;
        }
        true
    }
}

/// Maps NaN and infinities to 0.
#[inline]
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Linear interpolation.
#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use abacus_theme::CurveName;

    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(value: &mut AnimatedValue) {
        for _ in 0..600 {
            value.tick(FRAME);
        }
    }

    #[test]
    fn test_critically_damped_is_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let p = spring_progress(f64::from(i) / 100.0, 0.0);
            assert!(p >= previous, "step {i}");
            assert!(p <= 1.0);
            previous = p;
        }
        assert!((previous - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bouncy_overshoots_then_settles() {
        let peak = (0..100)
            .map(|i| spring_progress(f64::from(i) / 100.0, 0.3))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "bouncy spring should overshoot: {peak}");
        assert!((spring_progress(1.0, 0.3) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mount_starts_at_baseline() {
        let mut value = AnimatedValue::mounted(0.0, 0.75, CurveName::Smooth.builtin());
        assert!(value.value().abs() < f64::EPSILON);
        assert!(value.is_animating());

        settle(&mut value);
        assert!((value.value() - 0.75).abs() < f64::EPSILON);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let mut value = AnimatedValue::mounted(0.0, 100.0, CurveName::Standard.builtin());
        for _ in 0..5 {
            value.tick(FRAME);
        }
        let reached = value.value();
        assert!(reached > 0.0 && reached < 100.0);

        value.set_target(20.0);
        // No time has passed: the new run starts where the old one stopped.
        assert!((value.value() - reached).abs() < f64::EPSILON);

        settle(&mut value);
        assert!((value.value() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut value = AnimatedValue::mounted(0.0, 1.0, CurveName::Quick.builtin());
        value.tick(FRAME);
        assert!(!value.set_target(1.0));
        assert!(value.is_animating());
    }

    #[test]
    fn test_tiny_retarget_is_not_swallowed() {
        let mut value = AnimatedValue::mounted(0.0, 1.0, CurveName::Quick.builtin());
        settle(&mut value);
        assert!(value.set_target(1.000_05));
        assert!(value.is_animating());
        settle(&mut value);
        assert!((value.value() - 1.000_05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_target_degrades_to_zero() {
        let mut value = AnimatedValue::new(5.0, CurveName::Quick.builtin());
        value.set_target(f64::NAN);
        settle(&mut value);
        assert!(value.value().abs() < f64::EPSILON);
    }

    #[test]
    fn test_settled_tick_reports_no_motion() {
        let mut value = AnimatedValue::new(3.0, CurveName::Quick.builtin());
        assert!(!value.tick(FRAME));
        value.set_immediate(4.0);
        assert!(!value.tick(FRAME));
        assert!((value.value() - 4.0).abs() < f64::EPSILON);
    }
}
