//! Values confined to an inclusive range.
//!
//! Shared by steppers and sliders. Stepping past a bound is a no-op, not a
//! wrap and not an error.

use crate::animation::finite_or_zero;
use crate::format::safe_ratio;

/// A value clamped to `[lower, upper]` with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedValue {
    value: f64,
    lower: f64,
    upper: f64,
    step: f64,
}

impl BoundedValue {
    /// Creates a bounded value.
    ///
    /// Swapped bounds are reordered, a non-positive or non-finite step
    /// becomes 1 and the initial value is clamped into range.
    #[must_use]
    pub fn new(value: f64, lower: f64, upper: f64, step: f64) -> Self {
        let (lower, upper) = {
            let (a, b) = (finite_or_zero(lower), finite_or_zero(upper));
            if a <= b { (a, b) } else { (b, a) }
        };
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        let value = if value.is_finite() { value } else { lower };

        Self {
            value: value.clamp(lower, upper),
            lower,
            upper,
            step,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns true at the upper bound.
    #[must_use]
    pub fn at_upper(&self) -> bool {
        self.value >= self.upper
    }

    /// Returns true at the lower bound.
    #[must_use]
    pub fn at_lower(&self) -> bool {
        self.value <= self.lower
    }

    /// Steps up. No-op at the upper bound; returns true if the value changed.
    pub fn increment(&mut self) -> bool {
        if self.at_upper() {
            return false;
        }
        self.value = self.snap(self.value + self.step).min(self.upper);
        true
    }

    /// Steps down. No-op at the lower bound; returns true if the value changed.
    pub fn decrement(&mut self) -> bool {
        if self.at_lower() {
            return false;
        }
        self.value = self.snap(self.value - self.step).max(self.lower);
        true
    }

    /// Sets the value, clamped. Non-finite input is ignored.
    ///
    /// Returns true if the value changed.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = value.clamp(self.lower, self.upper);
        let changed = (clamped - self.value).abs() > f64::EPSILON;
        self.value = clamped;
        changed
    }

    /// Position of the value within the range, in `[0, 1]`.
    ///
    /// An empty range reports 0.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        safe_ratio(self.value - self.lower, self.upper - self.lower)
    }

    /// Value at a linear position in the range; `fraction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn value_at_fraction(&self, fraction: f64, snap: bool) -> f64 {
        let fraction = finite_or_zero(fraction).clamp(0.0, 1.0);
        let raw = self.lower + (self.upper - self.lower) * fraction;
        if snap {
            self.snap(raw).clamp(self.lower, self.upper)
        } else {
            raw
        }
    }

    /// Rounds to the step grid anchored at the lower bound.
    ///
    /// Keeps repeated decimal steps (0.1 + 0.1 + 0.1) on the grid.
    fn snap(&self, value: f64) -> f64 {
        self.lower + ((value - self.lower) / self.step).round() * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_at_upper_is_noop() {
        let mut term = BoundedValue::new(7.0, 1.0, 7.0, 1.0);
        assert!(!term.increment());
        assert!((term.value() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decrement_at_lower_is_noop() {
        let mut term = BoundedValue::new(1.0, 1.0, 7.0, 1.0);
        assert!(!term.decrement());
        assert!((term.value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_step_clamps_to_bound() {
        let mut rate = BoundedValue::new(9.0, 0.0, 10.0, 4.0);
        assert!(rate.increment());
        assert!((rate.value() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decimal_steps_stay_on_grid() {
        let mut rate = BoundedValue::new(0.0, 0.0, 1.0, 0.1);
        for _ in 0..3 {
            rate.increment();
        }
        assert!((rate.value() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_constructor_normalizes() {
        let value = BoundedValue::new(50.0, 10.0, 0.0, -2.0);
        assert!((value.lower() - 0.0).abs() < f64::EPSILON);
        assert!((value.upper() - 10.0).abs() < f64::EPSILON);
        assert!((value.step() - 1.0).abs() < f64::EPSILON);
        assert!((value.value() - 10.0).abs() < f64::EPSILON);

        let nan = BoundedValue::new(f64::NAN, 2.0, 4.0, 1.0);
        assert!((nan.value() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fraction_mapping() {
        let amount = BoundedValue::new(0.0, 100.0, 300.0, 25.0);
        assert!((amount.value_at_fraction(0.5, false) - 200.0).abs() < f64::EPSILON);
        assert!((amount.value_at_fraction(-3.0, false) - 100.0).abs() < f64::EPSILON);
        assert!((amount.value_at_fraction(7.0, false) - 300.0).abs() < f64::EPSILON);
        assert!((amount.value_at_fraction(0.33, true) - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_range_fraction_is_zero() {
        let pinned = BoundedValue::new(5.0, 5.0, 5.0, 1.0);
        assert!(pinned.fraction().abs() < f64::EPSILON);
    }
}
