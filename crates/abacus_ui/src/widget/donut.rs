//! Donut chart with tap-to-select segments.
//!
//! Segments are identified by caller-supplied keys. Two segments with the
//! same value and label are still different segments if their keys differ.
//!
//! Replacing the segment list runs one batch transition: every span moves
//! from its on-screen geometry to the new one under a single shared
//! progress value.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use abacus_theme::{Color, ColorToken, CurveName, FontToken, HapticKind, Theme};
use tracing::debug;

use crate::accessibility::{AccessibilityNode, Role};
use crate::animation::{finite_or_zero, lerp, AnimatedValue};
use crate::format::{format_percent, safe_ratio};
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::progress::RING_START_DEGREES;
use crate::widget::{Widget, WidgetResponse, WidgetState};

/// Stable identity of a segment across updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentKey(String);

impl SegmentKey {
    /// Creates a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SegmentKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for SegmentKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One slice of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Identity.
    pub key: SegmentKey,
    /// Magnitude. Negative and non-finite values count as 0.
    pub value: f64,
    /// Display label.
    pub label: String,
    /// Fill color; `None` uses the chart palette by position.
    pub color: Option<Color>,
}

impl Segment {
    /// Creates a segment labeled with its key.
    #[must_use]
    pub fn new(key: impl Into<SegmentKey>, value: f64) -> Self {
        let key = key.into();
        Self {
            label: key.as_str().to_owned(),
            key,
            value,
            color: None,
        }
    }

    /// Creates a segment with a separate label.
    #[must_use]
    pub fn labeled(key: impl Into<SegmentKey>, value: f64, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value,
            label: label.into(),
            color: None,
        }
    }

    /// Sets an explicit fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn magnitude(&self) -> f64 {
        finite_or_zero(self.value).max(0.0)
    }
}

/// Angular extent of one segment, in degrees clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpan {
    /// Segment this span belongs to.
    pub key: SegmentKey,
    /// Start angle.
    pub start_degrees: f64,
    /// End angle.
    pub end_degrees: f64,
}

impl SegmentSpan {
    /// Arc length in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }

    /// Returns true if `degrees` falls in `[start, end)`.
    #[must_use]
    pub fn contains(&self, degrees: f64) -> bool {
        degrees >= self.start_degrees && degrees < self.end_degrees
    }

    fn collapsed(key: SegmentKey, at: f64) -> Self {
        Self {
            key,
            start_degrees: at,
            end_degrees: at,
        }
    }
}

/// Computes each segment's span, starting at 12 o'clock.
///
/// A segment covers `360 * before / total` to `360 * through / total`,
/// offset by -90. When the total is not positive every span is zero-width
/// at 12 o'clock.
#[must_use]
pub fn segment_spans(segments: &[Segment]) -> Vec<SegmentSpan> {
    let total: f64 = segments.iter().map(Segment::magnitude).sum();
    let mut cumulative = 0.0;

    segments
        .iter()
        .map(|segment| {
            let start = RING_START_DEGREES + 360.0 * safe_ratio(cumulative, total);
            cumulative += segment.magnitude();
            let end = RING_START_DEGREES + 360.0 * safe_ratio(cumulative, total);
            SegmentSpan {
                key: segment.key.clone(),
                start_degrees: start,
                end_degrees: end,
            }
        })
        .collect()
}

/// Normalizes an angle into `[-90, 270)`, the range spans are laid out in.
fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = (degrees - RING_START_DEGREES).rem_euclid(360.0);
    wrapped + RING_START_DEGREES
}

/// Donut chart.
pub struct DonutChart {
    state: WidgetState,
    theme: Arc<Theme>,
    title: String,
    segments: Vec<Segment>,
    /// Geometry at the start of the running transition.
    from: Vec<SegmentSpan>,
    /// Geometry at the end of the running transition.
    to: Vec<SegmentSpan>,
    /// Shared transition progress, 0 to 1.
    transition: AnimatedValue,
    selected: Option<SegmentKey>,
    thickness: f32,
}

impl DonutChart {
    /// Default ring thickness.
    pub const DEFAULT_THICKNESS: f32 = 28.0;

    /// Dim factor applied to unselected segments while one is selected.
    pub const UNSELECTED_ALPHA: f32 = 0.35;

    /// Creates a chart whose segments grow in from 12 o'clock.
    #[must_use]
    pub fn new(
        theme: Arc<Theme>,
        rect: Rect,
        title: impl Into<String>,
        segments: Vec<Segment>,
    ) -> Self {
        let to = segment_spans(&segments);
        let from = to
            .iter()
            .map(|span| SegmentSpan::collapsed(span.key.clone(), RING_START_DEGREES))
            .collect();
        let curve = theme.curve(CurveName::Gentle);

        Self {
            state: WidgetState::new(rect),
            theme,
            title: title.into(),
            segments,
            from,
            to,
            transition: AnimatedValue::mounted(0.0, 1.0, curve),
            selected: None,
            thickness: Self::DEFAULT_THICKNESS,
        }
    }

    /// Sets the ring thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Segments as last set.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of all segment magnitudes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.segments.iter().map(Segment::magnitude).sum()
    }

    /// Currently selected segment.
    #[must_use]
    pub fn selected(&self) -> Option<&SegmentKey> {
        self.selected.as_ref()
    }

    /// Returns true while a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Spans when the running transition completes.
    #[must_use]
    pub fn target_spans(&self) -> &[SegmentSpan] {
        &self.to
    }

    /// Spans as currently drawn.
    #[must_use]
    pub fn displayed_spans(&self) -> Vec<SegmentSpan> {
        if !self.transition.is_animating() {
            return self.to.clone();
        }
        let t = self.transition.value();
        self.from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| SegmentSpan {
                key: to.key.clone(),
                start_degrees: lerp(from.start_degrees, to.start_degrees, t),
                end_degrees: lerp(from.end_degrees, to.end_degrees, t),
            })
            .collect()
    }

    /// Replaces the segments with one batch transition.
    ///
    /// Kept keys move from their displayed geometry; new keys grow from
    /// zero width at their new start; removed keys disappear. A selection
    /// whose key was removed is cleared.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        let displayed = self.displayed_spans();
        let to = segment_spans(&segments);
        let from = to
            .iter()
            .map(|span| {
                displayed
                    .iter()
                    .find(|current| current.key == span.key)
                    .cloned()
                    .unwrap_or_else(|| SegmentSpan::collapsed(span.key.clone(), span.start_degrees))
            })
            .collect();

        if let Some(selected) = &self.selected {
            if !to.iter().any(|span| &span.key == selected) {
                debug!(key = %selected, "selected segment removed, clearing selection");
                self.selected = None;
            }
        }

        debug!(
            previous = self.segments.len(),
            next = segments.len(),
            "donut segment transition"
        );

        self.segments = segments;
        self.from = from;
        self.to = to;
        self.transition.set_immediate(0.0);
        self.transition.set_target(1.0);
        self.state.mark_dirty();
    }

    /// Selects `key`, or deselects it if it is already selected.
    ///
    /// Unknown keys are ignored. Returns true if `key` is selected afterwards.
    pub fn toggle_selection(&mut self, key: &SegmentKey) -> bool {
        if !self.segments.iter().any(|segment| &segment.key == key) {
            return false;
        }

        let now_selected = if self.selected.as_ref() == Some(key) {
            self.selected = None;
            false
        } else {
            self.selected = Some(key.clone());
            true
        };

        self.theme.trigger_haptic(HapticKind::Selection);
        self.state.mark_dirty();
        now_selected
    }

    /// Clears any selection.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.state.mark_dirty();
        }
    }

    /// Center and stroke radius of the ring.
    fn ring(&self) -> ((f32, f32), f32) {
        let rect = self.state.rect;
        let radius = (rect.inscribed_radius() - self.thickness * 0.5).max(0.0);
        (rect.center(), radius)
    }

    /// Segment under a point, hit-tested against the ring annulus.
    #[must_use]
    pub fn segment_at(&self, x: f32, y: f32) -> Option<SegmentKey> {
        let ((cx, cy), radius) = self.ring();
        let dx = f64::from(x - cx);
        let dy = f64::from(y - cy);
        let distance = dx.hypot(dy);
        let half = f64::from(self.thickness) * 0.5;
        let radius = f64::from(radius);
        if distance < radius - half || distance > radius + half {
            return None;
        }

        let angle = normalize_degrees(dy.atan2(dx).to_degrees());
        self.displayed_spans()
            .into_iter()
            .find(|span| span.sweep() > 0.0 && span.contains(angle))
            .map(|span| span.key)
    }

    fn segment_color(&self, index: usize, segment: &Segment) -> Color {
        segment
            .color
            .unwrap_or_else(|| self.theme.chart_color(index, self.theme.appearance()))
    }

    fn selected_segment(&self) -> Option<&Segment> {
        let key = self.selected.as_ref()?;
        self.segments.iter().find(|segment| &segment.key == key)
    }
}

impl Widget for DonutChart {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if self.state.is_enabled() && input.tapped_in(self.state.rect) {
            let (x, y) = input.press_origin();
            if let Some(key) = self.segment_at(x, y) {
                self.toggle_selection(&key);
                response.tapped = true;
                response.changed = true;
            }
        }

        if self.transition.tick(dt) {
            self.state.mark_dirty();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let (center, radius) = self.ring();
        let spans = self.displayed_spans();

        if spans.iter().all(|span| span.sweep() <= 0.0) {
            commands.push(RenderCommand::Arc {
                center,
                radius,
                thickness: self.thickness,
                start_degrees: RING_START_DEGREES as f32,
                end_degrees: RING_START_DEGREES as f32 + 360.0,
                color: theme.current(ColorToken::Track),
            });
        }

        for (index, (segment, span)) in self.segments.iter().zip(&spans).enumerate() {
            if span.sweep() <= 0.0 {
                continue;
            }
            let mut color = self.segment_color(index, segment);
            if self.selected.as_ref().is_some_and(|key| key != &segment.key) {
                color = color.with_alpha(color.a * Self::UNSELECTED_ALPHA);
            }
            commands.push(RenderCommand::Arc {
                center,
                radius,
                thickness: self.thickness,
                start_degrees: span.start_degrees as f32,
                end_degrees: span.end_degrees as f32,
                color,
            });
        }

        let (headline, caption) = match self.selected_segment() {
            Some(segment) => (
                format_percent(safe_ratio(segment.magnitude(), self.total()), 0),
                segment.label.clone(),
            ),
            None => (String::new(), self.title.clone()),
        };
        if !headline.is_empty() {
            commands.push(RenderCommand::Text {
                text: headline,
                x: center.0,
                y: center.1,
                color: theme.current(ColorToken::TextPrimary),
                font: theme.font(FontToken::Headline),
                align: TextAlign::Center,
            });
        }
        let caption_font = theme.font(FontToken::Caption);
        commands.push(RenderCommand::Text {
            text: caption,
            x: center.0,
            y: center.1 + caption_font.size * 1.5,
            color: theme.current(ColorToken::TextSecondary),
            font: caption_font,
            align: TextAlign::Center,
        });
    }

    fn accessibility(&self) -> AccessibilityNode {
        let total = self.total();
        let summary = self
            .segments
            .iter()
            .map(|segment| {
                format!(
                    "{} {}",
                    segment.label,
                    format_percent(safe_ratio(segment.magnitude(), total), 0)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        let node = AccessibilityNode::new(Role::Chart, self.title.clone()).with_value(summary);
        match self.selected_segment() {
            Some(segment) => node.with_hint(format!("{} selected", segment.label)),
            None => node.with_hint("Tap a segment to select it"),
        }
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
