//! Widget system.
//!
//! Every widget owns a [`WidgetState`], holds the shared theme and
//! implements [`Widget`]. Widgets mark themselves dirty when their render
//! output changes; the [`Screen`](crate::screen::Screen) re-renders only
//! dirty widgets.

mod core;
mod counter;
mod currency_field;
mod donut;
mod progress;
mod slider;
mod stat_card;
mod stepper;

pub use core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use counter::AnimatedCounter;
pub use currency_field::{filter_numeric, parse_or_zero, CurrencyField};
pub use donut::{segment_spans, DonutChart, Segment, SegmentKey, SegmentSpan};
pub use progress::{ProgressBar, ProgressRing, RING_START_DEGREES};
pub use slider::Slider;
pub use stat_card::StatCard;
pub use stepper::{ChangeHandler, Stepper};
