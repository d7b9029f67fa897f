//! # ABACUS UI
//!
//! Animated value widgets for a personal-finance calculator:
//! - Progress rings and bars that spring toward their target
//! - Donut charts with keyed segments and tap-to-select
//! - Rolling counters and stat cards
//! - Steppers, sliders and currency fields
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      FRAME LOOP                          │
//! ├─────────────────────────────────────────────────────────┤
//! │  InputState → Widget::update → dirty? render : cached   │
//! │       ↓              ↓                    ↓             │
//! │  Hit Testing   AnimatedValue tick   Frame (commands,    │
//! │                                      accessibility)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is headless: widgets emit [`RenderCommand`]s and
//! [`AccessibilityNode`]s, the host draws and speaks them.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use abacus_theme::Theme;
//! use abacus_ui::{InputState, ProgressRing, Rect, Screen};
//!
//! let theme = Arc::new(Theme::new());
//! let mut screen = Screen::new(Arc::clone(&theme), Rect::new(0.0, 0.0, 390.0, 844.0));
//! let ring = screen.add(ProgressRing::new(
//!     theme,
//!     Rect::new(20.0, 20.0, 160.0, 160.0),
//!     "Paid off",
//!     0.4,
//! ));
//!
//! let input = InputState::new();
//! let frame = screen.frame(&input, 1.0 / 60.0);
//! assert!(frame.response(ring).is_none());
//! assert!(!frame.commands.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod accessibility;
pub mod animation;
pub mod format;
pub mod input;
pub mod layout;
pub mod range;
pub mod render;
pub mod screen;
pub mod widget;

pub use accessibility::{AccessibilityNode, Adjustable, Role};
pub use animation::{spring_progress, AnimatedValue};
pub use format::{
    format_compact, format_currency, format_fixed, format_percent, safe_ratio, CurrencyFormat,
    ValueFormat,
};
pub use input::{InputState, Key};
pub use layout::Rect;
pub use range::BoundedValue;
pub use render::{RenderCommand, TextAlign, UIRenderer};
pub use screen::{Frame, Screen};
pub use widget::{
    filter_numeric, parse_or_zero, segment_spans, AnimatedCounter, CurrencyField, DonutChart,
    ProgressBar, ProgressRing, Segment, SegmentKey, SegmentSpan, Slider, StatCard, Stepper, Widget,
    WidgetFlags, WidgetId, WidgetResponse, WidgetState,
};
