//! # ABACUS Theme
//!
//! Design-system tokens for the Abacus widget library:
//! - Semantic colors for light and dark appearance
//! - Spacing, corner radius, typography and shadow scales
//! - Named spring curves for animated values
//! - Haptic feedback behind a platform trait
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use abacus_theme::{Appearance, ColorToken, CurveName, Theme};
//!
//! let theme = Arc::new(Theme::builder().appearance(Appearance::Dark).build());
//! let fill = theme.current(ColorToken::Primary);
//! let curve = theme.curve(CurveName::Smooth);
//! assert!(curve.duration > 0.0);
//! # let _ = fill;
//! ```
//!
//! Lookups are total. The only fallible operation is loading a
//! [`ThemeConfig`] from TOML.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod config;
pub mod curve;
pub mod error;
pub mod haptics;
pub mod registry;
pub mod scale;
pub mod tokens;

pub use color::Color;
pub use config::{CurveOverrides, PaletteOverrides, ThemeConfig};
pub use curve::{CurveDescriptor, CurveName};
pub use error::{ThemeError, ThemeResult};
pub use haptics::{HapticEngine, HapticKind, NoHaptics, RecordingHaptics};
pub use registry::{Theme, ThemeBuilder};
pub use scale::{CornerRadius, FontDescriptor, FontToken, FontWeight, Shadow, ShadowToken, Spacing};
pub use tokens::{Appearance, ColorToken, Palette, CHART_PALETTE_LEN};
