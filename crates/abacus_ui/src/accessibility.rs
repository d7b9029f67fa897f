//! Accessibility export.
//!
//! Every widget describes itself as an [`AccessibilityNode`] each frame.
//! Range controls additionally implement [`Adjustable`], which assistive
//! technology uses to step the value up or down.

/// What kind of control a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Progress ring or bar.
    ProgressIndicator,
    /// Read-only text or number.
    StaticText,
    /// Stepper or slider.
    Adjustable,
    /// Editable text.
    TextField,
    /// Chart with selectable parts.
    Chart,
    /// Group of related values (stat card).
    Summary,
}

/// Accessible description of one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityNode {
    /// Control kind.
    pub role: Role,
    /// Short name ("Monthly payment").
    pub label: String,
    /// Current value as spoken text.
    pub value: Option<String>,
    /// What happens on activation.
    pub hint: Option<String>,
}

impl AccessibilityNode {
    /// Creates a node with a label and no value.
    #[must_use]
    pub fn new(role: Role, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            value: None,
            hint: None,
        }
    }

    /// Sets the spoken value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Increment/decrement protocol for range controls.
pub trait Adjustable {
    /// Steps the value up. Returns true if it changed.
    fn accessibility_increment(&mut self) -> bool;

    /// Steps the value down. Returns true if it changed.
    fn accessibility_decrement(&mut self) -> bool;
}
