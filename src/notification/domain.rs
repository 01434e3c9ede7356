//! Toast notification values.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    /// Informational confirmation.
    #[default]
    Default,
    /// Failure that the user should notice.
    Destructive,
}

/// Short-lived message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    title: String,
    description: Option<String>,
    variant: ToastVariant,
    duration: Option<Duration>,
}

impl Toast {
    /// Creates a default-variant toast with a title only.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
            duration: None,
        }
    }

    /// Creates a destructive toast with a title and description.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title)
            .with_description(description)
            .with_variant(ToastVariant::Destructive)
    }

    /// Sets the description line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the variant.
    #[must_use]
    pub const fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets how long the toast stays visible.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the variant.
    #[must_use]
    pub const fn variant(&self) -> ToastVariant {
        self.variant
    }

    /// Returns the display duration, if one was set.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns `true` for destructive toasts.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
