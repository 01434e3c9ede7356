//! User-facing notifications.
//!
//! Every service reports outcomes through a [`ports::Notifier`] instead of
//! rendering anything itself. A confirmation is a [`domain::Toast`] with the
//! default variant; failures use the destructive variant.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{RecordingNotifier, TracingNotifier};
pub use domain::{Toast, ToastVariant};
pub use ports::Notifier;
