//! Notification port.

use super::Toast;

/// Sink for toasts raised by services.
///
/// Notifying never fails; presentation layers decide how to render.
pub trait Notifier: Send + Sync {
    /// Shows a toast.
    fn notify(&self, toast: Toast);
}

