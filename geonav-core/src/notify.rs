//! Transient user-facing notifications.
//!
//! A toast plus a console diagnostic is the maximum severity anything in
//! the ordering path may reach; nothing here is allowed to be fatal to the
//! surrounding application.

/// Tone of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    /// The action completed with a real result.
    Success,
    /// The action fell back or could not complete.
    Failure,
}

/// A transient, non-blocking notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message shown to the user.
    pub message: String,
    /// Visual tone of the notification.
    pub tone: ToastTone,
}

impl Toast {
    /// Build a success-toned toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: ToastTone::Success,
        }
    }

    /// Build a failure-toned toast.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: ToastTone::Failure,
        }
    }
}

/// Sink consuming transient notifications.
///
/// The surrounding shell supplies the real implementation; tests use
/// [`crate::test_support::RecordingSink`].
pub trait NotificationSink {
    /// Deliver a toast to the user.
    fn notify(&mut self, toast: Toast);
}
