// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied description of a toast.

use super::kind::ToastKind;
use crate::config::DEFAULT_TOAST_DURATION_MS;
use std::time::Duration;

/// Controls automatic dismissal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
    /// Never auto-dismiss; only an explicit close request moves the toast.
    Never,
    /// Auto-dismiss after the specified duration.
    After(Duration),
}

impl AutoDismiss {
    /// Converts a signed millisecond count.
    ///
    /// Zero and negative values disable auto-dismiss instead of failing.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        match u64::try_from(ms) {
            Ok(0) | Err(_) => AutoDismiss::Never,
            Ok(ms) => AutoDismiss::After(Duration::from_millis(ms)),
        }
    }

    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AutoDismiss::Never => None,
            AutoDismiss::After(d) if d.is_zero() => None,
            AutoDismiss::After(d) => Some(d),
        }
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::After(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

/// Immutable description of a toast: what it says and how it behaves.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDescriptor {
    message: String,
    kind: ToastKind,
    auto_dismiss: AutoDismiss,
    closable: bool,
    initially_open: bool,
}

impl ToastDescriptor {
    /// Creates an info toast with default timing, closable and open.
    ///
    /// The message is rendered as-is; an empty message is allowed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::default(),
            auto_dismiss: AutoDismiss::default(),
            closable: true,
            initially_open: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Warning)
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, auto_dismiss: AutoDismiss) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    /// Sets the auto-dismiss delay in milliseconds; see [`AutoDismiss::from_millis`].
    #[must_use]
    pub fn duration_ms(self, ms: i64) -> Self {
        self.auto_dismiss(AutoDismiss::from_millis(ms))
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn initially_open(mut self, open: bool) -> Self {
        self.initially_open = open;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn toast_kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn auto_dismiss_policy(&self) -> AutoDismiss {
        self.auto_dismiss
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn is_initially_open(&self) -> bool {
        self.initially_open
    }
}
