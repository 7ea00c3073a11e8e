// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! A toast is a transient message overlaid on the application content. Each
//! toast owns its own lifecycle (auto-dismiss, close request, exit
//! animation); a host lays out any number of them without coordinating.
//!
//! # Components
//!
//! - [`ToastDescriptor`] - Message, kind and dismissal behavior of a toast
//! - [`ToastLifecycle`] - Timed `Visible → Closing → Closed` state machine
//! - [`ToastStack`] - Caller-owned ordered collection of lifecycles
//! - [`host`] - Layout container pinning toasts to an [`Anchor`]
//!
//! # Usage
//!
//! ```ignore
//! use iced_uikit::ui::toast::{ToastDescriptor, ToastStack};
//!
//! let mut toasts = ToastStack::new();
//! toasts.push(ToastDescriptor::success("Profile saved"), now);
//!
//! // On every tick
//! for id in toasts.tick(now) {
//!     // toast `id` fully closed
//! }
//!
//! // In your view function
//! let overlay = toasts.view(now, Anchor::TopRight).map(Message::Toast);
//! ```

mod descriptor;
pub mod host;
mod kind;
mod lifecycle;
mod stack;
mod timer;
mod view;

pub use descriptor::{AutoDismiss, ToastDescriptor};
pub use host::Anchor;
pub use kind::ToastKind;
pub use lifecycle::{Phase, ToastLifecycle, Transition};
pub use stack::{Event as ToastEvent, Message as ToastMessage, ToastId, ToastStack};
pub use timer::Timer;
pub use view::{toast as view_toast, CLOSE_LABEL};
