// SPDX-License-Identifier: MPL-2.0
//! Caller-owned collection of independent toasts.
//!
//! The `ToastStack` routes close requests and ticks to the matching
//! [`ToastLifecycle`], drops toasts once they close through `Closing` and
//! reports each such closure once. Toasts hidden through their open flag stay
//! in the stack so they can be reopened. It never caps, queues or reorders toasts: display order is
//! insertion order.

use super::descriptor::ToastDescriptor;
use super::host::{self, Anchor};
use super::lifecycle::{clamp_exit_delay, Phase, ToastLifecycle, Transition};
use super::view;
use crate::config::DEFAULT_EXIT_ANIMATION_MS;
use iced::Element;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed on a toast.
    Close(ToastId),
    /// Periodic tick for evaluating timers.
    Tick(Instant),
}

/// Events propagated to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The toast finished its exit animation and was removed.
    Closed(ToastId),
}

#[derive(Debug, Clone)]
struct Entry {
    id: ToastId,
    lifecycle: ToastLifecycle,
}

#[derive(Debug, Clone)]
pub struct ToastStack {
    entries: Vec<Entry>,
    exit_delay: Duration,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_ANIMATION_MS),
        }
    }

    /// Sets the exit animation delay used for toasts pushed afterwards.
    #[must_use]
    pub fn with_exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = clamp_exit_delay(delay);
        self
    }

    /// Adds a toast at the end of the stack and returns its ID.
    pub fn push(&mut self, descriptor: ToastDescriptor, now: Instant) -> ToastId {
        let id = ToastId::new();
        let lifecycle = ToastLifecycle::new(descriptor, now).with_exit_delay(self.exit_delay);
        tracing::debug!(?id, "toast pushed");
        self.entries.push(Entry { id, lifecycle });
        id
    }

    /// Requests a toast to close.
    ///
    /// Returns `true` if a toast with that ID exists, whether or not it was
    /// still visible.
    pub fn request_close(&mut self, id: ToastId, now: Instant) -> bool {
        match self.get_mut(id) {
            Some(lifecycle) => {
                lifecycle.request_close(now);
                true
            }
            None => false,
        }
    }

    /// Forwards an open flag change to a toast.
    pub fn set_open(&mut self, id: ToastId, open: bool, now: Instant) -> bool {
        match self.get_mut(id) {
            Some(lifecycle) => {
                lifecycle.set_open(open, now);
                true
            }
            None => false,
        }
    }

    /// Removes a toast immediately, cancelling its timers.
    ///
    /// No close event is reported for a removed toast.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Fires elapsed timers of every toast.
    ///
    /// Returns the IDs of toasts that reached `Closed` during this tick; they
    /// are removed from the stack.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut closed = Vec::new();
        for entry in &mut self.entries {
            if entry.lifecycle.tick(now) == Some(Transition::Closed) {
                closed.push(entry.id);
            }
        }
        if !closed.is_empty() {
            self.entries.retain(|entry| !closed.contains(&entry.id));
        }
        closed
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message, now: Instant) -> Vec<Event> {
        match message {
            Message::Close(id) => {
                self.request_close(id, now);
                Vec::new()
            }
            Message::Tick(instant) => self.tick(instant).into_iter().map(Event::Closed).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastLifecycle> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.lifecycle)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastLifecycle> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.lifecycle)
    }

    /// Returns the toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ToastId, &ToastLifecycle)> {
        self.entries.iter().map(|entry| (entry.id, &entry.lifecycle))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of toasts currently on screen; hidden toasts are not counted.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.lifecycle.is_rendered())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the phase of a toast, `None` once it has been removed.
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.get(id).map(ToastLifecycle::phase)
    }

    /// Whether any toast is waiting on a timer, i.e. ticks are needed.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.lifecycle.has_pending_timer())
    }

    /// Removes every toast without reporting close events.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Renders the rendered toasts inside a [`host`] anchored at `anchor`.
    pub fn view(&self, now: Instant, anchor: Anchor) -> Element<'_, Message> {
        let toasts = self
            .entries
            .iter()
            .filter(|entry| entry.lifecycle.is_rendered())
            .map(|entry| view::toast(entry.id, &entry.lifecycle, now, Message::Close))
            .collect();
        host::view(toasts, anchor)
    }
}
