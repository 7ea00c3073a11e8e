// SPDX-License-Identifier: MPL-2.0
//! Timed visibility state machine of a single toast.
//!
//! ```text
//!            auto-dismiss timer | request_close
//!  Visible ─────────────────────────────────────▶ Closing ──exit timer──▶ Closed
//!     ▲                                                                      │
//!     └──────────────────── set_open(false → true) ─────────────────────────┘
//! ```
//!
//! Timers are deadlines evaluated by [`ToastLifecycle::tick`]. Every method
//! that depends on time takes the current `Instant`, so the machine is fully
//! deterministic. Dropping a lifecycle drops its timers with it.

use super::descriptor::ToastDescriptor;
use super::timer::Timer;
use crate::config::{DEFAULT_EXIT_ANIMATION_MS, MAX_EXIT_ANIMATION_MS};
use std::time::{Duration, Instant};

/// Discrete lifecycle stage of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shown and waiting for a close trigger.
    Visible,
    /// Exit animation running; the toast is still rendered.
    Closing,
    /// Not rendered, no timers pending.
    Closed,
}

/// A phase change reported to the owner.
///
/// `Closed` is the close notification: it is produced exactly once per
/// dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Closing,
    Closed,
}

#[derive(Debug, Clone)]
pub struct ToastLifecycle {
    descriptor: ToastDescriptor,
    phase: Phase,
    /// Last open flag supplied by the owner; `set_open` reacts to edges only.
    open: bool,
    auto_dismiss: Timer,
    exit_animation: Timer,
    exit_delay: Duration,
    /// Number of visible cycles started so far.
    cycle: u64,
}

impl ToastLifecycle {
    /// Creates the lifecycle, entering `Visible` right away when the
    /// descriptor is initially open.
    pub fn new(descriptor: ToastDescriptor, now: Instant) -> Self {
        let open = descriptor.is_initially_open();
        let mut lifecycle = Self {
            descriptor,
            phase: Phase::Closed,
            open,
            auto_dismiss: Timer::default(),
            exit_animation: Timer::default(),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_ANIMATION_MS),
            cycle: 0,
        };
        if open {
            lifecycle.begin_cycle(now);
        }
        lifecycle
    }

    /// Overrides the delay between a close trigger and `Closed`, capped at
    /// [`MAX_EXIT_ANIMATION_MS`].
    #[must_use]
    pub fn with_exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = clamp_exit_delay(delay);
        self
    }

    /// Updates the open flag.
    ///
    /// Only edges matter: `false → true` starts a fresh `Visible` cycle with
    /// new timers, `true → false` hides the toast at once without a close
    /// notification.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open == self.open {
            return;
        }
        self.open = open;

        if open {
            self.begin_cycle(now);
        } else {
            self.cancel_timers();
            self.phase = Phase::Closed;
            tracing::debug!(cycle = self.cycle, "toast hidden by owner");
        }
    }

    /// Requests the toast to close.
    ///
    /// Returns `Some(Transition::Closing)` when this call started the exit
    /// animation. Requests while `Closing` or `Closed` are ignored.
    pub fn request_close(&mut self, now: Instant) -> Option<Transition> {
        if self.phase != Phase::Visible {
            return None;
        }
        self.start_closing(now);
        Some(Transition::Closing)
    }

    /// Fires elapsed timers and returns the last transition reached.
    ///
    /// A single tick may cross both deadlines; the exit animation then counts
    /// from the auto-dismiss deadline rather than from `now`, and `Closed` is
    /// returned.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let mut transition = None;

        if self.phase == Phase::Visible {
            if let Some(elapsed_at) = self.auto_dismiss.fire(now) {
                self.start_closing(elapsed_at);
                transition = Some(Transition::Closing);
            }
        }

        if self.phase == Phase::Closing && self.exit_animation.fire(now).is_some() {
            self.cancel_timers();
            self.phase = Phase::Closed;
            tracing::debug!(cycle = self.cycle, "toast closed");
            transition = Some(Transition::Closed);
        }

        transition
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn descriptor(&self) -> &ToastDescriptor {
        &self.descriptor
    }

    /// Whether the toast occupies a slot in its host.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn shows_close_button(&self) -> bool {
        self.descriptor.is_closable() && self.phase == Phase::Visible
    }

    /// Progress of the exit animation in `0.0..=1.0`.
    ///
    /// `0.0` while visible, `1.0` once closed.
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 0.0,
            Phase::Closed => 1.0,
            Phase::Closing => {
                if self.exit_delay.is_zero() {
                    return 1.0;
                }
                let remaining = self.exit_animation.remaining(now).unwrap_or_default();
                let left = remaining.as_secs_f32() / self.exit_delay.as_secs_f32();
                (1.0 - left).clamp(0.0, 1.0)
            }
        }
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_dismiss.deadline(), self.exit_animation.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.auto_dismiss.is_armed() || self.exit_animation.is_armed()
    }

    /// Number of visible cycles started, including the current one.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    fn begin_cycle(&mut self, now: Instant) {
        self.cancel_timers();
        self.phase = Phase::Visible;
        self.cycle += 1;
        if let Some(delay) = self.descriptor.auto_dismiss_policy().duration() {
            self.auto_dismiss.arm(now, delay);
        }
        tracing::debug!(
            cycle = self.cycle,
            kind = ?self.descriptor.toast_kind(),
            auto_dismiss = ?self.descriptor.auto_dismiss_policy(),
            "toast visible"
        );
    }

    fn start_closing(&mut self, from: Instant) {
        self.auto_dismiss.cancel();
        self.exit_animation.arm(from, self.exit_delay);
        self.phase = Phase::Closing;
        tracing::debug!(cycle = self.cycle, "toast closing");
    }

    fn cancel_timers(&mut self) {
        self.auto_dismiss.cancel();
        self.exit_animation.cancel();
    }
}

/// Caps the exit animation at [`MAX_EXIT_ANIMATION_MS`].
pub(crate) fn clamp_exit_delay(delay: Duration) -> Duration {
    delay.min(Duration::from_millis(MAX_EXIT_ANIMATION_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::AutoDismiss;

    #[test]
    fn huge_auto_dismiss_never_fires() {
        let t0 = Instant::now();
        let descriptor =
            ToastDescriptor::new("forever").auto_dismiss(AutoDismiss::After(Duration::MAX));
        let mut toast = ToastLifecycle::new(descriptor, t0);

        assert_eq!(toast.phase(), Phase::Visible);
        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(t0 + ms(86_400_000)), None);
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn huge_exit_delay_is_capped() {
        let t0 = Instant::now();
        let mut toast =
            ToastLifecycle::new(ToastDescriptor::new("slow"), t0).with_exit_delay(Duration::MAX);

        assert_eq!(toast.request_close(t0), Some(Transition::Closing));
        assert_eq!(toast.tick(t0 + ms(MAX_EXIT_ANIMATION_MS - 1)), None);
        assert_eq!(
            toast.tick(t0 + ms(MAX_EXIT_ANIMATION_MS)),
            Some(Transition::Closed)
        );
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn initially_open_starts_visible_with_timer() {
        let t0 = Instant::now();
        let toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0);

        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.next_deadline(), Some(t0 + ms(3000)));
        assert_eq!(toast.cycle(), 1);
    }

    #[test]
    fn initially_closed_is_inert() {
        let t0 = Instant::now();
        let mut toast =
            ToastLifecycle::new(ToastDescriptor::new("hi").initially_open(false), t0);

        assert_eq!(toast.phase(), Phase::Closed);
        assert!(!toast.is_rendered());
        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(t0 + ms(10_000)), None);
        assert_eq!(toast.request_close(t0), None);
    }

    #[test]
    fn auto_dismiss_not_before_duration() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);

        assert_eq!(toast.tick(t0 + ms(999)), None);
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.tick(t0 + ms(1000)), Some(Transition::Closing));
        assert_eq!(toast.phase(), Phase::Closing);
    }

    #[test]
    fn closing_reaches_closed_after_exit_delay() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);
        toast.tick(t0 + ms(1000));

        assert_eq!(toast.tick(t0 + ms(1299)), None);
        assert_eq!(toast.tick(t0 + ms(1300)), Some(Transition::Closed));
        assert_eq!(toast.phase(), Phase::Closed);
        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(t0 + ms(5000)), None);
    }

    #[test]
    fn late_tick_crossing_both_deadlines_reports_closed() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);

        assert_eq!(toast.tick(t0 + ms(2000)), Some(Transition::Closed));
        assert_eq!(toast.phase(), Phase::Closed);
    }

    #[test]
    fn late_tick_before_exit_deadline_keeps_original_schedule() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);

        // Tick arrives 200ms late: exit still ends at 1300, not 1500.
        assert_eq!(toast.tick(t0 + ms(1200)), Some(Transition::Closing));
        assert_eq!(toast.next_deadline(), Some(t0 + ms(1300)));
    }

    #[test]
    fn never_auto_dismiss_stays_visible() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(
            ToastDescriptor::new("sticky").auto_dismiss(AutoDismiss::Never),
            t0,
        );

        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(t0 + Duration::from_secs(86_400)), None);
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn request_close_is_idempotent() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0);

        assert_eq!(toast.request_close(t0), Some(Transition::Closing));
        assert_eq!(toast.request_close(t0), None);
        assert_eq!(toast.request_close(t0 + ms(100)), None);
        assert_eq!(toast.next_deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn request_close_after_closed_is_ignored() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0);
        toast.request_close(t0);
        toast.tick(t0 + ms(300));

        assert_eq!(toast.request_close(t0 + ms(400)), None);
        assert_eq!(toast.phase(), Phase::Closed);
    }

    #[test]
    fn close_button_only_while_visible_and_closable() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0);
        assert!(toast.shows_close_button());

        toast.request_close(t0);
        assert!(!toast.shows_close_button());

        let fixed = ToastLifecycle::new(ToastDescriptor::new("hi").closable(false), t0);
        assert!(!fixed.shows_close_button());
    }

    #[test]
    fn reopening_starts_fresh_cycle() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);
        toast.tick(t0 + ms(1300));
        assert_eq!(toast.phase(), Phase::Closed);

        toast.set_open(false, t0 + ms(2000));
        toast.set_open(true, t0 + ms(2500));

        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.cycle(), 2);
        assert_eq!(toast.next_deadline(), Some(t0 + ms(3500)));
    }

    #[test]
    fn reopening_during_closing_cancels_exit_timer() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);
        toast.request_close(t0 + ms(100));

        toast.set_open(false, t0 + ms(150));
        toast.set_open(true, t0 + ms(200));

        // The old exit deadline (400ms) must not close the new cycle.
        assert_eq!(toast.tick(t0 + ms(400)), None);
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.next_deadline(), Some(t0 + ms(1200)));
    }

    #[test]
    fn hiding_via_open_flag_does_not_notify() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0);

        toast.set_open(false, t0 + ms(10));
        assert_eq!(toast.phase(), Phase::Closed);
        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(t0 + ms(10_000)), None);
    }

    #[test]
    fn unchanged_open_flag_is_ignored() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi").duration_ms(1000), t0);

        toast.set_open(true, t0 + ms(900));
        assert_eq!(toast.cycle(), 1);
        assert_eq!(toast.next_deadline(), Some(t0 + ms(1000)));
    }

    #[test]
    fn exit_progress_tracks_animation() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0)
            .with_exit_delay(ms(200));
        assert_eq!(toast.exit_progress(t0), 0.0);

        toast.request_close(t0);
        let halfway = toast.exit_progress(t0 + ms(100));
        assert!((halfway - 0.5).abs() < 0.01, "got {halfway}");

        toast.tick(t0 + ms(200));
        assert_eq!(toast.exit_progress(t0 + ms(200)), 1.0);
    }

    #[test]
    fn zero_exit_delay_closes_on_next_tick() {
        let t0 = Instant::now();
        let mut toast = ToastLifecycle::new(ToastDescriptor::new("hi"), t0)
            .with_exit_delay(Duration::ZERO);

        toast.request_close(t0);
        assert_eq!(toast.exit_progress(t0), 1.0);
        assert_eq!(toast.tick(t0), Some(Transition::Closed));
    }
}
