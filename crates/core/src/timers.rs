// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delayed actions on the page clock.
//!
//! Page time is a `Duration` since the page loaded, supplied by the caller
//! with every event. Nothing here sleeps: actions become due and are
//! handed back by [`Timers::take_due`] when the caller ticks the page.

use std::time::Duration;

/// An action scheduled to run after a short delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// Show the first-visit welcome popup.
    ShowWelcomePopup,
    /// Start the entrance animation of the popup opened from the nav bar.
    RevealNavPopup,
    /// Remove the popup once its exit animation has finished.
    HidePopup,
    /// Move focus to the first link of the freshly opened menu.
    FocusFirstNavLink,
}

/// Queue of delayed actions ordered by due time.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    queue: Vec<(Duration, u64, TimerAction)>,
    next_seq: u64,
}

impl Timers {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedules `action` to become due at `due`.
    pub fn schedule(&mut self, due: Duration, action: TimerAction) {
        self.queue.push((due, self.next_seq, action));
        self.next_seq += 1;
    }

    /// Drops every pending instance of `action`.
    pub fn cancel(&mut self, action: TimerAction) {
        self.queue.retain(|(_, _, pending)| *pending != action);
    }

    /// Returns true if `action` is pending.
    #[must_use]
    pub fn is_pending(&self, action: TimerAction) -> bool {
        self.queue.iter().any(|(_, _, pending)| *pending == action)
    }

    /// Removes and returns every action due at or before `now`.
    ///
    /// Actions come back in due order; actions due at the same instant come
    /// back in the order they were scheduled.
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerAction> {
        let mut due: Vec<(Duration, u64, TimerAction)> = Vec::new();
        self.queue.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, action)| action).collect()
    }

    /// Returns the earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|(at, _, _)| *at).min()
    }
}

/// Coalesces bursts of calls into one trailing call.
///
/// Every call restarts the quiet period and replaces the pending value.
/// Once `wait` has passed without a new call, [`Debouncer::poll`] yields the
/// last value exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Records a call made at `now`.
    pub fn call(&mut self, now: Duration, value: T) {
        self.pending = Some((now + self.wait, value));
    }

    /// Returns the pending value if its quiet period has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending.take() {
            Some((deadline, value)) if deadline <= now => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Returns the time at which the pending call fires.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
