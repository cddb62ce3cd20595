use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Deferred callbacks owned by one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// One-shot; clears the transition guard.
    Settle,
    /// Repeating; advances one step forward.
    Autoplay,
    /// One-shot; applies the last reported viewport width.
    ResizeDebounce,
}

/// Cancellable reference to an armed timer.
///
/// Ids are never reused, so a stale handle cannot cancel a newer timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle {
    id: u64,
    kind: TimerKind,
}

impl TimerHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> TimerKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledTimer {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
}

/// Deterministic timer queue driven by a virtual clock.
///
/// Nothing fires on its own: the owner pulls due timers with [`TimerQueue::pop_due`]
/// while advancing time. Timers due at the same instant fire in arm order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: Vec<ScheduledTimer>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn arm_once(&mut self, kind: TimerKind, delay: Duration) -> TimerHandle {
        self.arm(kind, delay, None)
    }

    /// Arms a timer that fires every `period` until cancelled.
    ///
    /// A zero period is raised to one millisecond so a single
    /// [`TimerQueue::pop_due`] sweep always terminates.
    pub fn arm_repeating(&mut self, kind: TimerKind, period: Duration) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.arm(kind, period, Some(period))
    }

    fn arm(&mut self, kind: TimerKind, delay: Duration, period: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle {
            id: self.next_id,
            kind,
        };
        self.next_id += 1;
        self.timers.push(ScheduledTimer {
            handle,
            due: self.now.saturating_add(delay),
            period,
        });
        handle
    }

    /// Cancels a timer. Returns `true` when it was still armed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.handle != handle);
        self.timers.len() != before
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.handle == handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    #[must_use]
    pub fn count_of(&self, kind: TimerKind) -> usize {
        self.timers
            .iter()
            .filter(|timer| timer.handle.kind == kind)
            .count()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.due).min()
    }

    /// Pops the earliest timer due at or before `until` and moves the clock to
    /// its due time.
    ///
    /// A repeating timer fires at most once per sweep up to `until`: missed
    /// periods are coalesced and it is rescheduled to the first period
    /// boundary after `until`. A timer whose next boundary overflows the clock
    /// is dropped.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.handle.id))
            .map(|(position, _)| position)?;

        let timer = self.timers[position];
        self.now = self.now.max(timer.due);
        match timer
            .period
            .and_then(|period| next_boundary_after(timer.due, period, until))
        {
            Some(next_due) => self.timers[position].due = next_due,
            None => {
                self.timers.remove(position);
            }
        }
        Some(timer.handle)
    }

    /// Moves the clock forward without firing anything.
    ///
    /// Callers drain [`TimerQueue::pop_due`] first; the clock never goes back.
    pub fn settle_clock(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

/// First `due + k * period` strictly after `until`, with `k >= 1`.
fn next_boundary_after(due: Duration, period: Duration, until: Duration) -> Option<Duration> {
    let period_nanos = period.as_nanos();
    if period_nanos == 0 {
        return None;
    }
    let missed = until.saturating_sub(due).as_nanos() / period_nanos;
    let next_nanos = due
        .as_nanos()
        .checked_add(missed.checked_add(1)?.checked_mul(period_nanos)?)?;
    let secs = u64::try_from(next_nanos / 1_000_000_000).ok()?;
    let subsec = u32::try_from(next_nanos % 1_000_000_000).ok()?;
    Some(Duration::new(secs, subsec))
}
