//! Scoped timers driven by the frame clock.
//!
//! Each component owns its own [`Timers`] queue and drains it on every tick.
//! Dropping or clearing the queue discards everything still pending, so a
//! timer can never fire after its owner is gone.

use std::time::Duration;

/// Handle returned by [`Timers::schedule`], used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: u64,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

/// A queue of one-shot and repeating timers.
///
/// Times are offsets from an arbitrary origin, normally the app start.
#[derive(Debug)]
pub struct Timers<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: Clone> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerId {
        self.push(now + delay, None, event)
    }

    /// Fire `event` every `period`, starting one period after `now`.
    pub fn schedule_interval(&mut self, now: Duration, period: Duration, event: E) -> TimerId {
        self.push(now + period, Some(period.max(Duration::from_millis(1))), event)
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due,
            period,
            event,
        });
        TimerId(id)
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id.0);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return every event due at `now`, earliest first.
    ///
    /// Repeating timers fire at most once per call and are rescheduled.
    pub fn drain_due(&mut self, now: Duration) -> Vec<E> {
        let mut due: Vec<(Duration, u64, E)> = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.due > now {
                return true;
            }
            due.push((entry.due, entry.id, entry.event.clone()));
            match entry.period {
                Some(period) => {
                    entry.due += period;
                    if entry.due <= now {
                        entry.due = now + period;
                    }
                    true
                }
                None => false,
            }
        });
        due.sort_by_key(|(at, id, _)| (*at, *id));
        due.into_iter().map(|(_, _, event)| event).collect()
    }
}
