//! Virtual-time timer queue.
//!
//! The page runs on a single logical thread. Delayed transitions are entries
//! in a [`TimerQueue`] that the owner drives with explicit elapsed time, which
//! keeps every timeline deterministic under test.
//!
//! Each timer carries the owner's generation at scheduling time. The owner
//! bumps its generation on every transition, so a timer that outlived the
//! state it was scheduled for can be recognised and dropped when it fires.

use std::time::Duration;

/// Handle returned by [`TimerQueue::schedule`], used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub kind: K,
    /// Owner generation captured when the timer was scheduled
    pub generation: u64,
    /// Virtual time at which the timer was due
    pub due: Duration,
}

#[derive(Debug, Clone)]
struct Pending<K> {
    id: TimerId,
    kind: K,
    generation: u64,
    due: Duration,
}

/// Single-threaded queue of cancellable one-shot timers over virtual time.
///
/// # Example
///
/// ```rust
/// use bodyup_landing::timer::TimerQueue;
/// use std::time::Duration;
///
/// let mut timers = TimerQueue::new();
/// timers.schedule("reset", Duration::from_millis(5_000), 1);
///
/// let until = timers.now() + Duration::from_millis(4_999);
/// assert!(timers.pop_due(until).is_none());
///
/// let until = until + Duration::from_millis(1);
/// let fired = timers.pop_due(until).unwrap();
/// assert_eq!(fired.kind, "reset");
/// assert_eq!(timers.now(), Duration::from_millis(5_000));
/// ```
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<K>>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `kind` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, kind: K, delay: Duration, generation: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending {
            id,
            kind,
            generation,
            due: self.now.saturating_add(delay),
        });
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    ///
    /// Ties fire in scheduling order. Call repeatedly until `None`, then
    /// [`settle`](Self::settle) at `until`; timers scheduled by a handler in
    /// between are relative to the fired timer's due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<K>> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id.0))
            .map(|(i, _)| i)?;

        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(Fired {
            id: pending.id,
            kind: pending.kind,
            generation: pending.generation,
            due: pending.due,
        })
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule('b', ms(20), 0);
        timers.schedule('a', ms(10), 0);

        assert_eq!(timers.pop_due(ms(30)).map(|f| f.kind), Some('a'));
        assert_eq!(timers.now(), ms(10));
        assert_eq!(timers.pop_due(ms(30)).map(|f| f.kind), Some('b'));
        assert!(timers.pop_due(ms(30)).is_none());
    }

    #[test]
    fn ties_fire_in_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(1, ms(5), 0);
        timers.schedule(2, ms(5), 0);

        assert_eq!(timers.pop_due(ms(5)).map(|f| f.kind), Some(1));
        assert_eq!(timers.pop_due(ms(5)).map(|f| f.kind), Some(2));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule((), ms(5), 0);

        assert_eq!(timers.len(), 1);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.pop_due(ms(100)).is_none());
    }

    #[test]
    fn schedule_is_relative_to_last_fired_timer() {
        let mut timers = TimerQueue::new();
        timers.schedule("first", ms(1_500), 0);

        let fired = timers.pop_due(ms(10_000)).unwrap();
        assert_eq!(fired.due, ms(1_500));

        timers.schedule("second", ms(5_000), 1);
        let fired = timers.pop_due(ms(10_000)).unwrap();
        assert_eq!(fired.due, ms(6_500));
        assert_eq!(fired.generation, 1);
    }

    #[test]
    fn settle_never_moves_backwards() {
        let mut timers: TimerQueue<()> = TimerQueue::new();
        timers.settle(ms(50));
        timers.settle(ms(10));
        assert_eq!(timers.now(), ms(50));
    }

    #[test]
    fn next_due_tracks_earliest_pending() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule(1, ms(1), 0);
        timers.schedule(2, ms(2), 0);
        assert_eq!(timers.len(), 2);
        assert_eq!(timers.next_due(), Some(ms(1)));

        timers.cancel(first);
        assert_eq!(timers.next_due(), Some(ms(2)));
        assert_eq!(timers.pop_due(ms(2)).map(|f| f.kind), Some(2));
        assert!(timers.is_empty());
        assert!(timers.next_due().is_none());
    }

    #[test]
    fn huge_delays_saturate_instead_of_overflowing() {
        let mut timers = TimerQueue::new();
        timers.settle(ms(1));
        timers.schedule((), Duration::MAX, 0);
        assert_eq!(timers.next_due(), Some(Duration::MAX));
        assert!(timers.pop_due(Duration::MAX).is_some());
        assert_eq!(timers.now(), Duration::MAX);
    }
}
