use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::foundation::core::Millis;

/// Handle to a scheduled timer, unique within one [`TimerQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that came due, as returned by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    pub at: Millis,
    pub event: E,
}

#[derive(Clone, Debug)]
struct Entry<E> {
    event: E,
    due: Millis,
    interval: Option<Millis>,
}

/// Deterministic single-threaded timer queue on a virtual clock.
///
/// Determinism rule: entries with the same due time fire in the order they
/// were scheduled. Cancelled entries are dropped lazily from the heap.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    now: Millis,
    next_seq: u64,
    live: HashMap<TimerId, Entry<E>>,
    heap: BinaryHeap<Reverse<(Millis, u64)>>,
}

impl<E: Clone> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new(Millis::ZERO)
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new(now: Millis) -> Self {
        Self {
            now,
            next_seq: 0,
            live: HashMap::new(),
            heap: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.live.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains_key(&id)
    }

    /// One-shot timer firing `delay` after the current time.
    pub fn once(&mut self, delay: Millis, event: E) -> TimerId {
        self.push(self.now + delay, None, event)
    }

    /// Repeating timer; the first firing is one `interval` from now.
    pub fn every(&mut self, interval: Millis, event: E) -> TimerId {
        let interval = Millis(interval.0.max(1));
        self.push(self.now + interval, Some(interval), event)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.live.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.live.clear();
        self.heap.clear();
    }

    /// Pops the earliest entry due at or before `until`.
    ///
    /// The clock moves to the entry's due time. With nothing due, the clock
    /// moves to `until` (never backwards) and `None` is returned.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired<E>> {
        while let Some(&Reverse((due, seq))) = self.heap.peek() {
            if due > until {
                break;
            }
            self.heap.pop();

            let id = TimerId(seq);
            let Some(entry) = self.live.get_mut(&id) else {
                continue;
            };
            // A re-armed repeating timer leaves a stale heap key behind.
            if entry.due != due {
                continue;
            }

            self.now = self.now.max(due);
            let event = entry.event.clone();
            // A repeating timer whose next firing would pass the end of the
            // clock fires this last time and is retired.
            match entry.interval.and_then(|i| due.0.checked_add(i.0)) {
                Some(next) => {
                    entry.due = Millis(next);
                    self.heap.push(Reverse((entry.due, seq)));
                }
                None => {
                    self.live.remove(&id);
                }
            }
            return Some(Fired {
                id,
                at: due,
                event,
            });
        }

        self.now = self.now.max(until);
        None
    }

    fn push(&mut self, due: Millis, interval: Option<Millis>, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = TimerId(seq);
        self.live.insert(
            id,
            Entry {
                event,
                due,
                interval,
            },
        );
        self.heap.push(Reverse((due, seq)));
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/queue.rs"]
mod tests;
