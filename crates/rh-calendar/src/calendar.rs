//! `EventCalendar`: min-heap of pending events.
//!
//! # Performance note
//!
//! Every train has exactly one pending event at any time, so the heap never
//! holds more than the fleet size.  `BinaryHeap` gives O(log N) push and pop;
//! the sequence number makes the ordering total so equal-time events come
//! out in FIFO order without a stable sort.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rh_core::{PhaseKind, SimTime, TrainId};

use crate::{CalendarError, CalendarResult, Event};

/// Heap entry: the event plus its insertion sequence number.
#[derive(Debug)]
struct Scheduled {
    event: Event,
    seq:   u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN never reaches the heap (rejected by `schedule`), so
        // `partial_cmp` is total here.  Both keys are reversed: `BinaryHeap`
        // is a max-heap and we want the earliest time, then the lowest seq.
        other
            .event
            .fire_time
            .partial_cmp(&self.event.fire_time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Time-ordered collection of pending events.
///
/// The calendar also tracks its own notion of "now": the fire time of the
/// most recently popped event.  Scheduling anything earlier than that is a
/// negative delay and is rejected with [`CalendarError::InvalidEvent`].
#[derive(Debug, Default)]
pub struct EventCalendar {
    heap:     BinaryHeap<Scheduled>,
    next_seq: u64,
    now:      SimTime,
}

impl EventCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a `phase` event for `train` at `fire_time`.
    pub fn push(&mut self, fire_time: SimTime, phase: PhaseKind, train: TrainId) -> CalendarResult<()> {
        self.schedule(Event::new(fire_time, phase, train))
    }

    /// Insert a prepared event, preserving time order.
    pub fn schedule(&mut self, event: Event) -> CalendarResult<()> {
        if !event.fire_time.is_finite() || event.fire_time < self.now {
            return Err(CalendarError::InvalidEvent {
                fire_time: event.fire_time,
                now:       self.now,
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { event, seq });
        Ok(())
    }

    /// Remove and return the earliest event.  Among equal fire times, the
    /// one pushed first wins.
    pub fn pop(&mut self) -> CalendarResult<Event> {
        let Scheduled { event, .. } = self.heap.pop().ok_or(CalendarError::EmptyCalendar)?;
        self.now = event.fire_time;
        Ok(event)
    }

    /// Borrow the earliest event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|s| &s.event)
    }

    /// Fire time of the earliest event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.peek().map(|e| e.fire_time)
    }

    /// Fire time of the last popped event (0 before the first pop).
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending event and rewind the clock and sequence counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
        self.now = 0.0;
    }

    /// Iterate over pending events in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.heap.iter().map(|s| &s.event)
    }
}
