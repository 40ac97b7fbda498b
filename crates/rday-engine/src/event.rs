//! The event queue — pending wake-ups ordered by `(time, insertion sequence)`.
//!
//! # Why this exists
//!
//! Entity processes are logically concurrent but must interleave in a
//! portable, testable order.  Rather than coroutines, each suspension is
//! reified as an [`Event`] in a priority queue keyed by simulation time with
//! a monotonically increasing sequence number as the tie-break.  Two events
//! at the same timestamp therefore run in the order they were scheduled —
//! recorded explicitly, never inferred from container iteration order.
//!
//! Equal-time events are routine here: zero-length services, batch releases
//! fanning a whole pending list into one instant, and admissions chained off
//! a release all share a timestamp.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rday_core::{EntityId, SimTime, StationId};
use rday_stations::Route;

// ── Event ─────────────────────────────────────────────────────────────────────

/// One scheduled wake-up.  The payload carries everything the handler needs
/// to resume the suspended process — events are the continuation state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// A generated entity reaches the entry station.
    Arrival(EntityId),

    /// The generator's throttling window expires; arrivals resume.
    ResetWindow,

    /// Try to admit the head of `station`'s queue.  Stale admissions (no
    /// free server, or nobody waiting) are no-ops.
    Admit(StationId),

    /// An entity's service at `station` completes; release the server and
    /// follow `route` (decided at admission time).
    CompleteService {
        entity: EntityId,
        station: StationId,
        route: Route,
    },
}

// ── EventQueue ────────────────────────────────────────────────────────────────

struct Scheduled {
    time: SimTime,
    seq: u64,
    event: Event,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
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
        // Sequence numbers are unique, so this is a total order even though
        // `event` is excluded from the comparison.
        self.time.cmp(&other.time).then(self.seq.cmp(&other.seq))
    }
}

/// Min-queue of pending events, ordered by `(time, insertion sequence)`.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `time`.
    pub fn push(&mut self, time: SimTime, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { time, seq, event }));
    }

    /// Remove and return the earliest event (ties: lowest sequence first).
    pub fn pop(&mut self) -> Option<(SimTime, Event)> {
        self.heap.pop().map(|Reverse(s)| (s.time, s.event))
    }

    /// The timestamp of the next event, or `None` if the queue is empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(s)| s.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
