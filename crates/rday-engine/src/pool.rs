//! `ResourcePool` — the finite-capacity server group of one station.
//!
//! Strict FIFO, no priorities: requests queue in arrival order (the event
//! queue's sequence numbers break same-time ties before requests ever reach
//! the pool) and admission pops the head only while a server is free.
//!
//! # Observed-state convention
//!
//! The [`Admission`] returned by [`admit_next`](ResourcePool::admit_next)
//! snapshots the pool *at the moment of admission*: the queue length after
//! the admitted request has left the line, and the in-service count before it
//! is incremented for the admitted entity.  Telemetry wants exactly that
//! reading — the state an arriving observer would see — plus the incremented
//! count, which callers reconstruct as `busy_before + 1`.

use std::collections::VecDeque;

use rday_core::EntityId;

// ── Request / Admission ───────────────────────────────────────────────────────

/// One queued admission request.  The service duration is sampled when the
/// entity arrives at the station, before it queues.
#[derive(Copy, Clone, Debug)]
pub struct QueuedRequest {
    pub entity: EntityId,
    pub service_hours: f64,
}

/// Pool state observed at the moment of admission (see module docs).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    /// Entities still waiting after the admitted one left the queue.
    pub queue_len: usize,
    /// Servers busy before the admitted entity occupied one.
    pub busy_before: u32,
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

/// FIFO admission queue plus in-service count for one station.
///
/// Invariants, maintained by the engine calling `enqueue`/`admit_next`/
/// `release` at event boundaries only:
///
/// - `busy <= capacity` at all times;
/// - `arrivals == admitted + queue.len()`;
/// - `admitted == completed + busy`.
#[derive(Debug)]
pub struct ResourcePool {
    capacity: u32,
    busy: u32,
    queue: VecDeque<QueuedRequest>,
    arrivals: u64,
    admitted: u64,
    completed: u64,
}

impl ResourcePool {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            busy: 0,
            queue: VecDeque::new(),
            arrivals: 0,
            admitted: 0,
            completed: 0,
        }
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Append a request to the back of the queue.
    pub fn enqueue(&mut self, entity: EntityId, service_hours: f64) {
        self.arrivals += 1;
        self.queue.push_back(QueuedRequest {
            entity,
            service_hours,
        });
    }

    /// Admit the queue head if a server is free.
    ///
    /// Returns `None` when every server is busy or nobody is waiting — the
    /// engine treats that as a stale `Admit` event and moves on.
    pub fn admit_next(&mut self) -> Option<(QueuedRequest, Admission)> {
        if self.busy >= self.capacity {
            return None;
        }
        let request = self.queue.pop_front()?;
        let admission = Admission {
            queue_len: self.queue.len(),
            busy_before: self.busy,
        };
        self.busy += 1;
        self.admitted += 1;
        debug_assert!(self.busy <= self.capacity);
        Some((request, admission))
    }

    /// Free one server after a service completes.
    pub fn release(&mut self) {
        debug_assert!(self.busy > 0, "release on an idle pool");
        self.busy -= 1;
        self.completed += 1;
    }

    // ── Observations ──────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn busy(&self) -> u32 {
        self.busy
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn has_free_server(&self) -> bool {
        self.busy < self.capacity
    }

    #[inline]
    pub fn has_waiters(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Total requests ever enqueued.
    #[inline]
    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    /// Total requests ever admitted to a server.
    #[inline]
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Total services completed.
    #[inline]
    pub fn completed(&self) -> u64 {
        self.completed
    }
}
