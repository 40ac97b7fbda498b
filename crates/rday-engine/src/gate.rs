//! `BatchGate` — a synchronization barrier in front of a shared transition.
//!
//! Entities routed to a gated station accumulate in a pending list instead of
//! entering directly.  The gate releases the whole list at once when either
//! the list outgrows its threshold or the feeder arc counts show that every
//! generated entity has already made a transition into the gate ("all
//! expected arrivals observed" — the final, partial batch).
//!
//! The completion condition is an approximation inferred from specific
//! upstream edges, not an exact drained-queue signal: if the routing table
//! grows a new path into the gate's target that is not listed in
//! `GateSpec::feeders`, the sum undercounts and the last batch can strand.
//! The engine surfaces that as an end-of-run warning rather than papering
//! over it (see `Sim::run`).
//!
//! Evaluation is deliberately tri-state: `Release` and `Hold` are the normal
//! outcomes, and a gate that cannot compute its condition at all (no feeder
//! arcs) is a configuration error — distinguishable from the benign case of
//! feeder arcs that simply have no traffic yet, which read as zero.

use rday_core::{EntityId, GateSpec, SimTime, StationId};

use crate::arcs::ArcCounter;
use crate::error::{SimError, SimResult};

/// Outcome of a release check.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GateStatus {
    /// Release every pending entity now.
    Release,
    /// Keep holding; the condition is not met yet.
    Hold,
}

/// One batch gate: its configuration plus the pending list.
#[derive(Debug)]
pub struct BatchGate {
    spec: GateSpec,
    pending: Vec<EntityId>,
}

impl BatchGate {
    pub fn new(spec: GateSpec) -> Self {
        Self {
            spec,
            pending: Vec::new(),
        }
    }

    /// The station this gate feeds.
    #[inline]
    pub fn target(&self) -> StationId {
        self.spec.target
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.spec.threshold
    }

    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Add an entity to the pending list.
    pub fn push(&mut self, entity: EntityId) {
        self.pending.push(entity);
    }

    /// Check the release condition against the current arc counts.
    ///
    /// `population` is the total number of entities the generator produces;
    /// the feeder sum reaching it means nobody else can ever arrive.
    pub fn evaluate(&self, arcs: &ArcCounter, population: u32) -> SimResult<GateStatus> {
        if self.pending.len() > self.spec.threshold {
            return Ok(GateStatus::Release);
        }
        if self.spec.feeders.is_empty() {
            // Normally caught at build time; reaching this means the gate
            // can never infer completion, which is misconfiguration, not
            // "no data yet".
            return Err(SimError::GateWithoutFeeders(self.spec.target));
        }
        let observed: u64 = self
            .spec
            .feeders
            .iter()
            .map(|&(src, dst)| arcs.edge(src, dst))
            .sum();
        if observed == u64::from(population) {
            Ok(GateStatus::Release)
        } else {
            Ok(GateStatus::Hold)
        }
    }

    /// Take the whole pending list, leaving the gate empty.
    ///
    /// Under cooperative scheduling nothing can interleave between a
    /// `Release` verdict and this drain, so the pair is effectively atomic.
    pub fn drain(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.pending)
    }

    /// Log-friendly description of a stranded gate at end of run.
    pub fn strand_report(&self, final_time: SimTime) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(format!(
                "gate for {} still holds {} pending entities at {}",
                self.spec.target,
                self.pending.len(),
                final_time
            ))
        }
    }
}
