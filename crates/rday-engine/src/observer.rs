//! Simulation observer trait for progress reporting and streaming export.

use rday_core::{EntityId, SimTime, StationId};

use crate::telemetry::VisitRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — gate logger
///
/// ```rust,ignore
/// struct GatePrinter;
///
/// impl SimObserver for GatePrinter {
///     fn on_gate_release(&mut self, gate: StationId, released: usize, time: SimTime) {
///         println!("{time}: gate {gate} released {released} entities");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per station visit, at admission, right after the record
    /// is appended to the log.
    fn on_visit(&mut self, _record: &VisitRecord) {}

    /// Called when a batch gate releases its pending list.
    fn on_gate_release(&mut self, _gate: StationId, _released: usize, _time: SimTime) {}

    /// Called when an entity takes a terminal route and its process ends.
    fn on_entity_exit(&mut self, _entity: EntityId, _time: SimTime) {}

    /// Called once after the event queue drains.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
