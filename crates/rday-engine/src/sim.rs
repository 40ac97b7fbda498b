//! The `Sim` struct and its event loop.

use rday_core::{EntityId, SimClock, SimParams, SimRng, StationId};
use rday_stations::{sample_service_hours, Route, StationTable};

use crate::arcs::ArcCounter;
use crate::error::{SimError, SimResult};
use crate::event::{Event, EventQueue};
use crate::gate::{BatchGate, GateStatus};
use crate::generator::{ArrivalGenerator, EntityRoster, WindowAction};
use crate::observer::SimObserver;
use crate::pool::ResourcePool;
use crate::telemetry::{VisitLog, VisitRecord};

/// The main simulation runner.
///
/// `Sim` owns all run state — pools, arc counter, gates, roster, RNG, visit
/// log — and drives the event loop:
///
/// 1. Prime the generator (schedule the first `Arrival`).
/// 2. Pop events in `(time, sequence)` order until the queue drains.
/// 3. Each event handler mutates state and schedules follow-up events; no
///    other code touches shared state, so every mutation happens at a
///    well-defined event boundary.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration.
    pub params: SimParams,

    /// The validated, immutable station network.
    pub table: StationTable,

    /// Simulation clock — advanced to each popped event's timestamp.
    pub clock: SimClock,

    /// One resource pool per station, indexed by `StationId`.
    pub pools: Vec<ResourcePool>,

    /// Completed transitions per directed arc.
    pub arcs: ArcCounter,

    /// Batch gates, in `params.gates` order.
    pub gates: Vec<BatchGate>,

    /// The full simulation trace, in admission order.
    pub log: VisitLog,

    /// Entities whose process has ended (terminal route taken).
    pub exited: u32,

    pub(crate) rng: SimRng,
    pub(crate) queue: EventQueue,
    pub(crate) roster: EntityRoster,
    pub(crate) generator: ArrivalGenerator,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation until the event queue drains.
    ///
    /// Calls observer hooks as the run progresses.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.schedule_next_arrival();

        while let Some((time, event)) = self.queue.pop() {
            self.clock.advance_to(time);
            self.dispatch(event, observer)?;
        }

        for gate in &self.gates {
            if let Some(report) = gate.strand_report(self.clock.now) {
                // A stranded gate means an arc into its target is missing
                // from the feeder list — surfaced, not silently absorbed.
                log::warn!("{report}");
            }
        }
        observer.on_sim_end(self.clock.now);
        Ok(())
    }

    /// Attributes of one generated entity.
    #[inline]
    pub fn attrs(&self, entity: EntityId) -> rday_core::EntityAttrs {
        self.roster.get(entity)
    }

    /// Read-only view of the roster.
    pub fn roster(&self) -> &EntityRoster {
        &self.roster
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        match event {
            // ── Arrival: entity enters the network; generator continues ───
            Event::Arrival(entity) => {
                let entry = self.table.entry();
                self.enter_station(entity, entry)?;
                match self.generator.on_arrival(self.clock.now) {
                    WindowAction::Continue => self.schedule_next_arrival(),
                    WindowAction::SleepUntil(resume) => {
                        // Arrivals pause until the window reopens.
                        self.queue.push(resume, Event::ResetWindow);
                    }
                }
            }

            // ── ResetWindow: throttling sleep over, arrivals resume ───────
            Event::ResetWindow => {
                self.generator.reset_window(self.clock.now);
                self.schedule_next_arrival();
            }

            // ── Admit: wake the queue head if a server is free ────────────
            Event::Admit(station) => self.admit(station, observer)?,

            // ── CompleteService: release the server, route onward ─────────
            Event::CompleteService {
                entity,
                station,
                route,
            } => self.complete(entity, station, route, observer)?,
        }
        Ok(())
    }

    // ── Generator plumbing ────────────────────────────────────────────────

    fn schedule_next_arrival(&mut self) {
        match self.generator.next_arrival(&mut self.rng) {
            Some(arrival) => {
                self.roster.assign(arrival.entity, arrival.attrs);
                self.queue.push(
                    self.clock.now + arrival.delay_hours,
                    Event::Arrival(arrival.entity),
                );
            }
            None => {
                log::debug!(
                    "arrival stream exhausted after {} entities",
                    self.generator.generated()
                );
            }
        }
    }

    // ── Station entry / admission / completion ────────────────────────────

    /// Entity reaches `station`: sample its service duration, join the FIFO
    /// queue, and schedule an admission attempt if a server is free.
    fn enter_station(&mut self, entity: EntityId, station: StationId) -> SimResult<()> {
        let def = self
            .table
            .get(station)
            .ok_or(rday_core::CoreError::StationNotFound(station))?;
        let grooming = self.params.grooming_station == Some(station);
        let attrs = self.roster.get(entity);
        let hours = sample_service_hours(def, attrs, grooming, &mut self.rng)?;

        let pool = &mut self.pools[station.index()];
        pool.enqueue(entity, hours);
        if pool.has_free_server() {
            self.queue.push(self.clock.now, Event::Admit(station));
        }
        Ok(())
    }

    /// Admission: pop the queue head, decide its route, record the visit,
    /// and schedule its completion.
    fn admit<O: SimObserver>(&mut self, station: StationId, observer: &mut O) -> SimResult<()> {
        let Some((request, admission)) = self.pools[station.index()].admit_next() else {
            // Stale wake-up: another admission or a still-busy pool beat us.
            return Ok(());
        };

        let def = self
            .table
            .get(station)
            .ok_or(rday_core::CoreError::StationNotFound(station))?;
        let attrs = self.roster.get(request.entity);
        let route = def
            .routes
            .resolve(attrs.sex, attrs.usmaps, self.params.path_mode)
            .ok_or_else(|| SimError::MissingRoute {
                entity: request.entity,
                station: def.name.clone(),
            })?;

        let arc_count = self.arcs.record(station, route);
        let finish = self.clock.now + request.service_hours;

        let record = VisitRecord {
            entity: request.entity,
            station,
            queue_len: admission.queue_len,
            busy: admission.busy_before,
            capacity: def.capacity,
            station_name: def.name.clone(),
            time: finish,
            next: route,
            arc_count,
            busy_after: admission.busy_before + 1,
        };
        observer.on_visit(&record);
        self.log.append(record);

        self.queue.push(
            finish,
            Event::CompleteService {
                entity: request.entity,
                station,
                route,
            },
        );

        // Re-arm while capacity and waiters both remain, so one release (or
        // a burst of arrivals) never leaves an admissible head sleeping.
        let pool = &self.pools[station.index()];
        if pool.has_free_server() && pool.has_waiters() {
            self.queue.push(self.clock.now, Event::Admit(station));
        }
        Ok(())
    }

    /// Service completion: free the server, wake the next waiter, and route
    /// the entity onward (directly, into a gate, or out of the network).
    fn complete<O: SimObserver>(
        &mut self,
        entity: EntityId,
        station: StationId,
        route: Route,
        observer: &mut O,
    ) -> SimResult<()> {
        let pool = &mut self.pools[station.index()];
        pool.release();
        if pool.has_waiters() {
            self.queue.push(self.clock.now, Event::Admit(station));
        }

        match route {
            Route::Exit => {
                self.exited += 1;
                observer.on_entity_exit(entity, self.clock.now);
            }
            Route::To(next) => match self.gate_index(next) {
                Some(gate) => self.gate_arrival(gate, entity, observer)?,
                None => self.enter_station(entity, next)?,
            },
        }
        Ok(())
    }

    // ── Batch gates ───────────────────────────────────────────────────────

    fn gate_index(&self, station: StationId) -> Option<usize> {
        self.gates.iter().position(|g| g.target() == station)
    }

    fn gate_arrival<O: SimObserver>(
        &mut self,
        gate: usize,
        entity: EntityId,
        observer: &mut O,
    ) -> SimResult<()> {
        self.gates[gate].push(entity);

        let status = self.gates[gate].evaluate(&self.arcs, self.params.population)?;
        if status == GateStatus::Release {
            let target = self.gates[gate].target();
            let released = self.gates[gate].drain();
            log::debug!(
                "gate for {} releasing {} entities at {}",
                target,
                released.len(),
                self.clock.now
            );
            observer.on_gate_release(target, released.len(), self.clock.now);
            // Pending order is arrival order; entering in that order keeps
            // the downstream FIFO deterministic.
            for entity in released {
                self.enter_station(entity, target)?;
            }
        }
        Ok(())
    }
}
