//! Fluent builder for constructing a [`Sim`].

use rday_core::{SimParams, SimRng};
use rday_stations::StationTable;

use crate::arcs::ArcCounter;
use crate::event::EventQueue;
use crate::gate::BatchGate;
use crate::generator::{ArrivalGenerator, EntityRoster};
use crate::pool::ResourcePool;
use crate::telemetry::VisitLog;
use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimParams`] — population, rates, caps, gates, path mode, seed, …
/// - [`StationTable`] — already validated by `rday-stations` at load time
///
/// `build` cross-checks the two: gate targets, feeder stations, and the
/// grooming station must all exist in the table.  Misconfiguration fails
/// here, before any event runs — never mid-simulation.
///
/// # Example
///
/// ```rust,ignore
/// let table = load_table_csv(Path::new("stations.csv"))?;
/// let mut sim = SimBuilder::new(params, table).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    params: SimParams,
    table: StationTable,
}

impl SimBuilder {
    pub fn new(params: SimParams, table: StationTable) -> Self {
        Self { params, table }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let SimBuilder { params, table } = self;

        params.validate()?;

        // ── Cross-check params against the table ──────────────────────────
        if let Some(grooming) = params.grooming_station {
            if !table.contains(grooming) {
                return Err(SimError::GroomingStationUnknown(grooming));
            }
        }
        for (i, gate) in params.gates.iter().enumerate() {
            if !table.contains(gate.target) {
                return Err(SimError::GateTargetUnknown(gate.target));
            }
            if params.gates[..i].iter().any(|g| g.target == gate.target) {
                return Err(SimError::DuplicateGate(gate.target));
            }
            for &(src, dst) in &gate.feeders {
                for station in [src, dst] {
                    if !table.contains(station) {
                        return Err(SimError::GateFeederUnknown {
                            gate: gate.target,
                            station,
                        });
                    }
                }
            }
        }

        // ── Assemble run state ────────────────────────────────────────────
        let pools = table
            .iter()
            .map(|(_, station)| ResourcePool::new(station.capacity))
            .collect();
        let gates = params.gates.iter().cloned().map(BatchGate::new).collect();
        let generator = ArrivalGenerator::new(&params)?;
        let roster = EntityRoster::new(params.population);
        let rng = SimRng::new(params.seed);
        let clock = params.make_clock();

        Ok(Sim {
            params,
            table,
            clock,
            rng,
            queue: EventQueue::new(),
            pools,
            arcs: ArcCounter::new(),
            gates,
            roster,
            generator,
            log: VisitLog::new(),
            exited: 0,
        })
    }
}
