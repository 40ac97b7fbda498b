//! Run parameters — everything a single simulation run is configured with.
//!
//! `SimParams` is external configuration, fixed per run and never negotiated
//! at runtime: population size, arrival process, attribute caps, batch-gate
//! topology, and the global path mode.  The station table itself lives in
//! `rday-stations`; the two are joined by the engine builder.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::ids::StationId;
use crate::time::SimClock;

// ── PathMode ──────────────────────────────────────────────────────────────────

/// Global routing switch: whether USMAPS entities take their alternate routes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathMode {
    /// Everyone follows the sex-appropriate standard route.
    #[default]
    Standard,
    /// USMAPS entities follow their alternate route; everyone else standard.
    Modified,
}

impl PathMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PathMode::Standard => "std",
            PathMode::Modified => "mod",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "std" | "standard" => Ok(PathMode::Standard),
            "mod" | "modified" => Ok(PathMode::Modified),
            other => Err(CoreError::Parse(format!("unknown path mode {other:?}"))),
        }
    }
}

// ── UsmapsStrategy ────────────────────────────────────────────────────────────

/// How USMAPS membership is distributed across the arrival stream.
///
/// All three strategies respect `SimParams::usmaps_cap` as a hard ceiling.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsmapsStrategy {
    /// Independent draw per entity with probability `usmaps_probability`.
    #[default]
    Random,
    /// The earliest ids (below the cap) are USMAPS.
    Front,
    /// The latest ids (the last `usmaps_cap` of the population) are USMAPS.
    Back,
}

impl UsmapsStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            UsmapsStrategy::Random => "rand",
            UsmapsStrategy::Front => "front",
            UsmapsStrategy::Back => "back",
        }
    }
}

impl fmt::Display for UsmapsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsmapsStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rand" | "random" => Ok(UsmapsStrategy::Random),
            "front" => Ok(UsmapsStrategy::Front),
            "back" => Ok(UsmapsStrategy::Back),
            other => Err(CoreError::Parse(format!("unknown USMAPS strategy {other:?}"))),
        }
    }
}

// ── GateSpec ──────────────────────────────────────────────────────────────────

/// Configuration of one batch gate (bus movement, oath ceremony, …).
///
/// Entities routed to `target` are held in the gate's pending list and
/// released together when either the pending count exceeds `threshold` or
/// the summed counts of the `feeders` arcs show that every generated entity
/// has already made a transition into the gate.
///
/// `feeders` must name every arc that can carry entities into `target`; an
/// arc added to the routing table but not listed here silently undercounts
/// and can leave the final partial batch stranded (the engine warns at end
/// of run if that happens).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateSpec {
    /// The station the gate feeds.
    pub target: StationId,
    /// Release when the pending count exceeds this.
    pub threshold: usize,
    /// Upstream `(source, destination)` arcs feeding the gate.
    pub feeders: Vec<(StationId, StationId)>,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation run parameters.
///
/// Typically assembled by the application binary and passed to
/// `rday_engine::SimBuilder` together with the station table.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Global routing switch for USMAPS entities.
    pub path_mode: PathMode,

    /// How USMAPS membership is assigned.
    pub usmaps_strategy: UsmapsStrategy,

    /// Number of entities generated, with ids `1..=population`.
    pub population: u32,

    /// Mean arrival rate (entities per simulated hour).  Inter-arrival gaps
    /// are exponential with mean `1 / arrival_rate_per_hour`.
    pub arrival_rate_per_hour: f64,

    /// Throttling window: after this many arrivals, the generator sleeps out
    /// the remainder of one simulated hour (if any) before continuing.
    pub window_size: u32,

    /// Maximum number of female entities per throttling window.
    pub female_cap_per_window: u32,

    /// Hard ceiling on the USMAPS sub-population, all strategies.
    pub usmaps_cap: u32,

    /// Per-draw probability under [`UsmapsStrategy::Random`].
    pub usmaps_probability: f64,

    /// Station where female entities receive a zero-length service (they
    /// pass through admission/release bookkeeping but are not serviced).
    /// `None` disables the override.
    pub grooming_station: Option<StationId>,

    /// Batch gates keyed by their target stations.
    pub gates: Vec<GateSpec>,

    /// Time of day (hours) at which the run starts, e.g. 5.5 = 05:30.
    /// Presentation only — the event clock itself starts at zero.
    pub start_of_day_hours: f64,

    /// Master RNG seed.  The same seed and config always reproduce a run.
    pub seed: u64,
}

impl SimParams {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_of_day_hours)
    }

    /// Check internal consistency.  Cross-checks against the station table
    /// (gate targets, grooming station, feeder arcs) are the engine
    /// builder's job; this covers only what the params alone can know.
    pub fn validate(&self) -> CoreResult<()> {
        if self.population == 0 {
            return Err(CoreError::Config("population must be > 0".into()));
        }
        if !(self.arrival_rate_per_hour.is_finite() && self.arrival_rate_per_hour > 0.0) {
            return Err(CoreError::Config(format!(
                "arrival rate must be finite and > 0, got {}",
                self.arrival_rate_per_hour
            )));
        }
        if self.window_size == 0 {
            return Err(CoreError::Config("throttling window size must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.usmaps_probability) {
            return Err(CoreError::Config(format!(
                "USMAPS probability must be in [0, 1], got {}",
                self.usmaps_probability
            )));
        }
        if !self.start_of_day_hours.is_finite() || self.start_of_day_hours < 0.0 {
            return Err(CoreError::Config(format!(
                "start-of-day offset must be finite and >= 0, got {}",
                self.start_of_day_hours
            )));
        }
        for gate in &self.gates {
            if gate.feeders.is_empty() {
                return Err(CoreError::Config(format!(
                    "batch gate for {} has no feeder arcs",
                    gate.target
                )));
            }
        }
        Ok(())
    }
}
