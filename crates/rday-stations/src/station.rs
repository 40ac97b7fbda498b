//! Station definition: service-time parameters and capacity.

use crate::route::RouteSet;

// ── ServiceTime ───────────────────────────────────────────────────────────────

/// Triangular service-time parameters in **minutes**: min ≤ mode ≤ max.
///
/// Sampling happens in hours (the simulation's time unit); see
/// [`sample_hours`](Self::sample_hours) in [`crate::service`] for the draw
/// and the degenerate point-mass case.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceTime {
    pub min_minutes: f64,
    pub mode_minutes: f64,
    pub max_minutes: f64,
}

impl ServiceTime {
    pub fn new(min_minutes: f64, mode_minutes: f64, max_minutes: f64) -> Self {
        Self {
            min_minutes,
            mode_minutes,
            max_minutes,
        }
    }

    /// The `(min, mode, max)` triple converted to hours.
    #[inline]
    pub fn to_hours(self) -> (f64, f64, f64) {
        (
            self.min_minutes / 60.0,
            self.mode_minutes / 60.0,
            self.max_minutes / 60.0,
        )
    }

    /// `true` if the distribution is a point mass (zero-width range).
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.max_minutes <= self.min_minutes
    }

    /// Check the triple's invariants, returning a human-readable reason on
    /// failure.  Called by table validation, which attaches the station name.
    pub fn check(self) -> Result<(), String> {
        let ServiceTime {
            min_minutes: min,
            mode_minutes: mode,
            max_minutes: max,
        } = self;
        if !(min.is_finite() && mode.is_finite() && max.is_finite()) {
            return Err(format!("service time must be finite, got [{min}, {mode}, {max}]"));
        }
        if min < 0.0 {
            return Err(format!("service time minimum must be >= 0, got {min}"));
        }
        if !(min <= mode && mode <= max) {
            return Err(format!(
                "service time must satisfy min <= mode <= max, got [{min}, {mode}, {max}]"
            ));
        }
        Ok(())
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

/// One processing step in the network.
///
/// The station's index in the [`StationTable`](crate::StationTable) is its
/// `StationId`; the struct itself carries no id field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    /// Display name, unique within the table.
    pub name: String,

    /// Number of parallel servers.  Large values make the station
    /// effectively unbounded (e.g. a holding area).
    pub capacity: u32,

    /// Triangular service-time parameters (minutes).
    pub service_time: ServiceTime,

    /// Multiplier applied to USMAPS entities' sampled durations, in [0, 1].
    /// 1.0 means no reduction.
    pub usmaps_frac: f64,

    /// The four attribute-class routes out of this station.
    pub routes: RouteSet,
}
