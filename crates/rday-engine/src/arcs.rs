//! `ArcCounter` — completed transitions per directed arc.
//!
//! Keys are `(source station, taken route)`, so terminal transitions are
//! counted like any other arc.  A missing key reads as zero: absence means
//! "no transitions observed yet", never an error.  Counts are mutated only
//! by the engine at the admission step, when the routing decision is made.

use rustc_hash::FxHashMap;

use rday_core::StationId;
use rday_stations::Route;

/// Monotonic transition counts, keyed by `(source, route)`.
#[derive(Default, Debug)]
pub struct ArcCounter {
    counts: FxHashMap<(StationId, Route), u64>,
}

impl ArcCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the arc `(from, route)` and return the new count.
    pub fn record(&mut self, from: StationId, route: Route) -> u64 {
        let count = self.counts.entry((from, route)).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for `(from, route)`; zero if never taken.
    pub fn count(&self, from: StationId, route: Route) -> u64 {
        self.counts.get(&(from, route)).copied().unwrap_or(0)
    }

    /// Count for a station-to-station edge — the form batch-gate feeders use.
    #[inline]
    pub fn edge(&self, from: StationId, to: StationId) -> u64 {
        self.count(from, Route::To(to))
    }

    /// Sum of all outgoing arcs from `from`.  Equals the number of
    /// admissions at `from` whose routing decision has been recorded.
    pub fn outgoing_total(&self, from: StationId) -> u64 {
        self.counts
            .iter()
            .filter(|((src, _), _)| *src == from)
            .map(|(_, n)| n)
            .sum()
    }

    /// Iterate `((source, route), count)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&(StationId, Route), &u64)> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
