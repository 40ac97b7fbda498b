//! Service-duration sampling.
//!
//! One draw from a bounded triangular distribution, then two deterministic
//! per-entity adjustments in fixed order:
//!
//! 1. USMAPS entities scale the sample by the station's `usmaps_frac`.
//! 2. Female entities at the grooming station get a zero duration — they
//!    still occupy a server slot for zero time, so admission/release
//!    bookkeeping (and the visit record) happen normally.
//!
//! The order matters: the override must annihilate an already-scaled value,
//! so swapping the two would only be observable if it were ever reversed.

use rand_distr::{Distribution, Triangular};

use rday_core::{EntityAttrs, SimRng};

use crate::error::{StationError, StationResult};
use crate::station::{ServiceTime, Station};

impl ServiceTime {
    /// Draw one service duration in hours.
    ///
    /// A zero-width range (`max == min`) is a point mass at `min`: the
    /// triangular shape parameter is 0/0 there, so the distribution is never
    /// constructed for it.
    pub fn sample_hours(self, rng: &mut SimRng) -> StationResult<f64> {
        let (min, mode, max) = self.to_hours();
        if self.is_degenerate() {
            return Ok(min);
        }
        let dist = Triangular::new(min, max, mode)
            .map_err(|e| StationError::Distribution(e.to_string()))?;
        Ok(dist.sample(rng.inner()))
    }
}

/// Sample the service duration for one entity at `station`.
///
/// `grooming` is `true` when `station` is the run's designated grooming
/// station (a run parameter, resolved by the engine).
pub fn sample_service_hours(
    station: &Station,
    attrs: EntityAttrs,
    grooming: bool,
    rng: &mut SimRng,
) -> StationResult<f64> {
    let mut hours = station.service_time.sample_hours(rng)?;
    if attrs.usmaps {
        hours *= station.usmaps_frac;
    }
    if attrs.sex.is_female() && grooming {
        hours = 0.0;
    }
    Ok(hours)
}
