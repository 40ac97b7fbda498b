//! Routing types: `Route` and the per-station `RouteSet` lookup.

use std::fmt;

use rday_core::{PathMode, Sex, StationId};

// ── Route ─────────────────────────────────────────────────────────────────────

/// Where an entity goes after completing service at a station.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    /// Continue to another station.
    To(StationId),
    /// Terminal: the entity's process ends.  External tables encode this as
    /// any negative index; exports write it as `-1`.
    Exit,
}

impl Route {
    /// The destination station, if any.
    #[inline]
    pub fn station(self) -> Option<StationId> {
        match self {
            Route::To(s) => Some(s),
            Route::Exit => None,
        }
    }

    /// Signed index form used by the CSV export (`Exit` → `-1`).
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Route::To(s) => s.0 as i32,
            Route::Exit => -1,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::To(s) => write!(f, "->{}", s.0),
            Route::Exit => f.write_str("->exit"),
        }
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// The four next-route fields of one station.
///
/// `None` means "undefined": acceptable only if no entity of that attribute
/// class can ever reach the station (the original network has a female-only
/// issue point with no male routes).  [`StationTable`](crate::StationTable)
/// validation enforces this at load time, so [`resolve`](Self::resolve)
/// returning `None` during a run indicates a table that bypassed validation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSet {
    /// Standard route (male, or any non-modified USMAPS male).
    pub standard: Option<Route>,
    /// Standard female route.
    pub female: Option<Route>,
    /// USMAPS route, used only under [`PathMode::Modified`].
    pub usmaps: Option<Route>,
    /// USMAPS female route, used only under [`PathMode::Modified`].
    pub usmaps_female: Option<Route>,
}

impl RouteSet {
    /// Pure routing decision: `(sex, usmaps, global mode)` → next route.
    ///
    /// The alternate USMAPS route applies only when the entity is USMAPS
    /// *and* the run is in modified mode; in every other case the entity
    /// follows the sex-appropriate standard route.
    #[inline]
    pub fn resolve(&self, sex: Sex, usmaps: bool, mode: PathMode) -> Option<Route> {
        let alternate = usmaps && mode == PathMode::Modified;
        match (sex, alternate) {
            (Sex::Male, false) => self.standard,
            (Sex::Male, true) => self.usmaps,
            (Sex::Female, false) => self.female,
            (Sex::Female, true) => self.usmaps_female,
        }
    }
}
