//! `StationTable` — the validated, immutable station network.
//!
//! # Validation
//!
//! Construction runs two passes:
//!
//! 1. **Per-station**: capacity ≥ 1, service-time ordering, `usmaps_frac`
//!    in [0, 1], route targets in bounds, unique names.
//! 2. **Reachability**: for each attribute class (sex × USMAPS-modified),
//!    walk the network from the entry station following that class's routes.
//!    Every station the walk reaches must define the class's route; stations
//!    the class can never reach may leave it undefined (the network has a
//!    female-only station with no male routes).
//!
//! Passing both means the engine can treat every in-run routing lookup as
//! infallible-by-construction; a `None` route mid-run is reported as a
//! distinct engine error rather than a crash.

use std::collections::{HashMap, HashSet};

use rday_core::{PathMode, Sex, StationId};

use crate::error::{StationError, StationResult};
use crate::route::Route;
use crate::station::Station;

/// Ordered, validated station definitions.  Index order is `StationId` order.
#[derive(Clone, Debug)]
pub struct StationTable {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
}

impl StationTable {
    /// Build and validate a table.  The first station is the entry point of
    /// the network (where generated entities arrive).
    pub fn new(stations: Vec<Station>) -> StationResult<Self> {
        if stations.is_empty() {
            return Err(StationError::Empty);
        }

        let mut by_name = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            validate_station(station, stations.len())?;
            let id = StationId(idx as u16);
            if by_name.insert(station.name.clone(), id).is_some() {
                return Err(StationError::DuplicateName(station.name.clone()));
            }
        }

        let table = Self { stations, by_name };
        table.validate_reachability()?;
        Ok(table)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The entry station every generated entity starts at.
    #[inline]
    pub fn entry(&self) -> StationId {
        StationId(0)
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Station id by display name.  Used when wiring run parameters (gates,
    /// grooming station) from named configuration.
    pub fn id_by_name(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: StationId) -> Option<&str> {
        self.get(id).map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate `(StationId, &Station)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &Station)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i as u16), s))
    }

    #[inline]
    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    // ── Reachability validation ───────────────────────────────────────────

    /// Walk the network once per attribute class.  The four walks cover all
    /// four `RouteSet` fields: the non-alternate classes exercise the
    /// standard/female routes (shared by USMAPS entities under standard
    /// mode), the alternate classes exercise the USMAPS routes that only
    /// engage under modified mode.
    fn validate_reachability(&self) -> StationResult<()> {
        const CLASSES: [(Sex, bool, PathMode, &str); 4] = [
            (Sex::Male, false, PathMode::Standard, "male"),
            (Sex::Female, false, PathMode::Standard, "female"),
            (Sex::Male, true, PathMode::Modified, "USMAPS male"),
            (Sex::Female, true, PathMode::Modified, "USMAPS female"),
        ];

        for (sex, usmaps, mode, class) in CLASSES {
            let mut visited: HashSet<StationId> = HashSet::new();
            let mut current = self.entry();
            loop {
                if !visited.insert(current) {
                    // Revisiting a station means this class cycles; every
                    // route on the cycle is already checked.
                    break;
                }
                let station = &self.stations[current.index()];
                let route = station.routes.resolve(sex, usmaps, mode).ok_or_else(|| {
                    StationError::MissingRoute {
                        station: station.name.clone(),
                        class: class.to_string(),
                    }
                })?;
                match route {
                    Route::Exit => break,
                    Route::To(next) => current = next,
                }
            }
        }
        Ok(())
    }
}

// ── Per-station checks ────────────────────────────────────────────────────────

fn validate_station(station: &Station, table_len: usize) -> StationResult<()> {
    let invalid = |reason: String| StationError::Invalid {
        station: station.name.clone(),
        reason,
    };

    if station.name.trim().is_empty() {
        return Err(StationError::Invalid {
            station: String::new(),
            reason: "station name must be non-empty".into(),
        });
    }
    if station.capacity == 0 {
        return Err(invalid("capacity must be >= 1".into()));
    }
    station.service_time.check().map_err(|reason| invalid(reason))?;
    if !(0.0..=1.0).contains(&station.usmaps_frac) {
        return Err(invalid(format!(
            "usmaps_frac must be in [0, 1], got {}",
            station.usmaps_frac
        )));
    }

    let targets = [
        station.routes.standard,
        station.routes.female,
        station.routes.usmaps,
        station.routes.usmaps_female,
    ];
    for target in targets.into_iter().flatten() {
        if let Route::To(next) = target {
            if next.index() >= table_len {
                return Err(StationError::RouteOutOfRange {
                    station: station.name.clone(),
                    target: next.index(),
                });
            }
        }
    }
    Ok(())
}
