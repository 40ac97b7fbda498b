//! CSV station-table loader.
//!
//! # CSV format
//!
//! One row per station, in network order (row 0 is the entry station).
//! Times are minutes; route columns are signed station indexes.
//!
//! ```csv
//! station,servers,svc_min,svc_mode,svc_max,next_stn,next_fem_stn,usmaps_frac,next_usmaps_stn,next_usmaps_fem_stn
//! Smart Card Issue,8,1,2,3,1,1,1.0,1,1
//! Complete,1,0.01,0.01,0.01,-99,-99,1.0,-99,-99
//! ```
//!
//! **Route columns**:
//!
//! | Value      | Meaning                                   |
//! |------------|-------------------------------------------|
//! | `n >= 0`   | `Route::To(StationId(n))`                 |
//! | negative   | `Route::Exit` (the source data uses −99)  |
//! | *(empty)*  | undefined — valid only if unreachable     |
//!
//! The loader only parses; all validation (bounds, reachability, service
//! ordering) happens in [`StationTable::new`], so a malformed table fails
//! the load rather than the run.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rday_core::StationId;

use crate::error::{StationError, StationResult};
use crate::route::{Route, RouteSet};
use crate::station::{ServiceTime, Station};
use crate::table::StationTable;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    station: String,
    servers: u32,
    svc_min: f64,
    svc_mode: f64,
    svc_max: f64,
    next_stn: Option<i32>,
    next_fem_stn: Option<i32>,
    usmaps_frac: f64,
    next_usmaps_stn: Option<i32>,
    next_usmaps_fem_stn: Option<i32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a station table from a CSV file.
pub fn load_table_csv(path: &Path) -> StationResult<StationTable> {
    let file = std::fs::File::open(path).map_err(StationError::Io)?;
    load_table_reader(file)
}

/// Like [`load_table_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the application binary.
pub fn load_table_reader<R: Read>(reader: R) -> StationResult<StationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stations = Vec::new();

    for result in csv_reader.deserialize::<StationRecord>() {
        let row = result.map_err(|e| StationError::Parse(e.to_string()))?;
        stations.push(Station {
            routes: RouteSet {
                standard: parse_route(&row.station, row.next_stn)?,
                female: parse_route(&row.station, row.next_fem_stn)?,
                usmaps: parse_route(&row.station, row.next_usmaps_stn)?,
                usmaps_female: parse_route(&row.station, row.next_usmaps_fem_stn)?,
            },
            name: row.station,
            capacity: row.servers,
            service_time: ServiceTime::new(row.svc_min, row.svc_mode, row.svc_max),
            usmaps_frac: row.usmaps_frac,
        });
    }

    StationTable::new(stations)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_route(station: &str, cell: Option<i32>) -> StationResult<Option<Route>> {
    match cell {
        None => Ok(None),
        Some(n) if n < 0 => Ok(Some(Route::Exit)),
        Some(n) => {
            let idx = u16::try_from(n).map_err(|_| StationError::Parse(format!(
                "station {station:?}: route index {n} exceeds the station id range"
            )))?;
            Ok(Some(Route::To(StationId(idx))))
        }
    }
}
