//! The R-Day station network: 17 stations from smart-card issue to the
//! completion point, plus the two batch gates (bus movement, oath ceremony)
//! and the grooming-station designation.

use std::io::Cursor;

use anyhow::{Context, Result};

use rday_core::{GateSpec, StationId};
use rday_stations::{load_table_reader, StationTable};

/// Pending-list thresholds for the two gates.
pub const BUS_BATCH_SIZE: usize = 40;
pub const OATH_BATCH_SIZE: usize = 20;

// Service times are minutes (min, mode, max); route cells are station
// indexes, negative = done, blank = unreachable for that class (the female
// issue point has no male routes).  Scan-in at station 1 includes the walk
// to the bus staging area, hence the long service band.
const STATION_CSV: &str = "\
station,servers,svc_min,svc_mode,svc_max,next_stn,next_fem_stn,usmaps_frac,next_usmaps_stn,next_usmaps_fem_stn
RN - Smart Card Issue,8,1,2,3,1,1,1.0,1,1
Ike 1 Scan-In,200,40,45,50,2,2,1.0,2,2
Ike 2 Scan-Out,12,2,3,5,3,3,1.0,3,3
Bus Movement,300,20,20,20,4,4,1.0,6,6
TH 2 Finance,18,3,4,5,5,5,1.0,5,5
TH 3 LRC Issue Point 1,12,2,3,4,6,14,1.0,10,10
TH 5 Med Screening 1,36,5,7,20,7,7,0.5,13,14
TH 6 Oath,75,20,20,20,8,8,1.0,8,8
TH 7 Med Screening 2,36,5,5,5,9,9,0.2,9,9
TH 8 S1 (DD93/SGLI Verify),18,2,3,10,10,10,0.2,4,4
TH 9 Company Holding Area,500,20,22,24,13,13,1.0,15,13
CA 1 Issue Point 2 (WB4),10,2,3,4,12,12,1.0,12,12
LRC Issue Point 6 687,12,2,3,5,15,6,0.2,7,7
CA 2 Barber Shop,13,2,3,4,11,15,1.0,11,15
BH4f Female Issue Point 0,10,5,5,5,,11,1.0,,11
CA 5 Red Sash proceed to company,18,3,5,7,16,16,1.0,16,16
R-Day complete,1,0.01,0.01,0.01,-99,-99,1.0,-99,-99
";

/// Everything the run needs from the network definition.
pub struct Network {
    pub table: StationTable,
    pub gates: Vec<GateSpec>,
    pub grooming_station: StationId,
}

/// Load and validate the embedded table, then wire the gates and the
/// grooming station by name.
pub fn build_network() -> Result<Network> {
    let table = load_table_reader(Cursor::new(STATION_CSV))
        .context("embedded station table failed validation")?;

    let by_name = |name: &str| {
        table
            .id_by_name(name)
            .with_context(|| format!("station {name:?} missing from the table"))
    };

    let scan_out = by_name("Ike 2 Scan-Out")?;
    let bus = by_name("Bus Movement")?;
    let med_screening = by_name("TH 5 Med Screening 1")?;
    let oath = by_name("TH 6 Oath")?;
    let lrc_issue = by_name("LRC Issue Point 6 687")?;
    let barber = by_name("CA 2 Barber Shop")?;

    let gates = vec![
        // Bus departures: everyone funnels through scan-out.
        GateSpec {
            target: bus,
            threshold: BUS_BATCH_SIZE,
            feeders: vec![(scan_out, bus)],
        },
        // Oath ceremony: reached from med screening (standard path) and the
        // LRC issue point (modified USMAPS path) — both edges must be summed
        // for the final partial batch to release.
        GateSpec {
            target: oath,
            threshold: OATH_BATCH_SIZE,
            feeders: vec![(lrc_issue, oath), (med_screening, oath)],
        },
    ];

    Ok(Network {
        table,
        gates,
        grooming_station: barber,
    })
}
