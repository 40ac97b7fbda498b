//! Unit tests for rday-stations.

use rday_core::{EntityAttrs, PathMode, Sex, SimRng, StationId};

use crate::{Route, RouteSet, ServiceTime, Station, StationTable};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn station(name: &str, capacity: u32, svc: [f64; 3], routes: RouteSet) -> Station {
    Station {
        name: name.to_string(),
        capacity,
        service_time: ServiceTime::new(svc[0], svc[1], svc[2]),
        usmaps_frac: 1.0,
        routes,
    }
}

fn all_routes(route: Route) -> RouteSet {
    RouteSet {
        standard: Some(route),
        female: Some(route),
        usmaps: Some(route),
        usmaps_female: Some(route),
    }
}

/// Two-station chain: entry → exit station → Exit.
fn chain_table() -> StationTable {
    StationTable::new(vec![
        station("A", 2, [1.0, 2.0, 3.0], all_routes(Route::To(StationId(1)))),
        station("B", 1, [0.5, 0.5, 0.5], all_routes(Route::Exit)),
    ])
    .unwrap()
}

// ── ServiceTime ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod service_time {
    use super::*;

    #[test]
    fn check_accepts_ordered_triple() {
        assert!(ServiceTime::new(1.0, 2.0, 3.0).check().is_ok());
        assert!(ServiceTime::new(5.0, 5.0, 5.0).check().is_ok());
        assert!(ServiceTime::new(0.0, 0.0, 0.0).check().is_ok());
    }

    #[test]
    fn check_rejects_disorder() {
        assert!(ServiceTime::new(3.0, 2.0, 1.0).check().is_err());
        assert!(ServiceTime::new(1.0, 4.0, 3.0).check().is_err());
        assert!(ServiceTime::new(-1.0, 0.0, 1.0).check().is_err());
        assert!(ServiceTime::new(1.0, f64::NAN, 3.0).check().is_err());
    }

    #[test]
    fn sample_within_bounds() {
        let svc = ServiceTime::new(6.0, 12.0, 30.0); // 0.1..0.5 hours
        let mut rng = SimRng::new(11);
        for _ in 0..500 {
            let hours = svc.sample_hours(&mut rng).unwrap();
            assert!((0.1..=0.5).contains(&hours), "sample {hours} out of range");
        }
    }

    #[test]
    fn degenerate_range_is_point_mass() {
        let svc = ServiceTime::new(20.0, 20.0, 20.0);
        let mut rng = SimRng::new(0);
        for _ in 0..10 {
            let hours = svc.sample_hours(&mut rng).unwrap();
            assert!((hours - 20.0 / 60.0).abs() < 1e-12);
        }
    }

    #[test]
    fn usmaps_scaling_applies() {
        let mut st = station("Med", 4, [60.0, 60.0, 60.0], all_routes(Route::Exit));
        st.usmaps_frac = 0.5;
        let mut rng = SimRng::new(3);

        let attrs = EntityAttrs::new(Sex::Male, true);
        let hours = crate::sample_service_hours(&st, attrs, false, &mut rng).unwrap();
        assert!((hours - 0.5).abs() < 1e-12);

        let attrs = EntityAttrs::new(Sex::Male, false);
        let hours = crate::sample_service_hours(&st, attrs, false, &mut rng).unwrap();
        assert!((hours - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grooming_override_zeroes_females_only() {
        let mut st = station("Barber", 13, [2.0, 3.0, 4.0], all_routes(Route::Exit));
        st.usmaps_frac = 0.5;
        let mut rng = SimRng::new(9);

        // Female + USMAPS: the override wins over the scaled sample.
        let attrs = EntityAttrs::new(Sex::Female, true);
        let hours = crate::sample_service_hours(&st, attrs, true, &mut rng).unwrap();
        assert_eq!(hours, 0.0);

        // Male at the same station keeps a nonzero duration.
        let attrs = EntityAttrs::new(Sex::Male, false);
        let hours = crate::sample_service_hours(&st, attrs, true, &mut rng).unwrap();
        assert!(hours > 0.0);

        // Female elsewhere is not zeroed.
        let attrs = EntityAttrs::new(Sex::Female, false);
        let hours = crate::sample_service_hours(&st, attrs, false, &mut rng).unwrap();
        assert!(hours > 0.0);
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use super::*;

    fn distinct_routes() -> RouteSet {
        RouteSet {
            standard: Some(Route::To(StationId(1))),
            female: Some(Route::To(StationId(2))),
            usmaps: Some(Route::To(StationId(3))),
            usmaps_female: Some(Route::To(StationId(4))),
        }
    }

    #[test]
    fn resolve_selects_the_four_fields() {
        let r = distinct_routes();
        let m = PathMode::Modified;
        assert_eq!(r.resolve(Sex::Male, false, m), Some(Route::To(StationId(1))));
        assert_eq!(r.resolve(Sex::Female, false, m), Some(Route::To(StationId(2))));
        assert_eq!(r.resolve(Sex::Male, true, m), Some(Route::To(StationId(3))));
        assert_eq!(r.resolve(Sex::Female, true, m), Some(Route::To(StationId(4))));
    }

    #[test]
    fn usmaps_under_standard_mode_takes_standard_route() {
        let r = distinct_routes();
        let s = PathMode::Standard;
        assert_eq!(r.resolve(Sex::Male, true, s), Some(Route::To(StationId(1))));
        assert_eq!(r.resolve(Sex::Female, true, s), Some(Route::To(StationId(2))));
    }

    #[test]
    fn route_codes() {
        assert_eq!(Route::To(StationId(7)).code(), 7);
        assert_eq!(Route::Exit.code(), -1);
        assert_eq!(Route::Exit.station(), None);
        assert_eq!(Route::To(StationId(7)).station(), Some(StationId(7)));
    }
}

// ── StationTable ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn valid_chain_builds() {
        let table = chain_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entry(), StationId(0));
        assert_eq!(table.id_by_name("B"), Some(StationId(1)));
        assert_eq!(table.name(StationId(0)), Some("A"));
    }

    #[test]
    fn empty_table_rejected() {
        assert!(StationTable::new(vec![]).is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = StationTable::new(vec![
            station("A", 1, [1.0, 1.0, 1.0], all_routes(Route::To(StationId(1)))),
            station("A", 1, [1.0, 1.0, 1.0], all_routes(Route::Exit)),
        ]);
        assert!(matches!(result, Err(crate::StationError::DuplicateName(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let result = StationTable::new(vec![station(
            "A",
            0,
            [1.0, 1.0, 1.0],
            all_routes(Route::Exit),
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_route_rejected() {
        let result = StationTable::new(vec![station(
            "A",
            1,
            [1.0, 1.0, 1.0],
            all_routes(Route::To(StationId(9))),
        )]);
        assert!(matches!(result, Err(crate::StationError::RouteOutOfRange { .. })));
    }

    #[test]
    fn reachable_station_missing_female_route_rejected() {
        // Entry defines all four routes; its successor lacks a female route
        // even though females are routed there.
        let mut broken = station("B", 1, [1.0, 1.0, 1.0], all_routes(Route::Exit));
        broken.routes.female = None;
        let result = StationTable::new(vec![
            station("A", 1, [1.0, 1.0, 1.0], all_routes(Route::To(StationId(1)))),
            broken,
        ]);
        assert!(matches!(result, Err(crate::StationError::MissingRoute { .. })));
    }

    #[test]
    fn unreachable_station_may_omit_routes() {
        // "FemOnly" is reached only by female entities; it omits male routes.
        let mut entry = station("A", 1, [1.0, 1.0, 1.0], all_routes(Route::To(StationId(2))));
        entry.routes.female = Some(Route::To(StationId(1)));
        entry.routes.usmaps_female = Some(Route::To(StationId(1)));
        let fem_only = Station {
            name: "FemOnly".to_string(),
            capacity: 10,
            service_time: ServiceTime::new(5.0, 5.0, 5.0),
            usmaps_frac: 1.0,
            routes: RouteSet {
                standard: None,
                female: Some(Route::To(StationId(2))),
                usmaps: None,
                usmaps_female: Some(Route::To(StationId(2))),
            },
        };
        let exit = station("Done", 1, [0.01, 0.01, 0.01], all_routes(Route::Exit));
        assert!(StationTable::new(vec![entry, fem_only, exit]).is_ok());
    }

    #[test]
    fn cyclic_routes_terminate_validation() {
        // A → B → A cycle for every class; validation must not loop forever.
        let result = StationTable::new(vec![
            station("A", 1, [1.0, 1.0, 1.0], all_routes(Route::To(StationId(1)))),
            station("B", 1, [1.0, 1.0, 1.0], all_routes(Route::To(StationId(0)))),
        ]);
        assert!(result.is_ok());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::load_table_reader;

    const TABLE_CSV: &str = "\
station,servers,svc_min,svc_mode,svc_max,next_stn,next_fem_stn,usmaps_frac,next_usmaps_stn,next_usmaps_fem_stn
Check-In,8,1,2,3,1,1,1.0,1,1
Fem Issue,10,5,5,5,,2,1.0,,2
Complete,1,0.01,0.01,0.01,-99,-99,1.0,-99,-99
";

    #[test]
    fn parses_routes_and_blanks() {
        // Make the blank male cells legal by routing both male classes
        // straight to the terminal station.
        let csv = TABLE_CSV.replace(
            "Check-In,8,1,2,3,1,1,1.0,1,1",
            "Check-In,8,1,2,3,2,1,1.0,2,1",
        );
        let table = load_table_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 3);

        let fem_issue = table.get(StationId(1)).unwrap();
        assert_eq!(fem_issue.routes.standard, None);
        assert_eq!(fem_issue.routes.female, Some(Route::To(StationId(2))));

        let complete = table.get(StationId(2)).unwrap();
        assert_eq!(complete.routes.standard, Some(Route::Exit));
        assert_eq!(complete.routes.usmaps_female, Some(Route::Exit));
    }

    #[test]
    fn malformed_rows_fail() {
        let csv = "station,servers\nOnly,\n";
        assert!(load_table_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn unreachable_blank_check_still_applies() {
        // Males are routed into the station with a blank male route: load fails.
        let result = load_table_reader(Cursor::new(TABLE_CSV));
        assert!(matches!(result, Err(crate::StationError::MissingRoute { .. })));
    }
}
