//! rday — in-processing day simulation.
//!
//! Pushes a class of ~1250 incoming cadets through the 17-station reception
//! pipeline (card issue, scan-in, bus staging, finance, medical, oath,
//! barber, issue points) and writes the full visit trace to
//! `station_visits.csv` for downstream reporting.
//!
//! ```text
//! rday [--mode std|mod] [--usmaps rand|front|back] [--population N]
//!      [--seed N] [--output DIR]
//! ```

mod stations;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use rday_core::{EntityId, PathMode, SimParams, SimTime, StationId, UsmapsStrategy};
use rday_engine::{SimBuilder, SimObserver, VisitRecord};
use rday_output::{CsvReportWriter, ReportObserver, ReportWriter};

use stations::build_network;

// ── Run constants ─────────────────────────────────────────────────────────────

const POPULATION: u32 = 1_249;
const ARRIVAL_RATE_PER_HOUR: f64 = 2_000.0;
const WINDOW_SIZE: u32 = 250;
const FEMALE_CAP_PER_WINDOW: u32 = 53;
const USMAPS_CAP: u32 = 200;
const USMAPS_PROBABILITY: f64 = 0.25;
const START_OF_DAY_HOURS: f64 = 5.5; // 05:30
const SEED: u64 = 42;

// ── CLI ───────────────────────────────────────────────────────────────────────

struct Args {
    mode: PathMode,
    usmaps: UsmapsStrategy,
    population: u32,
    seed: u64,
    output: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        mode: PathMode::Standard,
        usmaps: UsmapsStrategy::Random,
        population: POPULATION,
        seed: SEED,
        output: PathBuf::from("output"),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("{flag} requires a value"))
        };
        match flag.as_str() {
            "--mode" => args.mode = value()?.parse()?,
            "--usmaps" => args.usmaps = value()?.parse()?,
            "--population" => args.population = value()?.parse()?,
            "--seed" => args.seed = value()?.parse()?,
            "--output" => args.output = PathBuf::from(value()?),
            other => bail!("unknown argument {other:?} (see the crate docs for usage)"),
        }
    }
    Ok(args)
}

// ── Observer wrapper to collect run statistics ────────────────────────────────

struct StatsObserver<W: ReportWriter> {
    inner: ReportObserver<W>,
    releases: Vec<(StationId, usize, SimTime)>,
    exited: u32,
    last_exit: SimTime,
}

impl<W: ReportWriter> StatsObserver<W> {
    fn new(inner: ReportObserver<W>) -> Self {
        Self {
            inner,
            releases: Vec::new(),
            exited: 0,
            last_exit: SimTime::ZERO,
        }
    }
}

impl<W: ReportWriter> SimObserver for StatsObserver<W> {
    fn on_visit(&mut self, record: &VisitRecord) {
        self.inner.on_visit(record);
    }

    fn on_gate_release(&mut self, gate: StationId, released: usize, time: SimTime) {
        self.releases.push((gate, released, time));
        self.inner.on_gate_release(gate, released, time);
    }

    fn on_entity_exit(&mut self, entity: EntityId, time: SimTime) {
        self.exited += 1;
        self.last_exit = time;
        self.inner.on_entity_exit(entity, time);
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        self.inner.on_sim_end(final_time);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    println!("=== rday — in-processing day simulation ===");
    println!(
        "Population: {}  |  Mode: {}  |  USMAPS: {}  |  Seed: {}",
        args.population, args.mode, args.usmaps, args.seed
    );
    println!();

    // 1. Load and validate the station network.
    let network = build_network()?;
    println!(
        "Station network: {} stations, {} batch gates",
        network.table.len(),
        network.gates.len()
    );

    // 2. Assemble run parameters.
    let params = SimParams {
        path_mode: args.mode,
        usmaps_strategy: args.usmaps,
        population: args.population,
        arrival_rate_per_hour: ARRIVAL_RATE_PER_HOUR,
        window_size: WINDOW_SIZE,
        female_cap_per_window: FEMALE_CAP_PER_WINDOW,
        usmaps_cap: USMAPS_CAP,
        usmaps_probability: USMAPS_PROBABILITY,
        grooming_station: Some(network.grooming_station),
        gates: network.gates,
        start_of_day_hours: START_OF_DAY_HOURS,
        seed: args.seed,
    };

    // 3. Build the sim.
    let mut sim = SimBuilder::new(params, network.table).build()?;

    // 4. Set up streaming CSV output.
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {:?}", args.output))?;
    let writer = CsvReportWriter::new(&args.output)?;
    let mut obs = StatsObserver::new(ReportObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let (h, m) = sim.clock.wall_hhmm();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} of {} entities processed out; last completion at {} ({:02}:{:02})",
        obs.exited,
        args.population,
        sim.clock.now,
        h,
        m
    );
    println!("  visit log: {} records -> {:?}", sim.log.len(), args.output.join("station_visits.csv"));
    println!("  gate releases: {}", obs.releases.len());
    for (gate, released, time) in &obs.releases {
        let name = sim.table.name(*gate).unwrap_or("?");
        println!("    {time}  {name:<32} released {released}");
    }
    println!();

    // 7. Per-station load table.
    println!(
        "{:<34} {:>8} {:>8} {:>10} {:>12}",
        "Station", "Servers", "Visits", "Peak queue", "Peak in-svc"
    );
    println!("{}", "-".repeat(76));
    for (id, station) in sim.table.iter() {
        let visits = sim.log.visits_at(id).count();
        let peak_queue = sim.log.visits_at(id).map(|r| r.queue_len).max().unwrap_or(0);
        let peak_busy = sim.log.visits_at(id).map(|r| r.busy_after).max().unwrap_or(0);
        println!(
            "{:<34} {:>8} {:>8} {:>10} {:>12}",
            station.name, station.capacity, visits, peak_queue, peak_busy
        );
    }

    Ok(())
}
