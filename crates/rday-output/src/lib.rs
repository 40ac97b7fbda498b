//! `rday-output` — visit-log export for the rday simulator.
//!
//! The engine's visit log is its sole artifact; this crate writes it out.
//! One backend is provided (CSV), behind the [`ReportWriter`] trait so that
//! further formats slot in without touching the engine:
//!
//! | Backend  | File created          |
//! |----------|-----------------------|
//! | CSV      | `station_visits.csv`  |
//!
//! Writers can be driven two ways: streamed during the run via
//! [`ReportObserver`] (which implements `rday_engine::SimObserver`), or in
//! bulk from `Sim::log` after the run with [`write_log`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rday_output::{CsvReportWriter, ReportObserver};
//!
//! let writer = CsvReportWriter::new(Path::new("./output"))?;
//! let mut obs = ReportObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use writer::{write_log, ReportWriter};
