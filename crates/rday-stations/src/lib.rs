//! `rday-stations` — the immutable station network for the rday simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`station`] | `Station`, `ServiceTime` (triangular min/mode/max)       |
//! | [`route`]   | `Route`, `RouteSet` — the attribute-based routing lookup |
//! | [`table`]   | `StationTable` — ordered stations + load-time validation |
//! | [`service`] | `sample_service_hours` — draw + per-entity adjustments   |
//! | [`loader`]  | `load_table_csv`, `load_table_reader`                    |
//! | [`error`]   | `StationError`, `StationResult<T>`                       |
//!
//! # Model (summary)
//!
//! A station is a named service step with a fixed server capacity, a
//! triangular service-time distribution (minutes), a USMAPS scaling fraction,
//! and four optional next-routes (standard / female / USMAPS-modified /
//! USMAPS-modified female).  The table is loaded once per run, validated, and
//! then read-only: every routing decision during simulation is a pure lookup.
//!
//! Validation walks the network once per attribute class and fails the load
//! if any reachable station lacks the route that class needs — a missing
//! route is a configuration error, never a runtime one.

pub mod error;
pub mod loader;
pub mod route;
pub mod service;
pub mod station;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{StationError, StationResult};
pub use loader::{load_table_csv, load_table_reader};
pub use route::{Route, RouteSet};
pub use service::sample_service_hours;
pub use station::{ServiceTime, Station};
pub use table::StationTable;
