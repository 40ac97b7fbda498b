//! `rday-core` — foundational types for the `rday` in-processing simulator.
//!
//! This crate is a dependency of every other `rday-*` crate.  It intentionally
//! has no `rday-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `EntityId`, `StationId`                                 |
//! | [`time`]    | `SimTime`, `SimClock`                                   |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                        |
//! | [`entity`]  | `Sex`, `EntityAttrs`                                    |
//! | [`params`]  | `SimParams`, `PathMode`, `UsmapsStrategy`, `GateSpec`   |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod entity;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entity::{EntityAttrs, Sex};
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, StationId};
pub use params::{GateSpec, PathMode, SimParams, UsmapsStrategy};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
