//! `rday-engine` — discrete-event core of the rday in-processing simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`event`]     | `Event`, `EventQueue` (time + insertion-sequence order)   |
//! | [`pool`]      | `ResourcePool` — FIFO admission queue per station         |
//! | [`arcs`]      | `ArcCounter` — completed transitions per directed arc     |
//! | [`gate`]      | `BatchGate` — threshold-or-completion release barrier     |
//! | [`generator`] | `ArrivalGenerator`, `EntityRoster`                        |
//! | [`telemetry`] | `VisitRecord`, `VisitLog`                                 |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                       |
//! | [`builder`]   | `SimBuilder`                                              |
//! | [`sim`]       | `Sim` — the event loop                                    |
//! | [`error`]     | `SimError`, `SimResult<T>`                                |
//!
//! # Event model (summary)
//!
//! Every entity's journey is a chain of events on one logical clock:
//!
//! ```text
//! Arrival(e)            — e enters the entry station; generator continues
//! Admit(s)              — station s admits its queue head if a server is free
//! CompleteService{..}   — service ends: release the server, route onward
//! ResetWindow           — the generator's throttling window reopens
//! ```
//!
//! Processes suspend at exactly two points: waiting for admission (woken by
//! an `Admit` event) and sleeping out a sampled duration (woken by
//! `CompleteService`).  Events sharing a timestamp run in insertion order —
//! the tie-break is an explicit sequence number, not an incidental ordering,
//! so identical configurations replay identically.
//!
//! All mutable run state (pools, arc counter, gates, visit log, RNG) is owned
//! by one [`Sim`] instance and touched only between events; the engine is
//! single-threaded by design.

pub mod arcs;
pub mod builder;
pub mod error;
pub mod event;
pub mod gate;
pub mod generator;
pub mod observer;
pub mod pool;
pub mod sim;
pub mod telemetry;


pub use arcs::ArcCounter;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{Event, EventQueue};
pub use gate::{BatchGate, GateStatus};
pub use generator::{ArrivalGenerator, EntityRoster, NextArrival, WindowAction};
pub use observer::{NoopObserver, SimObserver};
pub use pool::{Admission, QueuedRequest, ResourcePool};
pub use sim::Sim;
pub use telemetry::{VisitLog, VisitRecord};
