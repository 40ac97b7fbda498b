//! `ArrivalGenerator` — the entity arrival stream, as an explicit state
//! machine driven by the engine.
//!
//! The generator produces ids `1..=population` with exponential inter-arrival
//! gaps, assigning each entity's immutable attributes at creation time.  The
//! per-entity draw order is fixed (USMAPS decision, sex, inter-arrival gap)
//! so a seeded run reproduces exactly.
//!
//! # Throttling
//!
//! After every `window_size` arrivals the generator checks how much of one
//! simulated hour the window consumed; if less than the full hour, the engine
//! sleeps it out (a `ResetWindow` event) before arrivals resume.  This caps
//! burstiness to a roughly uniform hourly admission rate.  The female quota
//! is per-window and resets when the window does, which keeps the quota fair
//! across the run rather than front-loaded.

use rand_distr::{Distribution, Exp};

use rday_core::{EntityAttrs, EntityId, Sex, SimParams, SimRng, SimTime, UsmapsStrategy};

use crate::error::{SimError, SimResult};

// ── EntityRoster ──────────────────────────────────────────────────────────────

/// Attribute table indexed by entity id (ids are 1-based; slot 0 is unused).
///
/// Owned by the simulation run — never process-wide state.
pub struct EntityRoster {
    attrs: Vec<EntityAttrs>,
}

impl EntityRoster {
    pub fn new(population: u32) -> Self {
        Self {
            attrs: vec![EntityAttrs::default(); population as usize + 1],
        }
    }

    pub fn assign(&mut self, entity: EntityId, attrs: EntityAttrs) {
        debug_assert!(entity.index() < self.attrs.len(), "unknown entity {entity}");
        self.attrs[entity.index()] = attrs;
    }

    #[inline]
    pub fn get(&self, entity: EntityId) -> EntityAttrs {
        self.attrs[entity.index()]
    }

    /// Ids of all USMAPS entities, ascending.  Test/reporting helper.
    pub fn usmaps_ids(&self) -> Vec<EntityId> {
        self.attrs
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, a)| a.usmaps)
            .map(|(i, _)| EntityId(i as u32))
            .collect()
    }
}

// ── ArrivalGenerator ──────────────────────────────────────────────────────────

/// The next entity to arrive, with its creation-time attributes and the
/// exponential gap before its arrival.
#[derive(Copy, Clone, Debug)]
pub struct NextArrival {
    pub entity: EntityId,
    pub attrs: EntityAttrs,
    pub delay_hours: f64,
}

/// What the generator wants after an arrival lands.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum WindowAction {
    /// Keep generating.
    Continue,
    /// Window is full early — sleep until this time, then reset and resume.
    SleepUntil(SimTime),
}

/// Arrival-stream state machine.  The engine calls
/// [`next_arrival`](Self::next_arrival) to draw the next entity,
/// [`on_arrival`](Self::on_arrival) when it lands, and
/// [`reset_window`](Self::reset_window) when a throttling sleep ends.
pub struct ArrivalGenerator {
    population: u32,
    window_size: u32,
    female_cap_per_window: u32,
    usmaps_cap: u32,
    usmaps_probability: f64,
    strategy: UsmapsStrategy,
    inter_arrival: Exp<f64>,

    next_id: u32,
    window_count: u32,
    window_start: SimTime,
    female_in_window: u32,
    usmaps_assigned: u32,
}

impl ArrivalGenerator {
    pub fn new(params: &SimParams) -> SimResult<Self> {
        let inter_arrival = Exp::new(params.arrival_rate_per_hour)
            .map_err(|e| SimError::Config(format!("bad arrival rate: {e}")))?;
        Ok(Self {
            population: params.population,
            window_size: params.window_size,
            female_cap_per_window: params.female_cap_per_window,
            usmaps_cap: params.usmaps_cap,
            usmaps_probability: params.usmaps_probability,
            strategy: params.usmaps_strategy,
            inter_arrival,
            next_id: 1,
            window_count: 0,
            window_start: SimTime::ZERO,
            female_in_window: 0,
            usmaps_assigned: 0,
        })
    }

    // ── Stream ────────────────────────────────────────────────────────────

    /// Draw the next entity, or `None` once the population is exhausted.
    pub fn next_arrival(&mut self, rng: &mut SimRng) -> Option<NextArrival> {
        if self.next_id > self.population {
            return None;
        }
        let entity = EntityId(self.next_id);
        self.next_id += 1;

        let usmaps = self.decide_usmaps(entity, rng);
        if usmaps {
            self.usmaps_assigned += 1;
        }
        let sex = self.decide_sex(entity);
        let delay_hours = self.inter_arrival.sample(rng.inner());

        Some(NextArrival {
            entity,
            attrs: EntityAttrs::new(sex, usmaps),
            delay_hours,
        })
    }

    /// Window bookkeeping after an arrival lands at `now`.
    pub fn on_arrival(&mut self, now: SimTime) -> WindowAction {
        self.window_count += 1;
        if self.window_count == self.window_size {
            let elapsed = now - self.window_start;
            if elapsed < 1.0 {
                return WindowAction::SleepUntil(now + (1.0 - elapsed));
            }
            self.reset_window(now);
        }
        WindowAction::Continue
    }

    /// Open a fresh throttling window at `now`.
    pub fn reset_window(&mut self, now: SimTime) {
        self.window_count = 0;
        self.window_start = now;
        self.female_in_window = 0;
    }

    // ── Attribute assignment ──────────────────────────────────────────────

    fn decide_usmaps(&self, entity: EntityId, rng: &mut SimRng) -> bool {
        if self.usmaps_assigned >= self.usmaps_cap {
            return false;
        }
        match self.strategy {
            UsmapsStrategy::Random => rng.gen_bool(self.usmaps_probability),
            UsmapsStrategy::Front => entity.0 < self.usmaps_cap,
            UsmapsStrategy::Back => {
                u64::from(entity.0) + u64::from(self.usmaps_cap) > u64::from(self.population)
            }
        }
    }

    fn decide_sex(&mut self, entity: EntityId) -> Sex {
        if entity.0 % 2 == 0 && self.female_in_window < self.female_cap_per_window {
            self.female_in_window += 1;
            Sex::Female
        } else {
            Sex::Male
        }
    }

    // ── Observations ──────────────────────────────────────────────────────

    /// Entities issued so far.
    #[inline]
    pub fn generated(&self) -> u32 {
        self.next_id - 1
    }

    #[inline]
    pub fn usmaps_assigned(&self) -> u32 {
        self.usmaps_assigned
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next_id > self.population
    }
}
