//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous count of simulated hours since run start, wrapped in
//! `SimTime`.  Service durations and inter-arrival gaps are real-valued draws,
//! so an integer tick would either quantize them or force a sub-second tick
//! resolution; a plain `f64` hour count keeps every duration exact to the
//! sample that produced it.
//!
//! Ordering uses `f64::total_cmp`, which is a total order, so `SimTime` can
//! key ordered collections.  The invariant that makes this safe: a `SimTime`
//! is never NaN — every duration entering the simulation is validated finite
//! and non-negative at load time.
//!
//! Equal timestamps are common (zero-length services, batch releases).  The
//! event queue breaks those ties with an explicit insertion sequence, not with
//! anything derived from the time value, so `SimTime` itself stays a plain
//! point on the clock line.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp, in hours since run start.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Construct from an hour count.
    #[inline]
    pub fn from_hours(hours: f64) -> SimTime {
        SimTime(hours)
    }

    /// The raw hour count.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Return the time `hours` after `self`.
    #[inline]
    pub fn offset(self, hours: f64) -> SimTime {
        SimTime(self.0 + hours)
    }

    /// Hours elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}h", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current simulation time and maps it to time-of-day.
///
/// The clock never runs backwards: the event loop advances it to each popped
/// event's timestamp, and the queue hands events out in non-decreasing order.
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Time of day (hours, e.g. 5.5 = 05:30) corresponding to `SimTime::ZERO`.
    pub start_of_day_hours: f64,
    /// The current simulation time — advanced by `SimClock::advance_to`.
    pub now: SimTime,
}

impl SimClock {
    /// Create a clock whose zero point falls at `start_of_day_hours`.
    pub fn new(start_of_day_hours: f64) -> Self {
        Self {
            start_of_day_hours,
            now: SimTime::ZERO,
        }
    }

    /// Advance the clock to `t`.
    ///
    /// # Panics
    /// Panics in debug mode if `t` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
    }

    /// Elapsed simulated hours since run start.
    #[inline]
    pub fn elapsed_hours(&self) -> f64 {
        self.now.hours()
    }

    /// Current time of day in hours (may exceed 24 on a run spanning midnight).
    #[inline]
    pub fn wall_hours(&self) -> f64 {
        self.start_of_day_hours + self.now.hours()
    }

    /// Break the current wall time into (hour-of-day, minute) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn wall_hhmm(&self) -> (u32, u32) {
        let wall = self.wall_hours().max(0.0);
        let total_minutes = (wall * 60.0) as u64;
        let hours = ((total_minutes / 60) % 24) as u32;
        let minutes = (total_minutes % 60) as u32;
        (hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.wall_hhmm();
        write!(f, "{} ({:02}:{:02})", self.now, h, m)
    }
}
