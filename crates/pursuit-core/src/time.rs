//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to elapsed wall time is held in `TickClock`:
//!
//!   elapsed = tick * tick_duration_secs
//!
//! Using an integer tick as the canonical time unit keeps the driver loop
//! and all test assertions exact; the fractional `tick_duration_secs` only
//! enters the picture inside the movement integrator, where it scales the
//! per-tick displacement (`speed * dt`).
//!
//! The default tick duration is 1/60 s — one display frame.  Tests that
//! want tile-per-tick movement set it to 1.0 instead; the rest of the
//! framework is agnostic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 60 ticks per second a u64 lasts
/// ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Tracks the current tick and its mapping to elapsed seconds.
///
/// `TickClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// How many real seconds one tick represents.  Default: 1/60.
    pub tick_duration_secs: f32,
    /// The current tick — advanced by `TickClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl TickClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.tick_duration_secs
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Movement advances by `speed * tick_duration_secs`
    /// world units per tick.  Default: 1/60.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.  A 60-second run at 60 Hz is 3,600 ticks.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical paths,
    /// spawn tiles, and interception offsets.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_duration_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 1.0 / 60.0,
            total_ticks: 3_600,
            seed: 0,
        }
    }
}
