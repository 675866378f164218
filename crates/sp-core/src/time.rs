//! Frame counter and virtual store clock.
//!
//! # Design
//!
//! Two notions of time coexist:
//!
//! - **Frames** — one per rendered frame.  Movement is scaled by the real
//!   elapsed seconds the host render loop supplies with each frame, so agent
//!   speed is independent of frame rate.  `Frame` only counts.
//! - **Virtual store time** — a time-of-day clock that runs faster than real
//!   time.  Every `interval / booster` real seconds it jumps forward by
//!   `step_secs` virtual seconds.  Its hour buckets the interaction
//!   histogram, and each virtual minute boundary triggers a new simulation
//!   batch request.

use std::fmt;

use crate::ClockConfig;

const SECS_PER_DAY: u64 = 86_400;

/// Slack when counting whole clock intervals in accumulated time.
const STEP_EPSILON: f64 = 1e-6;

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute rendered-frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── VirtualClock ──────────────────────────────────────────────────────────────

/// Outcome of one [`VirtualClock::advance_real`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockAdvance {
    /// How many `step_secs` jumps were applied.
    pub steps: u32,
    /// `true` if the minute-of-day differs from before the advance.
    pub minute_crossed: bool,
}

/// Start/stop-able accelerated time-of-day clock.
#[derive(Clone, Debug)]
pub struct VirtualClock {
    /// Seconds since midnight at virtual time zero.
    pub start_secs_of_day: u32,
    /// Virtual seconds elapsed since start.
    pub elapsed_secs: u64,
    step_secs: u32,
    interval_secs: f32,
    booster: u32,
    running: bool,
    /// Boosted seconds accumulated toward the next step.
    carry: f64,
}

impl VirtualClock {
    /// A clock at `config.start_secs_of_day`, running iff `config.autostart`.
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            start_secs_of_day: config.start_secs_of_day,
            elapsed_secs:      0,
            step_secs:         config.step_secs,
            interval_secs:     config.interval_secs,
            booster:           config.booster.max(1),
            running:           config.autostart,
            carry:             0.0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn booster(&self) -> u32 {
        self.booster
    }

    /// Change the speed-up multiplier.  Values below 1 are treated as 1.
    pub fn set_booster(&mut self, booster: u32) {
        self.booster = booster.max(1);
    }

    /// Feed `real_dt` seconds of wall time into the clock.
    ///
    /// A stopped clock ignores the input entirely (nothing accumulates).
    pub fn advance_real(&mut self, real_dt: f32) -> ClockAdvance {
        if !self.running || real_dt <= 0.0 {
            return ClockAdvance::default();
        }
        let interval = self.interval_secs as f64;
        if interval <= 0.0 {
            return ClockAdvance::default();
        }

        let minute_before = self.minute_index();
        self.carry += real_dt as f64 * self.booster as f64;

        // Whole intervals in one division; the epsilon absorbs f32 input noise.
        let steps = (self.carry / interval + STEP_EPSILON).floor() as u32;
        self.carry = (self.carry - steps as f64 * interval).max(0.0);
        self.elapsed_secs += steps as u64 * self.step_secs as u64;

        ClockAdvance {
            steps,
            minute_crossed: self.minute_index() != minute_before,
        }
    }

    /// Seconds since midnight, wrapping past 24 h.
    #[inline]
    pub fn secs_of_day(&self) -> u32 {
        ((self.start_secs_of_day as u64 + self.elapsed_secs) % SECS_PER_DAY) as u32
    }

    /// Hour of day in `0..24`, used to bucket interaction events.
    #[inline]
    pub fn hour(&self) -> u8 {
        (self.secs_of_day() / 3_600) as u8
    }

    /// `(hour, minute, second)` of the current virtual time.
    pub fn hms(&self) -> (u32, u32, u32) {
        let s = self.secs_of_day();
        (s / 3_600, (s % 3_600) / 60, s % 60)
    }

    /// `HH:MM`, the time-of-day string carried by simulation requests.
    pub fn time_of_day(&self) -> String {
        let (h, m, _) = self.hms();
        format!("{h:02}:{m:02}")
    }

    fn minute_index(&self) -> u64 {
        (self.start_secs_of_day as u64 + self.elapsed_secs) / 60
    }
}

impl fmt::Display for VirtualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
