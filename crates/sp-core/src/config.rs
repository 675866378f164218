//! Engine tunables.
//!
//! Every constant the movement engine, target policy, agent store and
//! importer rely on lives in [`EngineConfig`], so a run can be reproduced
//! from one value (plus the layout).  Speeds are in floor units per real
//! second; movement per frame is `speed * dt`.

use crate::{SpError, SpResult};

// ── SpeedBand ─────────────────────────────────────────────────────────────────

/// Half-open range `[min, max)` for randomized per-customer speed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedBand {
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedBand {
    /// 0.001–0.051 units per frame at 60 fps.
    fn default() -> Self {
        Self { min: 0.06, max: 3.06 }
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────────

/// Virtual store clock parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Virtual time-of-day at start, seconds since midnight.  Default: 09:00.
    pub start_secs_of_day: u32,
    /// Virtual seconds added per clock step.  Default: 5.
    pub step_secs: u32,
    /// Real seconds per clock step at booster 1.  Default: 1.0.
    pub interval_secs: f32,
    /// Speed-up multiplier.  The UI offers 1, 2, 3, 4, 5 and 10.
    pub booster: u32,
    /// Whether the clock is running as soon as the sim is built.
    pub autostart: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_secs_of_day: 9 * 3_600,
            step_secs:         5,
            interval_secs:     1.0,
            booster:           1,
            autostart:         false,
        }
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Typically loaded from the `[engine]` table of a TOML file by the
/// application crate.  Call [`validate`](Self::validate) before use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Master RNG seed.  The same seed and layout always produce identical
    /// runs.
    pub seed: u64,

    /// Customers whose `|x|` or `|z|` exceeds this are removed.
    pub floor_bound: f32,

    /// Distance below which a targeted customer has reached its shelf.
    pub arrival_radius: f32,

    /// Distance below which a scripted customer has reached its waypoint.
    pub waypoint_radius: f32,

    /// Per-axis tolerance for "route ended where it started".
    pub exit_tolerance: f32,

    /// Per-frame probability that a wandering customer picks a shelf.
    pub retarget_probability: f64,

    /// Probability of dropping back to wandering after an arrival.
    pub clear_target_probability: f64,

    /// Probability of heading to a checkout once a product shelf has been
    /// visited (checkout-aware policy only).
    pub checkout_probability: f64,

    /// Speed band for manually added customers.
    pub manual_speed: SpeedBand,

    /// Fixed speed of scripted (imported) customers.
    pub scripted_speed: f32,

    /// Maximum visitors materialized from one simulation batch.
    pub batch_cap: usize,

    pub clock: ClockConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:                     0,
            floor_bound:              20.0,
            arrival_radius:           0.5,
            waypoint_radius:          0.1,
            exit_tolerance:           2.0,
            retarget_probability:     0.01,
            clear_target_probability: 0.3,
            checkout_probability:     0.35,
            manual_speed:             SpeedBand::default(),
            scripted_speed:           3.0,
            batch_cap:                20,
            clock:                    ClockConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> SpResult<()> {
        fn bad(msg: String) -> SpResult<()> {
            Err(SpError::Config(msg))
        }

        for (name, p) in [
            ("retarget_probability", self.retarget_probability),
            ("clear_target_probability", self.clear_target_probability),
            ("checkout_probability", self.checkout_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return bad(format!("{name} must be within [0, 1], got {p}"));
            }
        }

        for (name, r) in [
            ("floor_bound", self.floor_bound),
            ("arrival_radius", self.arrival_radius),
            ("waypoint_radius", self.waypoint_radius),
            ("scripted_speed", self.scripted_speed),
            ("manual_speed.min", self.manual_speed.min),
        ] {
            if !(r > 0.0 && r.is_finite()) {
                return bad(format!("{name} must be positive, got {r}"));
            }
        }

        if self.exit_tolerance < 0.0 {
            return bad(format!("exit_tolerance must be non-negative, got {}", self.exit_tolerance));
        }
        if self.manual_speed.max < self.manual_speed.min {
            return bad(format!(
                "manual_speed band is inverted: {} > {}",
                self.manual_speed.min, self.manual_speed.max
            ));
        }
        if self.batch_cap == 0 {
            return bad("batch_cap must be at least 1".into());
        }
        if self.clock.interval_secs <= 0.0 {
            return bad(format!("clock.interval_secs must be positive, got {}", self.clock.interval_secs));
        }
        if self.clock.start_secs_of_day >= 86_400 {
            return bad(format!(
                "clock.start_secs_of_day must be below 86400, got {}",
                self.clock.start_secs_of_day
            ));
        }
        Ok(())
    }
}
