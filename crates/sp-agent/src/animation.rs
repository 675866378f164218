//! Per-customer walk-cycle state.
//!
//! The renderer swings each customer's legs while it is moving and lets them
//! settle when it stops.  That state used to live in the render closure; here
//! it is plain data on the customer, advanced by a pure function once per
//! frame, so the simulation never touches a rendering handle.

/// Phase advance per second while walking (radians).
const PHASE_RATE: f32 = 5.0;
/// Peak leg swing (radians).
const SWING_AMPLITUDE: f32 = 0.5;
/// Relaxation rate toward the rest pose while standing.
const SETTLE_RATE: f32 = 5.0;
/// Per-axis offset to target below which a customer counts as standing.
const WALK_THRESHOLD: f32 = 0.1;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkCycle {
    pub phase: f32,
    /// Signed swing of the left leg; the right leg mirrors it.
    pub leg_angle: f32,
}

impl WalkCycle {
    /// `true` while the planar offset `(dx, dz)` to the target is at least
    /// the walk threshold on either axis.
    #[inline]
    pub fn is_walking(dx: f32, dz: f32) -> bool {
        dx.abs() >= WALK_THRESHOLD || dz.abs() >= WALK_THRESHOLD
    }

    /// State after `dt` seconds.
    pub fn advance(self, walking: bool, dt: f32) -> WalkCycle {
        if walking {
            let phase = self.phase + dt * PHASE_RATE;
            WalkCycle { phase, leg_angle: phase.sin() * SWING_AMPLITUDE }
        } else {
            let t = (dt * SETTLE_RATE).clamp(0.0, 1.0);
            WalkCycle { phase: self.phase, leg_angle: self.leg_angle * (1.0 - t) }
        }
    }
}
