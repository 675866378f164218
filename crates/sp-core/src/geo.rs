//! Floor-plane coordinate type and movement utilities.
//!
//! The store floor is the `y = 0` plane of a right-handed scene: `x` runs
//! across the footprint width and `z` along its length.  Agents live on the
//! floor, so every distance and direction used by the engine is *planar*
//! (the `y` component is ignored and written back as `0`).

/// A point in store space.  `y` is kept for rendering but is ≈ 0 for every
/// agent and fixture position the engine produces.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPoint {
    pub x: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f32,
    pub z: f32,
}

impl FloorPoint {
    pub const ORIGIN: FloorPoint = FloorPoint { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the floor plane.
    #[inline]
    pub fn on_floor(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Lift a 2-D `[x, z]` waypoint (the backend's path format) onto the floor.
    #[inline]
    pub fn from_xz(p: [f32; 2]) -> Self {
        Self::on_floor(p[0], p[1])
    }

    /// Straight-line distance in the floor plane.
    #[inline]
    pub fn planar_distance(self, other: FloorPoint) -> f32 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// Unit `(dx, dz)` vector from `self` toward `to`.
    ///
    /// Returns `(0.0, 0.0)` when the points coincide, so callers never divide
    /// by zero and a degenerate segment simply produces no motion.
    pub fn planar_direction(self, to: FloorPoint) -> (f32, f32) {
        let dx = to.x - self.x;
        let dz = to.z - self.z;
        let len = dx.hypot(dz);
        if len <= f32::EPSILON {
            (0.0, 0.0)
        } else {
            (dx / len, dz / len)
        }
    }

    /// Move `distance` along the unit vector `dir`, landing on the floor.
    #[inline]
    pub fn advanced(self, dir: (f32, f32), distance: f32) -> FloorPoint {
        FloorPoint::on_floor(self.x + dir.0 * distance, self.z + dir.1 * distance)
    }

    /// Move toward `target` by at most `max_step`.
    ///
    /// Never overshoots: when `max_step` covers the remaining distance the
    /// result is `target` projected onto the floor.  The planar distance to
    /// `target` is therefore non-increasing for any `max_step >= 0`.
    pub fn step_toward(self, target: FloorPoint, max_step: f32) -> FloorPoint {
        let remaining = self.planar_distance(target);
        if max_step >= remaining {
            return FloorPoint::on_floor(target.x, target.z);
        }
        self.advanced(self.planar_direction(target), max_step.max(0.0))
    }

    /// Axis-aligned proximity check: both `|dx|` and `|dz|` are within `tol`.
    #[inline]
    pub fn within_box(self, other: FloorPoint, tol: f32) -> bool {
        (self.x - other.x).abs() <= tol && (self.z - other.z).abs() <= tol
    }

    /// `true` once either planar coordinate's magnitude exceeds `bound`.
    #[inline]
    pub fn outside_square(self, bound: f32) -> bool {
        self.x.abs() > bound || self.z.abs() > bound
    }
}

impl std::fmt::Display for FloorPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.z)
    }
}
