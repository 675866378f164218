//! Store footprint and the assembled layout snapshot.

use sp_core::{FloorPoint, RandomSource};

use crate::ShelfRegistry;

/// Rectangular store footprint centred on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Footprint {
    /// Extent along `x`.
    pub width: f32,
    /// Extent along `z`.
    pub length: f32,
    pub height: f32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self { width: 20.0, length: 30.0, height: 4.0 }
    }
}

impl Footprint {
    /// Midpoint of the front (`+z`) wall.
    pub fn front_door(&self) -> FloorPoint {
        FloorPoint::on_floor(0.0, self.length / 2.0)
    }

    /// Point at angle `theta` on the ellipse inset one unit from the walls.
    pub fn perimeter_point(&self, theta: f32) -> FloorPoint {
        let rx = (self.width / 2.0 - 1.0).max(0.0);
        let rz = (self.length / 2.0 - 1.0).max(0.0);
        FloorPoint::on_floor(theta.cos() * rx, theta.sin() * rz)
    }
}

/// Everything the engine reads about the store in one frame.
#[derive(Clone, Debug, Default)]
pub struct StoreLayout {
    pub footprint: Footprint,
    pub entrance: FloorPoint,
    pub shelves: ShelfRegistry,
}

impl StoreLayout {
    /// A layout with the entrance at the front door.
    pub fn new(footprint: Footprint, shelves: ShelfRegistry) -> Self {
        Self { entrance: footprint.front_door(), footprint, shelves }
    }

    pub fn with_entrance(mut self, entrance: FloorPoint) -> Self {
        self.entrance = entrance;
        self
    }

    /// Uniformly random spawn point on the inset perimeter ellipse.
    /// Consumes one draw.
    pub fn spawn_point(&self, rng: &mut dyn RandomSource) -> FloorPoint {
        let theta = rng.range_f32(0.0, std::f32::consts::TAU);
        self.footprint.perimeter_point(theta)
    }
}
