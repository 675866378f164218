//! Fluent builder for manually placed customers.
//!
//! # Usage
//!
//! ```rust
//! use sp_agent::CustomerBuilder;
//! use sp_core::FloorPoint;
//!
//! let c = CustomerBuilder::new(FloorPoint::on_floor(1.0, 2.0))
//!     .speed(1.5)
//!     .build();
//!
//! assert!(c.is_wandering());
//! assert_eq!(c.target_position, c.position);
//! ```

use sp_core::{CustomerId, FloorPoint, ShelfId};

use crate::{Customer, WalkCycle};

/// Speed used when none is given.
const DEFAULT_SPEED: f32 = 1.0;

pub struct CustomerBuilder {
    id: Option<CustomerId>,
    position: FloorPoint,
    target: Option<(ShelfId, FloorPoint)>,
    speed: f32,
}

impl CustomerBuilder {
    pub fn new(position: FloorPoint) -> Self {
        Self { id: None, position, target: None, speed: DEFAULT_SPEED }
    }

    /// Use a specific id instead of a fresh uuid.
    pub fn id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Start already heading for `shelf`, located at `at`.
    pub fn target(mut self, shelf: ShelfId, at: FloorPoint) -> Self {
        self.target = Some((shelf, at));
        self
    }

    /// Non-positive or non-finite speeds are ignored.
    pub fn speed(mut self, speed: f32) -> Self {
        if speed > 0.0 && speed.is_finite() {
            self.speed = speed;
        }
        self
    }

    pub fn build(self) -> Customer {
        let position = FloorPoint::on_floor(self.position.x, self.position.z);
        let (target_shelf, target_position) = match self.target {
            Some((shelf, at)) => (Some(shelf), at),
            None => (None, position),
        };
        Customer {
            id: self.id.unwrap_or_else(CustomerId::generate),
            position,
            target_position,
            target_shelf,
            speed: self.speed,
            route: None,
            product_visits: 0,
            walk: WalkCycle::default(),
        }
    }
}
