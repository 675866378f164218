//! The customer record and its optional scripted route.

use sp_core::{CustomerId, FloorPoint, ShelfId};

use crate::WalkCycle;

// ── ScriptedRoute ─────────────────────────────────────────────────────────────

/// A precomputed waypoint list from a simulation batch.
///
/// `cursor` is the index of the waypoint currently being walked toward.  It
/// is always in `1..=path.len()`; `cursor == path.len()` means the route is
/// complete.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptedRoute {
    pub path: Vec<FloorPoint>,
    pub cursor: usize,
    /// Shelves touched along the route; entry `i` belongs to the segment
    /// ending at waypoint `i + 1`.
    pub visited_shelves: Vec<ShelfId>,
}

impl ScriptedRoute {
    /// Returns `None` for paths with fewer than two waypoints.
    pub fn new(path: Vec<FloorPoint>, visited_shelves: Vec<ShelfId>) -> Option<Self> {
        (path.len() >= 2).then_some(Self { path, cursor: 1, visited_shelves })
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// `(from, to)` of the segment in progress, or `None` once complete.
    pub fn segment(&self) -> Option<(FloorPoint, FloorPoint)> {
        if self.is_complete() {
            return None;
        }
        Some((self.path[self.cursor - 1], self.path[self.cursor]))
    }

    /// Waypoint at `index`, if any.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Option<FloorPoint> {
        self.path.get(index).copied()
    }

    /// `true` if the first and last waypoints lie within `tol` on both axes.
    pub fn ends_where_it_started(&self, tol: f32) -> bool {
        match (self.path.first(), self.path.last()) {
            (Some(a), Some(b)) => a.within_box(*b, tol),
            _ => false,
        }
    }

    /// Move the cursor, clamped to one past the end.
    #[inline]
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.clamp(1, self.path.len());
    }
}

// ── ScriptedVisitor ───────────────────────────────────────────────────────────

/// One visitor of an imported simulation batch, already lifted onto the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedVisitor {
    pub id: CustomerId,
    pub path: Vec<FloorPoint>,
    pub visited_shelves: Vec<ShelfId>,
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A simulated shopper.
///
/// `target_shelf == None` on a customer without a route means it is
/// wandering; its `target_position` is then its own position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id: CustomerId,
    pub position: FloorPoint,
    pub target_position: FloorPoint,
    pub target_shelf: Option<ShelfId>,
    /// Floor units per second.  Always positive.
    pub speed: f32,
    pub route: Option<ScriptedRoute>,
    /// Arrivals at product shelves so far.
    pub product_visits: u32,
    pub walk: WalkCycle,
}

impl Customer {
    #[inline]
    pub fn is_wandering(&self) -> bool {
        self.route.is_none() && self.target_shelf.is_none()
    }

    /// Current route cursor, if scripted.
    #[inline]
    pub fn path_index(&self) -> Option<usize> {
        self.route.as_ref().map(|r| r.cursor)
    }

    /// Materialize an imported visitor.  Paths shorter than two waypoints
    /// yield `None`.
    pub fn from_visitor(visitor: ScriptedVisitor, speed: f32) -> Option<Customer> {
        let target_shelf = visitor.visited_shelves.first().cloned();
        let route = ScriptedRoute::new(visitor.path, visitor.visited_shelves)?;
        let position = route.path[0];
        let target_position = route.path[1];
        Some(Customer {
            id: visitor.id,
            position,
            target_position,
            target_shelf,
            speed,
            route: Some(route),
            product_visits: 0,
            walk: WalkCycle::default(),
        })
    }
}
