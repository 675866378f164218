//! `CustomerStore` — the set of active customers.
//!
//! # Layout
//!
//! Customers live in a `Vec` in insertion order with an `FxHashMap` from id
//! to slot.  The movement engine reads the store through `&CustomerStore`
//! during the decide phase and the simulation applies the resulting commands
//! afterwards, so every mutator here runs in the single-threaded apply phase
//! and nothing is ever observed half-written.
//!
//! Removal shifts later slots down and re-indexes them.

use rustc_hash::FxHashMap;
use tracing::debug;

use sp_core::{CustomerId, FloorPoint, ShelfId, SpError, SpResult};

use crate::{Customer, CustomerBuilder, ScriptedVisitor, WalkCycle};

#[derive(Clone, Debug, Default)]
pub struct CustomerStore {
    customers: Vec<Customer>,
    index: FxHashMap<CustomerId, usize>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.index.get(id).map(|&i| &self.customers[i])
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All customers in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Customer> {
        self.customers.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &CustomerId> + '_ {
        self.customers.iter().map(|c| &c.id)
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Add a manually placed customer.  With `target`, it starts heading for
    /// that shelf; otherwise it wanders in place.
    pub fn add(
        &mut self,
        position: FloorPoint,
        target: Option<(ShelfId, FloorPoint)>,
        speed: f32,
    ) -> CustomerId {
        let mut builder = CustomerBuilder::new(position).speed(speed);
        if let Some((shelf, at)) = target {
            builder = builder.target(shelf, at);
        }
        self.insert(builder.build())
    }

    /// Insert a pre-built customer.  An existing customer with the same id
    /// is overwritten in place.
    pub fn insert(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id.clone();
        match self.index.get(&id) {
            Some(&i) => self.customers[i] = customer,
            None => {
                self.index.insert(id.clone(), self.customers.len());
                self.customers.push(customer);
            }
        }
        id
    }

    /// Discard every customer and materialize a simulation batch.
    ///
    /// The batch is truncated to `cap` records first; records whose path has
    /// fewer than two waypoints are then skipped.  Returns how many
    /// customers were created.
    pub fn bulk_replace(
        &mut self,
        visitors: impl IntoIterator<Item = ScriptedVisitor>,
        cap: usize,
        speed: f32,
    ) -> usize {
        let previous = self.customers.len();
        self.customers.clear();
        self.index.clear();

        let mut skipped = 0;
        for visitor in visitors.into_iter().take(cap) {
            match Customer::from_visitor(visitor, speed) {
                Some(c) => {
                    self.insert(c);
                }
                None => skipped += 1,
            }
        }
        debug!(previous, created = self.customers.len(), skipped, "customer store replaced");
        self.customers.len()
    }

    /// Move a customer and, for scripted customers, optionally set the route
    /// cursor (clamped to one past the end).
    pub fn update_position(
        &mut self,
        id: &str,
        position: FloorPoint,
        path_index: Option<usize>,
    ) -> SpResult<()> {
        let c = self.get_mut(id)?;
        c.position = position;
        if let (Some(idx), Some(route)) = (path_index, c.route.as_mut()) {
            route.set_cursor(idx);
        }
        Ok(())
    }

    /// Point a customer at a shelf, or clear its target.
    ///
    /// Clearing without an explicit position parks `target_position` on the
    /// customer's own position.  Setting a shelf without a position leaves
    /// `target_position` as it was.
    pub fn set_target(
        &mut self,
        id: &str,
        shelf: Option<ShelfId>,
        position: Option<FloorPoint>,
    ) -> SpResult<()> {
        let c = self.get_mut(id)?;
        match (&shelf, position) {
            (_, Some(p)) => c.target_position = p,
            (None, None) => c.target_position = c.position,
            (Some(_), None) => {}
        }
        c.target_shelf = shelf;
        Ok(())
    }

    /// Count one product-shelf arrival.
    pub fn note_product_visit(&mut self, id: &str) -> SpResult<u32> {
        let c = self.get_mut(id)?;
        c.product_visits += 1;
        Ok(c.product_visits)
    }

    pub fn remove(&mut self, id: &str) -> SpResult<Customer> {
        let slot = self
            .index
            .remove(id)
            .ok_or_else(|| SpError::CustomerNotFound(CustomerId::new(id)))?;
        let customer = self.customers.remove(slot);
        for (i, c) in self.customers.iter().enumerate().skip(slot) {
            self.index.insert(c.id.clone(), i);
        }
        Ok(customer)
    }

    pub fn clear(&mut self) {
        self.customers.clear();
        self.index.clear();
    }

    /// Step every customer's walk cycle by `dt` seconds.
    pub fn advance_animations(&mut self, dt: f32) {
        for c in &mut self.customers {
            let walking = WalkCycle::is_walking(
                c.target_position.x - c.position.x,
                c.target_position.z - c.position.z,
            );
            c.walk = c.walk.advance(walking, dt);
        }
    }

    fn get_mut(&mut self, id: &str) -> SpResult<&mut Customer> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.customers[i]),
            None => Err(SpError::CustomerNotFound(CustomerId::new(id))),
        }
    }
}

impl<'a> IntoIterator for &'a CustomerStore {
    type Item = &'a Customer;
    type IntoIter = std::slice::Iter<'a, Customer>;

    fn into_iter(self) -> Self::IntoIter {
        self.customers.iter()
    }
}
