//! `ShelfRegistry` — the flat list of placed shelves.
//!
//! Shelves are kept in a `Vec` in insertion order (the order the planner
//! placed them, which is also the order uniform picks index into) with an
//! `FxHashMap` from id to slot for O(1) lookup.  Removal is rare (an explicit
//! user action) so it simply rebuilds the index.
//!
//! The engine only ever calls [`ShelfRegistry::increment_interaction`]; every
//! other mutator belongs to the planner side.

use rustc_hash::FxHashMap;
use tracing::debug;

use sp_core::{FloorPoint, ShelfId, SpError, SpResult};

use crate::{LayoutError, LayoutResult, Shelf, ShelfKind, ShelfSize};

#[derive(Clone, Debug, Default)]
pub struct ShelfRegistry {
    shelves: Vec<Shelf>,
    index: FxHashMap<ShelfId, usize>,
}

impl ShelfRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list, rejecting duplicate ids.
    pub fn from_shelves(shelves: impl IntoIterator<Item = Shelf>) -> LayoutResult<Self> {
        let mut reg = Self::new();
        for shelf in shelves {
            reg.insert(shelf)?;
        }
        Ok(reg)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Shelf> {
        self.index.get(id).map(|&i| &self.shelves[i])
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All shelves in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Shelf> {
        self.shelves.iter()
    }

    /// Positions of every checkout, in insertion order.
    pub fn checkout_positions(&self) -> Vec<FloorPoint> {
        self.shelves
            .iter()
            .filter(|s| s.kind.is_checkout())
            .map(|s| s.position)
            .collect()
    }

    pub fn has_checkout(&self) -> bool {
        self.shelves.iter().any(|s| s.kind.is_checkout())
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Place a new shelf with a fresh id and return that id.
    pub fn add(&mut self, kind: ShelfKind, size: ShelfSize, position: FloorPoint) -> ShelfId {
        let shelf = Shelf::new(ShelfId::generate(), kind, position).with_size(size);
        let id = shelf.id.clone();
        self.index.insert(id.clone(), self.shelves.len());
        self.shelves.push(shelf);
        id
    }

    /// Insert a fully-formed shelf (preset load, config file).
    pub fn insert(&mut self, shelf: Shelf) -> LayoutResult<()> {
        if self.index.contains_key(&shelf.id) {
            return Err(LayoutError::DuplicateShelf(shelf.id));
        }
        self.index.insert(shelf.id.clone(), self.shelves.len());
        self.shelves.push(shelf);
        Ok(())
    }

    pub fn update_position(&mut self, id: &str, x: f32, z: f32) -> SpResult<()> {
        let shelf = self.get_mut(id)?;
        shelf.position = FloorPoint::on_floor(x, z);
        Ok(())
    }

    pub fn update_rotation(&mut self, id: &str, rotation: f32) -> SpResult<()> {
        self.get_mut(id)?.rotation = rotation;
        Ok(())
    }

    /// Bump a shelf's interaction counter and return the new value.
    pub fn increment_interaction(&mut self, id: &str) -> SpResult<u64> {
        let shelf = self.get_mut(id)?;
        shelf.interaction_count += 1;
        Ok(shelf.interaction_count)
    }

    pub fn remove(&mut self, id: &str) -> SpResult<Shelf> {
        let slot = self
            .index
            .remove(id)
            .ok_or_else(|| SpError::ShelfNotFound(ShelfId::new(id)))?;
        let shelf = self.shelves.remove(slot);
        self.reindex();
        debug!(shelf = %shelf.id, "shelf removed");
        Ok(shelf)
    }

    pub fn clear(&mut self) {
        self.shelves.clear();
        self.index.clear();
    }

    /// Swap in a whole new layout (preset load).  On a duplicate id the
    /// registry is left unchanged.
    pub fn replace_all(&mut self, shelves: impl IntoIterator<Item = Shelf>) -> LayoutResult<()> {
        *self = Self::from_shelves(shelves)?;
        Ok(())
    }

    /// Zero every interaction counter (new analytics session).
    pub fn reset_interactions(&mut self) {
        for shelf in &mut self.shelves {
            shelf.interaction_count = 0;
        }
    }

    fn get_mut(&mut self, id: &str) -> SpResult<&mut Shelf> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.shelves[i]),
            None => Err(SpError::ShelfNotFound(ShelfId::new(id))),
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .shelves
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
    }
}

impl<'a> IntoIterator for &'a ShelfRegistry {
    type Item = &'a Shelf;
    type IntoIter = std::slice::Iter<'a, Shelf>;

    fn into_iter(self) -> Self::IntoIter {
        self.shelves.iter()
    }
}
