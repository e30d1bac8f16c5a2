//! Shared storage behind every spatial map.

use crate::error::SpatialError;
use crate::spatial_index::SpatialIndex;
use indexmap::IndexMap;
use penumbra_core::Point;
use smallvec::SmallVec;
use std::hash::Hash;

/// Items at one position, in placement order.
type Slot<T> = SmallVec<[T; 2]>;

/// Item storage for one map or one layer of a
/// [`LayeredSpatialMap`](crate::LayeredSpatialMap).
///
/// Keeps a forward index (item to position) and a reverse index (position
/// to items). Single-occupancy layers reject a second item at a position.
#[derive(Clone, Debug)]
pub struct SpatialLayer<T> {
    multi: bool,
    items: IndexMap<T, Point>,
    by_position: IndexMap<Point, Slot<T>>,
}

impl<T: Clone + Eq + Hash> SpatialLayer<T> {
    pub(crate) fn new(multi: bool) -> Self {
        Self {
            multi,
            items: IndexMap::new(),
            by_position: IndexMap::new(),
        }
    }

    /// Whether a position may hold more than one item.
    pub fn supports_multiple_items(&self) -> bool {
        self.multi
    }

    /// Whether `position` can take one more item.
    fn has_room(&self, position: Point) -> bool {
        self.multi || !self.by_position.contains_key(&position)
    }

    fn detach(&mut self, item: &T, position: Point) -> Option<T> {
        let slot = self.by_position.get_mut(&position)?;
        let idx = slot.iter().position(|i| i == item)?;
        let taken = slot.remove(idx);
        if slot.is_empty() {
            self.by_position.shift_remove(&position);
        }
        Some(taken)
    }
}

impl<T: Clone + Eq + Hash> SpatialIndex<T> for SpatialLayer<T> {
    fn add(&mut self, item: T, position: Point) -> Result<(), SpatialError> {
        if self.items.contains_key(&item) {
            return Err(SpatialError::ItemAlreadyPresent);
        }
        if !self.has_room(position) {
            return Err(SpatialError::PositionOccupied { position });
        }
        self.items.insert(item.clone(), position);
        self.by_position.entry(position).or_default().push(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<Point, SpatialError> {
        let position = self
            .items
            .shift_remove(item)
            .ok_or(SpatialError::ItemNotFound)?;
        self.detach(item, position);
        Ok(position)
    }

    fn remove_at(&mut self, position: Point) -> Vec<T> {
        let Some(slot) = self.by_position.shift_remove(&position) else {
            return Vec::new();
        };
        for item in &slot {
            self.items.shift_remove(item);
        }
        slot.into_vec()
    }

    fn move_item(&mut self, item: &T, to: Point) -> Result<Point, SpatialError> {
        let from = self.position_of(item).ok_or(SpatialError::ItemNotFound)?;
        if from == to {
            return Ok(from);
        }
        if !self.has_room(to) {
            return Err(SpatialError::PositionOccupied { position: to });
        }
        if let Some(moved) = self.detach(item, from) {
            self.by_position.entry(to).or_default().push(moved);
        }
        if let Some(pos) = self.items.get_mut(item) {
            *pos = to;
        }
        Ok(from)
    }

    fn move_all(&mut self, from: Point, to: Point) -> Result<Vec<T>, SpatialError> {
        if from == to {
            return Ok(self.items_at(from).cloned().collect());
        }
        if !self.can_move_all(from, to) {
            return Err(SpatialError::PositionOccupied { position: to });
        }
        let Some(slot) = self.by_position.shift_remove(&from) else {
            return Ok(Vec::new());
        };
        for item in &slot {
            if let Some(pos) = self.items.get_mut(item) {
                *pos = to;
            }
        }
        self.by_position
            .entry(to)
            .or_default()
            .extend(slot.iter().cloned());
        Ok(slot.into_vec())
    }

    fn can_add(&self, item: &T, position: Point) -> bool {
        !self.items.contains_key(item) && self.has_room(position)
    }

    fn can_move(&self, item: &T, to: Point) -> bool {
        match self.position_of(item) {
            Some(from) => from == to || self.has_room(to),
            None => false,
        }
    }

    fn can_move_all(&self, from: Point, to: Point) -> bool {
        from == to || self.multi || !self.contains_at(from) || !self.contains_at(to)
    }

    fn items_at<'a>(&'a self, position: Point) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.by_position.get(&position).into_iter().flatten()
    }

    fn position_of(&self, item: &T) -> Option<Point> {
        self.items.get(item).copied()
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains_key(item)
    }

    fn contains_at(&self, position: Point) -> bool {
        self.by_position.contains_key(&position)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn positions(&self) -> impl Iterator<Item = Point> {
        self.by_position.keys().copied()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a T, Point)>
    where
        T: 'a,
    {
        self.items.iter().map(|(item, &pos)| (item, pos))
    }

    fn clear(&mut self) {
        self.items.clear();
        self.by_position.clear();
    }
}
