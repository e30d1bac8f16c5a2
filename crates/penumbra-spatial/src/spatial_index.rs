//! The common interface of position-indexed item maps.

use crate::error::SpatialError;
use penumbra_core::Point;

/// A two-way index between items and grid positions.
///
/// Each item is in the map at most once. Whether a position can hold more
/// than one item depends on the implementor. Mutating operations either
/// succeed completely or leave the map untouched.
pub trait SpatialIndex<T> {
    /// Place `item` at `position`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::ItemAlreadyPresent`] if `item` is in the map.
    /// - [`SpatialError::PositionOccupied`] if `position` cannot take
    ///   another item.
    fn add(&mut self, item: T, position: Point) -> Result<(), SpatialError>;

    /// Remove `item`, returning where it was.
    ///
    /// # Errors
    ///
    /// [`SpatialError::ItemNotFound`] if `item` is not in the map.
    fn remove(&mut self, item: &T) -> Result<Point, SpatialError>;

    /// Remove every item at `position`, in the order they were placed.
    fn remove_at(&mut self, position: Point) -> Vec<T>;

    /// Move `item` to `to`, returning its previous position.
    ///
    /// Moving an item onto its own position succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::ItemNotFound`] if `item` is not in the map.
    /// - [`SpatialError::PositionOccupied`] if `to` cannot take it.
    fn move_item(&mut self, item: &T, to: Point) -> Result<Point, SpatialError>;

    /// Move every item at `from` to `to`, returning the moved items.
    ///
    /// # Errors
    ///
    /// [`SpatialError::PositionOccupied`] if `to` cannot take them.
    fn move_all(&mut self, from: Point, to: Point) -> Result<Vec<T>, SpatialError>;

    /// Whether [`add`](Self::add) would succeed.
    fn can_add(&self, item: &T, position: Point) -> bool;

    /// Whether [`move_item`](Self::move_item) would succeed.
    fn can_move(&self, item: &T, to: Point) -> bool;

    /// Whether [`move_all`](Self::move_all) would succeed.
    fn can_move_all(&self, from: Point, to: Point) -> bool;

    /// Items at `position`, in the order they were placed.
    fn items_at<'a>(&'a self, position: Point) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Where `item` is, if it is in the map.
    fn position_of(&self, item: &T) -> Option<Point>;

    /// Whether `item` is in the map.
    fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    /// Whether any item is at `position`.
    fn contains_at(&self, position: Point) -> bool {
        self.items_at(position).next().is_some()
    }

    /// Number of items.
    fn len(&self) -> usize;

    /// Whether the map holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied positions, in the order they first became occupied.
    fn positions(&self) -> impl Iterator<Item = Point>;

    /// Every item with its position, in insertion order.
    fn items<'a>(&'a self) -> impl Iterator<Item = (&'a T, Point)>
    where
        T: 'a;

    /// Remove everything.
    fn clear(&mut self);
}
