//! Single- and multi-occupancy spatial maps.

use crate::error::SpatialError;
use crate::spatial_index::SpatialIndex;
use crate::store::SpatialLayer;
use penumbra_core::Point;
use std::hash::Hash;

macro_rules! forward_spatial_index {
    ($map:ident) => {
        impl<T: Clone + Eq + Hash> SpatialIndex<T> for $map<T> {
            fn add(&mut self, item: T, position: Point) -> Result<(), SpatialError> {
                self.inner.add(item, position)
            }

            fn remove(&mut self, item: &T) -> Result<Point, SpatialError> {
                self.inner.remove(item)
            }

            fn remove_at(&mut self, position: Point) -> Vec<T> {
                self.inner.remove_at(position)
            }

            fn move_item(&mut self, item: &T, to: Point) -> Result<Point, SpatialError> {
                self.inner.move_item(item, to)
            }

            fn move_all(&mut self, from: Point, to: Point) -> Result<Vec<T>, SpatialError> {
                self.inner.move_all(from, to)
            }

            fn can_add(&self, item: &T, position: Point) -> bool {
                self.inner.can_add(item, position)
            }

            fn can_move(&self, item: &T, to: Point) -> bool {
                self.inner.can_move(item, to)
            }

            fn can_move_all(&self, from: Point, to: Point) -> bool {
                self.inner.can_move_all(from, to)
            }

            fn items_at<'a>(&'a self, position: Point) -> impl Iterator<Item = &'a T>
            where
                T: 'a,
            {
                self.inner.items_at(position)
            }

            fn position_of(&self, item: &T) -> Option<Point> {
                self.inner.position_of(item)
            }

            fn contains(&self, item: &T) -> bool {
                self.inner.contains(item)
            }

            fn contains_at(&self, position: Point) -> bool {
                self.inner.contains_at(position)
            }

            fn len(&self) -> usize {
                self.inner.len()
            }

            fn positions(&self) -> impl Iterator<Item = Point> {
                self.inner.positions()
            }

            fn items<'a>(&'a self) -> impl Iterator<Item = (&'a T, Point)>
            where
                T: 'a,
            {
                self.inner.items()
            }

            fn clear(&mut self) {
                self.inner.clear()
            }
        }
    };
}

/// A spatial map with at most one item per position.
#[derive(Clone, Debug)]
pub struct SpatialMap<T> {
    inner: SpatialLayer<T>,
}

impl<T: Clone + Eq + Hash> SpatialMap<T> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            inner: SpatialLayer::new(false),
        }
    }

    /// The item at `position`, if any.
    pub fn item_at(&self, position: Point) -> Option<&T> {
        self.inner.items_at(position).next()
    }
}

impl<T: Clone + Eq + Hash> Default for SpatialMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

forward_spatial_index!(SpatialMap);

/// A spatial map allowing any number of items per position.
///
/// Items sharing a position are reported in the order they arrived there.
#[derive(Clone, Debug)]
pub struct MultiSpatialMap<T> {
    inner: SpatialLayer<T>,
}

impl<T: Clone + Eq + Hash> MultiSpatialMap<T> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            inner: SpatialLayer::new(true),
        }
    }
}

impl<T: Clone + Eq + Hash> Default for MultiSpatialMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

forward_spatial_index!(MultiSpatialMap);

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── SpatialMap ──────────────────────────────────────────────

    #[test]
    fn single_add_and_lookup() {
        let mut m = SpatialMap::new();
        m.add("a", p(1, 2)).unwrap();
        assert_eq!(m.item_at(p(1, 2)), Some(&"a"));
        assert_eq!(m.position_of(&"a"), Some(p(1, 2)));
        assert!(m.contains(&"a"));
        assert!(m.contains_at(p(1, 2)));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn single_rejects_occupied_targets() {
        let mut m = SpatialMap::new();
        m.add("a", p(0, 0)).unwrap();
        m.add("b", p(1, 0)).unwrap();
        assert!(!m.can_add(&"c", p(0, 0)));
        assert!(!m.can_move(&"a", p(1, 0)));
        assert!(m.can_move(&"a", p(0, 0)));
        assert!(!m.can_move_all(p(0, 0), p(1, 0)));
        assert_eq!(
            m.move_item(&"a", p(1, 0)),
            Err(SpatialError::PositionOccupied { position: p(1, 0) })
        );
    }

    #[test]
    fn single_move_all_to_empty_cell() {
        let mut m = SpatialMap::new();
        m.add(7u32, p(0, 0)).unwrap();
        assert_eq!(m.move_all(p(0, 0), p(3, 3)), Ok(vec![7]));
        assert_eq!(m.item_at(p(3, 3)), Some(&7));
        assert!(m.move_all(p(9, 9), p(3, 3)).unwrap().is_empty());
    }

    #[test]
    fn missing_items_are_reported() {
        let mut m: SpatialMap<u8> = SpatialMap::new();
        assert_eq!(m.remove(&1), Err(SpatialError::ItemNotFound));
        assert_eq!(m.move_item(&1, p(0, 0)), Err(SpatialError::ItemNotFound));
        assert!(!m.can_move(&1, p(0, 0)));
        assert!(m.remove_at(p(0, 0)).is_empty());
        assert_eq!(m.position_of(&1), None);
    }

    #[test]
    fn iteration_order_survives_removal() {
        let mut m = SpatialMap::new();
        for (i, x) in [5, 1, 4, 2].into_iter().enumerate() {
            m.add(i, p(x, 0)).unwrap();
        }
        m.remove(&1).unwrap();
        let items: Vec<_> = m.items().map(|(&i, _)| i).collect();
        assert_eq!(items, vec![0, 2, 3]);
        let xs: Vec<_> = m.positions().map(|q| q.x).collect();
        assert_eq!(xs, vec![5, 4, 2]);
    }

    // ── MultiSpatialMap ─────────────────────────────────────────

    #[test]
    fn multi_stacks_items() {
        let mut m = MultiSpatialMap::new();
        m.add("a", p(0, 0)).unwrap();
        m.add("b", p(0, 0)).unwrap();
        assert!(m.can_add(&"c", p(0, 0)));
        assert_eq!(m.items_at(p(0, 0)).collect::<Vec<_>>(), vec![&"a", &"b"]);
        assert_eq!(m.remove_at(p(0, 0)), vec!["a", "b"]);
        assert!(m.is_empty());
    }

    #[test]
    fn multi_move_appends_at_target() {
        let mut m = MultiSpatialMap::new();
        m.add(1, p(0, 0)).unwrap();
        m.add(2, p(1, 1)).unwrap();
        assert_eq!(m.move_item(&1, p(1, 1)), Ok(p(0, 0)));
        assert_eq!(m.items_at(p(1, 1)).copied().collect::<Vec<_>>(), vec![2, 1]);
        assert!(!m.contains_at(p(0, 0)));
        assert!(m.can_move_all(p(1, 1), p(1, 1)));
    }

    #[test]
    fn clear_empties_both_indices() {
        let mut m = MultiSpatialMap::new();
        m.add('x', p(4, 4)).unwrap();
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.positions().count(), 0);
        assert!(m.add('x', p(4, 4)).is_ok());
    }
}
