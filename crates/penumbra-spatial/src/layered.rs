//! Layered spatial maps.
//!
//! A [`LayeredSpatialMap`] stacks several [`SpatialLayer`]s, typically one
//! for terrain, one for items on the floor and one for creatures. Items
//! report their own layer through [`HasLayer`]; queries that span layers
//! take a [`LayerMask`] and visit the selected layers from highest to
//! lowest.

use crate::error::SpatialError;
use crate::layer_mask::LayerMask;
use crate::spatial_index::SpatialIndex;
use crate::store::SpatialLayer;
use penumbra_core::Point;
use std::hash::Hash;

/// An item that lives on a fixed layer.
///
/// The layer must not change while the item is in a map.
pub trait HasLayer {
    /// Absolute layer index.
    fn layer(&self) -> u32;
}

/// A stack of spatial layers `starting_layer .. starting_layer + layer_count`.
#[derive(Clone, Debug)]
pub struct LayeredSpatialMap<T> {
    starting_layer: u32,
    layers: Vec<SpatialLayer<T>>,
}

impl<T: HasLayer + Clone + Eq + Hash> LayeredSpatialMap<T> {
    /// Create `layer_count` empty layers starting at `starting_layer`.
    ///
    /// Layers whose absolute index is in `multi_layers` accept any number of
    /// items per position; the rest hold at most one.
    ///
    /// # Errors
    ///
    /// [`SpatialError::TooManyLayers`] if the highest layer would exceed
    /// index 31.
    pub fn new(
        layer_count: u32,
        starting_layer: u32,
        multi_layers: LayerMask,
    ) -> Result<Self, SpatialError> {
        let requested = u64::from(starting_layer) + u64::from(layer_count);
        if requested > u64::from(LayerMask::MAX_LAYERS) {
            return Err(SpatialError::TooManyLayers { requested });
        }
        let layers = (starting_layer..starting_layer + layer_count)
            .map(|l| SpatialLayer::new(multi_layers.contains(l)))
            .collect();
        log::debug!(
            "layered spatial map: layers {starting_layer}..{}, multi {:#034b}",
            starting_layer + layer_count,
            multi_layers.0
        );
        Ok(Self {
            starting_layer,
            layers,
        })
    }

    /// First layer index.
    pub fn starting_layer(&self) -> u32 {
        self.starting_layer
    }

    /// Number of layers.
    pub fn layer_count(&self) -> u32 {
        // Bounded by MAX_LAYERS at construction.
        self.layers.len() as u32
    }

    /// Mask of every layer in this map.
    pub fn layer_mask(&self) -> LayerMask {
        LayerMask::range(self.starting_layer, self.layer_count())
    }

    /// The storage of absolute layer `index`, if it is in this map.
    pub fn layer(&self, index: u32) -> Option<&SpatialLayer<T>> {
        let rel = index.checked_sub(self.starting_layer)?;
        self.layers.get(rel as usize)
    }

    fn slot(&self, layer: u32) -> Result<usize, SpatialError> {
        match layer.checked_sub(self.starting_layer) {
            Some(rel) if (rel as usize) < self.layers.len() => Ok(rel as usize),
            _ => Err(SpatialError::InvalidLayer {
                layer,
                start: self.starting_layer,
                end: self.starting_layer + self.layer_count(),
            }),
        }
    }

    /// Relative indices of the layers selected by `mask`, highest first.
    fn selected(&self, mask: LayerMask) -> impl Iterator<Item = usize> + '_ {
        (mask & self.layer_mask())
            .layers()
            .map(move |l| (l - self.starting_layer) as usize)
    }

    /// Place `item` at `position` on its own layer.
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidLayer`] if the item's layer is not in this
    /// map, otherwise as [`SpatialIndex::add`].
    pub fn add(&mut self, item: T, position: Point) -> Result<(), SpatialError> {
        let i = self.slot(item.layer())?;
        self.layers[i].add(item, position)
    }

    /// Remove `item`, returning where it was.
    pub fn remove(&mut self, item: &T) -> Result<Point, SpatialError> {
        let i = self.slot(item.layer())?;
        self.layers[i].remove(item)
    }

    /// Remove every item at `position` on the layers in `mask`, highest
    /// layer first.
    pub fn remove_at(&mut self, position: Point, mask: LayerMask) -> Vec<T> {
        let selected: Vec<usize> = self.selected(mask).collect();
        selected
            .into_iter()
            .flat_map(|i| self.layers[i].remove_at(position))
            .collect()
    }

    /// Move `item` to `to` on its layer, returning its previous position.
    pub fn move_item(&mut self, item: &T, to: Point) -> Result<Point, SpatialError> {
        let i = self.slot(item.layer())?;
        self.layers[i].move_item(item, to)
    }

    /// Move everything at `from` to `to` on the layers in `mask`.
    ///
    /// Either every selected layer moves or none does. Moved items are
    /// returned highest layer first.
    ///
    /// # Errors
    ///
    /// [`SpatialError::PositionOccupied`] if a single-occupancy layer has
    /// items at both positions.
    pub fn move_all(
        &mut self,
        from: Point,
        to: Point,
        mask: LayerMask,
    ) -> Result<Vec<T>, SpatialError> {
        let selected: Vec<usize> = self.selected(mask).collect();
        if !selected.iter().all(|&i| self.layers[i].can_move_all(from, to)) {
            return Err(SpatialError::PositionOccupied { position: to });
        }
        let mut moved = Vec::new();
        for i in selected {
            moved.extend(self.layers[i].move_all(from, to)?);
        }
        log::trace!("moved {} items {from} -> {to}", moved.len());
        Ok(moved)
    }

    /// Whether [`add`](Self::add) would succeed.
    pub fn can_add(&self, item: &T, position: Point) -> bool {
        self.slot(item.layer())
            .is_ok_and(|i| self.layers[i].can_add(item, position))
    }

    /// Whether [`move_item`](Self::move_item) would succeed.
    pub fn can_move(&self, item: &T, to: Point) -> bool {
        self.slot(item.layer())
            .is_ok_and(|i| self.layers[i].can_move(item, to))
    }

    /// Whether [`move_all`](Self::move_all) would succeed.
    pub fn can_move_all(&self, from: Point, to: Point, mask: LayerMask) -> bool {
        self.selected(mask)
            .all(|i| self.layers[i].can_move_all(from, to))
    }

    /// Items at `position` on the layers in `mask`, highest layer first.
    pub fn items_at(&self, position: Point, mask: LayerMask) -> impl Iterator<Item = &T> + '_ {
        self.selected(mask)
            .flat_map(move |i| self.layers[i].items_at(position))
    }

    /// Whether any layer in `mask` has an item at `position`.
    pub fn contains_at(&self, position: Point, mask: LayerMask) -> bool {
        self.selected(mask)
            .any(|i| self.layers[i].contains_at(position))
    }

    /// Where `item` is, if it is in the map.
    pub fn position_of(&self, item: &T) -> Option<Point> {
        let i = self.slot(item.layer()).ok()?;
        self.layers[i].position_of(item)
    }

    /// Whether `item` is in the map.
    pub fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    /// Total number of items across all layers.
    pub fn len(&self) -> usize {
        self.layers.iter().map(|l| l.len()).sum()
    }

    /// Whether every layer is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.is_empty())
    }

    /// Every item with its position, highest layer first.
    pub fn items(&self) -> impl Iterator<Item = (&T, Point)> + '_ {
        self.layers.iter().rev().flat_map(|l| l.items())
    }

    /// Empty every layer.
    pub fn clear(&mut self) {
        for l in &mut self.layers {
            l.clear();
        }
    }
}
