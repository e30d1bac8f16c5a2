//! Error types for spatial map operations.

use penumbra_core::Point;
use std::error::Error;
use std::fmt;

/// Errors from adding, removing or moving items in a spatial map.
///
/// A failed operation leaves the map unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpatialError {
    /// The item is already in the map.
    ItemAlreadyPresent,
    /// The item is not in the map.
    ItemNotFound,
    /// The target position of a single-occupancy map or layer already
    /// holds an item.
    PositionOccupied {
        /// The occupied position.
        position: Point,
    },
    /// The item's layer is outside the layered map's range.
    InvalidLayer {
        /// The rejected layer.
        layer: u32,
        /// First valid layer.
        start: u32,
        /// One past the last valid layer.
        end: u32,
    },
    /// A layered map was asked for layers beyond index 31.
    TooManyLayers {
        /// `starting_layer + layer_count` as requested.
        requested: u64,
    },
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAlreadyPresent => write!(f, "item is already in the map"),
            Self::ItemNotFound => write!(f, "item is not in the map"),
            Self::PositionOccupied { position } => {
                write!(f, "position {position} is already occupied")
            }
            Self::InvalidLayer { layer, start, end } => {
                write!(f, "layer {layer} outside map layers [{start}, {end})")
            }
            Self::TooManyLayers { requested } => write!(
                f,
                "layered map needs {requested} layer slots, at most {} are supported",
                crate::LayerMask::MAX_LAYERS
            ),
        }
    }
}

impl Error for SpatialError {}
