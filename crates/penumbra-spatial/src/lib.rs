//! Spatial maps for Penumbra grids.
//!
//! Track where items stand on a grid and answer "what is at this cell?"
//! and "where is this item?" in constant time.
//!
//! - [`SpatialMap`]: at most one item per position.
//! - [`MultiSpatialMap`]: any number of items per position.
//! - [`LayeredSpatialMap`]: a stack of layers, each single or multi
//!   occupancy, with items routed by [`HasLayer`] and queries filtered by
//!   [`LayerMask`].
//!
//! Every iteration order is deterministic: items and positions come out in
//! insertion order, and removals do not reorder what remains.
//!
//! # Examples
//!
//! ```
//! use penumbra_core::Point;
//! use penumbra_spatial::{SpatialError, SpatialIndex, SpatialMap};
//!
//! let mut map = SpatialMap::new();
//! map.add("goblin", Point::new(1, 1)).unwrap();
//! assert_eq!(
//!     map.add("orc", Point::new(1, 1)),
//!     Err(SpatialError::PositionOccupied { position: Point::new(1, 1) })
//! );
//! assert_eq!(map.move_item(&"goblin", Point::new(2, 1)), Ok(Point::new(1, 1)));
//! assert_eq!(map.position_of(&"goblin"), Some(Point::new(2, 1)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layer_mask;
pub mod layered;
pub mod maps;
pub mod spatial_index;
mod store;

pub use error::SpatialError;
pub use layer_mask::LayerMask;
pub use layered::{HasLayer, LayeredSpatialMap};
pub use maps::{MultiSpatialMap, SpatialMap};
pub use spatial_index::SpatialIndex;
pub use store::SpatialLayer;
