//! Penumbra: grid geometry, field of view and spatial maps for tile-based games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Penumbra sub-crates. For most users, adding `penumbra` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use penumbra::prelude::*;
//!
//! // A 9x9 room with a pillar east of the player.
//! let mut resistance = ArrayView::filled(9, 9, 0.0).unwrap();
//! resistance[Point::new(5, 4)] = 1.0;
//!
//! let player = Point::new(4, 4);
//! let mut fov = Fov::new();
//! fov.calculate(&resistance, player, 4.0, Radius::Circle).unwrap();
//! assert!(fov.is_visible(Point::new(5, 4)));
//! assert!(!fov.is_visible(Point::new(6, 4)));
//!
//! // Only monsters inside the field of view are noticed.
//! let mut monsters = SpatialMap::new();
//! monsters.add("rat", Point::new(4, 1)).unwrap();
//! monsters.add("bat", Point::new(7, 4)).unwrap();
//! let seen: Vec<_> = monsters
//!     .items()
//!     .filter(|&(_, at)| fov.is_visible(at))
//!     .map(|(name, _)| *name)
//!     .collect();
//! assert_eq!(seen, vec!["rat"]);
//!
//! // Step towards the rat.
//! let step = GridConvention::default().direction_between(player, Point::new(4, 1));
//! assert_eq!(step, Direction::Up);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `penumbra-core` | `Point`, grid views, bounds checks |
//! | [`space`] | `penumbra-space` | Directions, distances, adjacency, radius shapes |
//! | [`fov`] | `penumbra-fov` | Shadow-casting field of view and cones |
//! | [`spatial`] | `penumbra-spatial` | Single, multi and layered spatial maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Points and grid views (`penumbra-core`).
///
/// [`grid::GridView`] is the read interface the field-of-view engine
/// consumes; [`grid::ArrayView`] is the dense implementation.
pub use penumbra_core as grid;

/// Grid geometry (`penumbra-space`).
///
/// [`space::Direction`], [`space::Distance`], [`space::AdjacencyRule`] and
/// [`space::Radius`], all interpreted through a [`space::GridConvention`].
pub use penumbra_space as space;

/// Field of view (`penumbra-fov`).
///
/// [`fov::Fov`] computes illumination maps, optionally restricted to a
/// [`fov::Cone`].
pub use penumbra_fov as fov;

/// Spatial maps (`penumbra-spatial`).
///
/// [`spatial::SpatialMap`], [`spatial::MultiSpatialMap`] and
/// [`spatial::LayeredSpatialMap`] behind the [`spatial::SpatialIndex`]
/// interface.
pub use penumbra_spatial as spatial;

/// Common imports for typical Penumbra usage.
///
/// ```rust
/// use penumbra::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use penumbra_core::{ArrayView, GridView, GridViewMut, Point};

    // Geometry
    pub use penumbra_space::{AdjacencyRule, Direction, Distance, GridConvention, Radius, YAxis};

    // Field of view
    pub use penumbra_fov::{Fov, FovConfig};

    // Spatial maps
    pub use penumbra_spatial::{
        HasLayer, LayerMask, LayeredSpatialMap, MultiSpatialMap, SpatialIndex, SpatialMap,
    };

    // Errors
    pub use penumbra_core::GridError;
    pub use penumbra_fov::FovError;
    pub use penumbra_spatial::SpatialError;
}
