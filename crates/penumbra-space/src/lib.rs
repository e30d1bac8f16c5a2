//! Grid geometry for Penumbra: directions, distance metrics, adjacency
//! rules and radius shapes.
//!
//! Everything here is a small `Copy` value type with pure functions. The
//! only orientation-dependent piece is [`GridConvention`], which fixes
//! whether "up" means decreasing or increasing Y. It is an ordinary value:
//! create one at startup and pass it to whatever needs it.
//!
//! # Types
//!
//! - [`Direction`]: the eight compass directions plus `None`
//! - [`Distance`]: Chebyshev, Manhattan or Euclidean metric
//! - [`AdjacencyRule`]: which directions count as neighbours
//! - [`Radius`]: radius shapes, each tied to a metric and an adjacency rule
//!
//! # Examples
//!
//! ```
//! use penumbra_core::Point;
//! use penumbra_space::{Direction, Distance, GridConvention, Radius};
//!
//! let conv = GridConvention::default(); // Y increases downward
//! assert_eq!(conv.translate(Point::new(2, 2), Direction::Up), Point::new(2, 1));
//! assert_eq!(Distance::from(Radius::Diamond), Distance::Manhattan);
//! assert_eq!(Distance::Chebyshev.calculate(3, -4), 4.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod convention;
pub mod direction;
pub mod distance;
pub(crate) mod grid2d;
pub mod radius;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::AdjacencyRule;
pub use convention::{GridConvention, YAxis};
pub use direction::Direction;
pub use distance::Distance;
pub use radius::Radius;
