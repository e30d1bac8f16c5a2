//! Field of view for Penumbra grids.
//!
//! [`Fov`] computes, for an origin on a resistance map, how brightly every
//! cell is lit. It uses recursive shadow casting: the area around the
//! origin is split into eight octants, and each octant is swept row by row
//! while tracking the angular wedge that is still unobstructed. Light falls
//! off linearly with distance under the chosen [`Radius`] shape and reaches
//! zero one unit past the radius.
//!
//! A cell blocks sight when its resistance is at least 1. Fractional
//! resistance is accepted but does not attenuate light.
//!
//! # Examples
//!
//! ```
//! use penumbra_core::{ArrayView, Point};
//! use penumbra_fov::Fov;
//! use penumbra_space::Radius;
//!
//! let mut resistance = ArrayView::filled(5, 5, 0.0).unwrap();
//! resistance[Point::new(2, 1)] = 1.0; // wall directly above the origin
//!
//! let mut fov = Fov::new();
//! let light = fov.calculate(&resistance, Point::new(2, 2), 2.0, Radius::Circle).unwrap();
//! assert_eq!(light[Point::new(2, 2)], 1.0);
//! assert_eq!(light[Point::new(2, 0)], 0.0); // behind the wall
//! assert!(fov.is_visible(Point::new(2, 4)));
//! ```
//!
//! [`Radius`]: penumbra_space::Radius

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cone;
pub mod config;
pub mod error;
pub mod fov;
mod shadowcast;

pub use cone::Cone;
pub use config::FovConfig;
pub use error::FovError;
pub use fov::Fov;
