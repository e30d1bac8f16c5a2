//! Core types and traits for the Penumbra grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Penumbra workspace:
//! the [`Point`] coordinate, the [`GridView`] read contract through which
//! resistance maps and other per-cell data are consumed, the dense
//! [`ArrayView`] backing store, and the shared [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod point;
pub mod traits;

pub use error::GridError;
pub use grid::{check_bounds, ArrayView, FnGridView};
pub use point::Point;
pub use traits::{GridView, GridViewMut};
