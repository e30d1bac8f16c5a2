//! Benchmark profiles and utilities for the Penumbra grid toolkit.
//!
//! Provides pre-built resistance maps for benchmarking:
//!
//! - [`reference_map`]: 100x100 grid (10K cells), 25% walls
//! - [`stress_map`]: 316x316 grid (~100K cells), 25% walls
//! - [`open_origins`]: deterministic open cells to cast from

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use penumbra_core::{ArrayView, Point};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fraction of wall cells in the profile maps.
pub const WALL_DENSITY: f64 = 0.25;

/// Build a reference benchmark map: 100x100 grid (10K cells).
pub fn reference_map(seed: u64) -> ArrayView<f64> {
    cave(100, 100, seed)
}

/// Build a stress benchmark map: 316x316 grid (~100K cells).
///
/// Same wall density as [`reference_map`] at 10x the cell count.
pub fn stress_map(seed: u64) -> ArrayView<f64> {
    cave(316, 316, seed)
}

/// Random walls at [`WALL_DENSITY`] inside a solid border.
fn cave(width: usize, height: usize, seed: u64) -> ArrayView<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
            let wall = border || rng.random::<f64>() < WALL_DENSITY;
            cells.push(if wall { 1.0 } else { 0.0 });
        }
    }
    ArrayView::from_vec(width, height, cells).unwrap()
}

/// Pick `n` distinct open cells of `map`, deterministically from `seed`.
///
/// Returns fewer than `n` points when the map has fewer open cells.
pub fn open_origins(map: &ArrayView<f64>, n: usize, seed: u64) -> Vec<Point> {
    let mut open: Vec<Point> = map
        .iter()
        .filter(|&(_, &r)| r < 1.0)
        .map(|(p, _)| p)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    open.shuffle(&mut rng);
    open.truncate(n);
    open
}
