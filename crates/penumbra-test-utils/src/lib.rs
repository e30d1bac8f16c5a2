//! Test utilities for Penumbra development.
//!
//! Provides resistance-map fixtures ([`fixtures`]) and a
//! [`CountingView`] wrapper that records how often a map is read.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use penumbra_core::{GridView, Point};

/// Wraps a [`GridView`] and counts calls to [`get`](GridView::get).
///
/// Useful for checking that a calculation never reads outside its radius
/// or reads each cell a bounded number of times.
pub struct CountingView<V> {
    inner: V,
    reads: Cell<usize>,
}

impl<V> CountingView<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    /// Number of `get` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T, V: GridView<T>> GridView<T> for CountingView<V> {
    fn width(&self) -> usize {
        self.inner.width()
    }

    fn height(&self) -> usize {
        self.inner.height()
    }

    fn get(&self, point: Point) -> T {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(point)
    }
}
