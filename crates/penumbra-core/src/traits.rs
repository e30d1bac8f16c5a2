//! Core abstraction traits for per-cell grid access.

use crate::point::Point;

/// Read-only access to a rectangular grid of values.
///
/// This is the contract through which the visibility engine consumes a
/// resistance map (`GridView<f64>`), and through which callers read the
/// illumination map it produces. Implementors only need to supply the
/// dimensions and an unchecked [`get`](Self::get).
pub trait GridView<T> {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Value at `point`.
    ///
    /// `point` must satisfy [`contains`](Self::contains); implementations
    /// may panic otherwise.
    fn get(&self, point: Point) -> T;

    /// Total number of cells.
    fn count(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether `point` lies within `[0, width) x [0, height)`.
    fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    /// Value at `point`, or `None` when it is out of bounds.
    fn get_checked(&self, point: Point) -> Option<T> {
        if self.contains(point) {
            Some(self.get(point))
        } else {
            None
        }
    }
}

/// Mutable access to a rectangular grid of values.
pub trait GridViewMut<T>: GridView<T> {
    /// Overwrite the value at `point`.
    ///
    /// `point` must be in bounds; implementations may panic otherwise.
    fn set(&mut self, point: Point, value: T);
}

impl<T, V: GridView<T> + ?Sized> GridView<T> for &V {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn get(&self, point: Point) -> T {
        (**self).get(point)
    }
}
