//! Dense and computed grid views.

use crate::error::GridError;
use crate::point::Point;
use crate::traits::{GridView, GridViewMut};
use std::ops::{Index, IndexMut};

/// Check that `point` lies in a `width x height` grid and return its
/// row-major flat index.
pub fn check_bounds(point: Point, width: usize, height: usize) -> Result<usize, GridError> {
    if point.x < 0 || point.y < 0 || point.x as usize >= width || point.y as usize >= height {
        return Err(GridError::OutOfBounds {
            point,
            width,
            height,
        });
    }
    Ok(point.to_index(width))
}

/// A dense, row-major grid of values.
///
/// Used both as a resistance map and as the visibility engine's
/// illumination buffer.
///
/// # Examples
///
/// ```
/// use penumbra_core::{ArrayView, GridView, Point};
///
/// let mut map = ArrayView::filled(4, 3, 0.0f64).unwrap();
/// map[Point::new(1, 2)] = 1.0;
/// assert_eq!(map.get(Point::new(1, 2)), 1.0);
/// assert_eq!(map.count(), 12);
/// assert!(!map.contains(Point::new(4, 0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayView<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> ArrayView<T> {
    /// Create a `width x height` grid with every cell set to `value`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            width,
            height,
            cells: vec![value; width * height],
        })
    }

    /// Create a grid from existing row-major storage.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Checked mutable access.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        let idx = check_bounds(point, self.width, self.height).ok()?;
        self.cells.get_mut(idx)
    }
}

impl<T: Clone + Default> ArrayView<T> {
    /// Create a `width x height` grid filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, T::default())
    }
}

impl<T> ArrayView<T> {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major backing storage.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Point::from_index(i, width))
    }

    /// `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Point::from_index(i, width), v))
    }
}

impl<T: Clone> GridView<T> for ArrayView<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, point: Point) -> T {
        self[point].clone()
    }
}

impl<T: Clone> GridViewMut<T> for ArrayView<T> {
    fn set(&mut self, point: Point, value: T) {
        self[point] = value;
    }
}

impl<T> Index<Point> for ArrayView<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match check_bounds(point, self.width, self.height) {
            Ok(i) => &self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<Point> for ArrayView<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        match check_bounds(point, self.width, self.height) {
            Ok(i) => &mut self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

/// A read-only grid whose cells are computed on demand by a closure.
///
/// Handy for deriving a resistance map from some other representation
/// without materialising it:
///
/// ```
/// use penumbra_core::{FnGridView, GridView, Point};
///
/// let walls = [Point::new(1, 1)];
/// let resistance = FnGridView::new(3, 3, |p: Point| if walls.contains(&p) { 1.0 } else { 0.0 }).unwrap();
/// assert_eq!(resistance.get(Point::new(1, 1)), 1.0);
/// assert_eq!(resistance.get(Point::new(0, 1)), 0.0);
/// ```
pub struct FnGridView<F> {
    width: usize,
    height: usize,
    f: F,
}

impl<F> FnGridView<F> {
    /// Wrap `f` as a `width x height` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(width: usize, height: usize, f: F) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self { width, height, f })
    }
}

impl<T, F: Fn(Point) -> T> GridView<T> for FnGridView<F> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, point: Point) -> T {
        (self.f)(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rejects_empty() {
        assert_eq!(ArrayView::filled(0, 4, 0u8), Err(GridError::EmptyGrid));
        assert_eq!(ArrayView::filled(4, 0, 0u8), Err(GridError::EmptyGrid));
    }

    #[test]
    fn from_vec_rejects_length_mismatch() {
        let err = ArrayView::from_vec(3, 3, vec![0u8; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn check_bounds_reports_grid() {
        assert_eq!(check_bounds(Point::new(2, 1), 3, 2), Ok(5));
        let err = check_bounds(Point::new(-1, 0), 3, 2).unwrap_err();
        assert_eq!(err.to_string(), "point (-1, 0) out of bounds: [0, 3) x [0, 2)");
        assert!(check_bounds(Point::new(0, 2), 3, 2).is_err());
    }

    #[test]
    fn set_and_get() {
        let mut g: ArrayView<f64> = ArrayView::new(3, 2).unwrap();
        g.set(Point::new(2, 1), 0.5);
        assert_eq!(g.get(Point::new(2, 1)), 0.5);
        assert_eq!(g.as_slice()[5], 0.5);
        assert_eq!(g.get_checked(Point::new(3, 1)), None);
        assert!(g.get_mut(Point::new(0, 2)).is_none());
    }

    #[test]
    #[should_panic(expected = "point (5, 0) out of bounds: [0, 5) x [0, 5)")]
    fn index_rejects_x_past_row_end() {
        let mut g = ArrayView::filled(5, 5, 0.0f64).unwrap();
        g[Point::new(0, 1)] = 7.0;
        let _ = g[Point::new(5, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_mut_rejects_x_past_row_end() {
        let mut g = ArrayView::filled(5, 5, 0.0f64).unwrap();
        g[Point::new(5, 0)] = 7.0;
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut g = ArrayView::filled(2, 2, 1.0f64).unwrap();
        g.fill(0.0);
        assert!(g.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn positions_are_row_major() {
        let g = ArrayView::filled(2, 2, ()).unwrap();
        let pts: Vec<Point> = g.positions().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn fn_view_reads_through_closure() {
        let v = FnGridView::new(4, 4, |p: Point| p.x * 10 + p.y).unwrap();
        assert_eq!(v.get(Point::new(3, 2)), 32);
        assert_eq!(v.count(), 16);
        assert!(FnGridView::new(0, 1, |_: Point| 0).is_err());
    }

    #[test]
    fn reference_is_a_view() {
        let g = ArrayView::filled(2, 3, 7u8).unwrap();
        let r: &dyn GridView<u8> = &g;
        assert_eq!((&r).height(), 3);
        assert_eq!(GridView::get(&&g, Point::new(1, 2)), 7);
    }
}
