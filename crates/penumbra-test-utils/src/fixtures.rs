//! Reusable resistance-map fixtures.
//!
//! - [`open_map`]: no walls.
//! - [`map_from_ascii`]: hand-drawn maps, `#` wall, `.` floor, `@` origin.
//! - [`random_map`]: seeded noise for property tests and benches.
//! - [`mirror_x`] / [`mirror_point_x`]: left-right reflection.

use penumbra_core::{ArrayView, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Resistance of a wall cell.
pub const WALL: f64 = 1.0;

/// Resistance of an open cell.
pub const FLOOR: f64 = 0.0;

/// A parsed ASCII map.
pub struct AsciiMap {
    /// Resistance per cell: `1.0` for walls, `0.0` for floor.
    pub resistance: ArrayView<f64>,
    /// Position of the `@` marker, if the drawing had one.
    pub origin: Option<Point>,
}

/// A `width x height` map with no walls.
///
/// # Panics
///
/// If either dimension is zero.
pub fn open_map(width: usize, height: usize) -> ArrayView<f64> {
    ArrayView::filled(width, height, FLOOR).expect("open_map needs non-zero dimensions")
}

/// Parse a map drawn as rows of text.
///
/// Row 0 is the first string. `@` marks an open origin cell.
///
/// # Panics
///
/// On ragged rows, an empty drawing, an unknown glyph, or a second `@`.
pub fn map_from_ascii(rows: &[&str]) -> AsciiMap {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut cells = Vec::with_capacity(width * height);
    let mut origin = None;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {y} has the wrong width");
        for (x, c) in row.chars().enumerate() {
            let r = match c {
                '#' => WALL,
                '.' => FLOOR,
                '@' => {
                    assert!(origin.is_none(), "more than one '@' in map");
                    origin = Some(Point::new(x as i32, y as i32));
                    FLOOR
                }
                other => panic!("unknown map glyph {other:?} at ({x}, {y})"),
            };
            cells.push(r);
        }
    }
    let resistance = ArrayView::from_vec(width, height, cells).expect("map must not be empty");
    AsciiMap { resistance, origin }
}

/// A map where each cell is a wall with probability `density`.
///
/// The same `seed` always gives the same map.
pub fn random_map(width: usize, height: usize, density: f64, seed: u64) -> ArrayView<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..width * height)
        .map(|_| {
            if rng.random::<f64>() < density {
                WALL
            } else {
                FLOOR
            }
        })
        .collect();
    ArrayView::from_vec(width, height, cells).expect("random_map needs non-zero dimensions")
}

/// Reflect `map` left to right.
pub fn mirror_x<T: Clone>(map: &ArrayView<T>) -> ArrayView<T> {
    let (width, height) = map.dimensions();
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in (0..width).rev() {
            cells.push(map[Point::new(x as i32, y as i32)].clone());
        }
    }
    ArrayView::from_vec(width, height, cells).expect("mirror keeps dimensions")
}

/// Where `point` lands after [`mirror_x`] on a map of `width` columns.
pub fn mirror_point_x(point: Point, width: usize) -> Point {
    Point::new(width as i32 - 1 - point.x, point.y)
}

/// Render a light map as text: `@` at full brightness, `+` lit, `.` dark.
pub fn render_light(light: &ArrayView<f64>) -> String {
    let (width, height) = light.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            let b = light[Point::new(x as i32, y as i32)];
            out.push(if b >= 1.0 {
                '@'
            } else if b > 0.0 {
                '+'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
