//! Shared helpers for rectangular 2D regions.

use penumbra_core::Point;

/// Inclusive bounds `(min, max)` of a square window of half-size `reach`
/// around `center`, optionally clipped to `[0, width) x [0, height)`.
///
/// Returns `None` when the clipped window is empty.
pub(crate) fn window(
    center: Point,
    reach: i32,
    clip: Option<(usize, usize)>,
) -> Option<(Point, Point)> {
    let mut min = Point::new(center.x.saturating_sub(reach), center.y.saturating_sub(reach));
    let mut max = Point::new(center.x.saturating_add(reach), center.y.saturating_add(reach));
    if let Some((width, height)) = clip {
        min.x = min.x.max(0);
        min.y = min.y.max(0);
        max.x = max.x.min(width as i32 - 1);
        max.y = max.y.min(height as i32 - 1);
    }
    if min.x > max.x || min.y > max.y {
        return None;
    }
    Some((min, max))
}

/// Row-major ordering of every point in `[0, width) x [0, height)`.
#[cfg(test)]
pub(crate) fn canonical_ordering_2d(width: usize, height: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(Point::new(x, y));
        }
    }
    out
}
