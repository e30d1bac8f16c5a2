//! Radius shapes.

use crate::adjacency::AdjacencyRule;
use crate::distance::Distance;
use crate::grid2d;
use penumbra_core::Point;

/// The shape of a radius, tied 1:1 to a [`Distance`] metric and an
/// [`AdjacencyRule`].
///
/// The 3D names are aliases kept for callers that think in volumes; on a
/// 2D grid they draw the same shape as their flat counterpart.
///
/// | Shape | Metric | Adjacency |
/// |-------|--------|-----------|
/// | `Square`, `Cube` | Chebyshev | EightWay |
/// | `Diamond`, `Octahedron` | Manhattan | Cardinals |
/// | `Circle`, `Sphere` | Euclidean | EightWay |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Radius {
    /// Chebyshev square.
    Square,
    /// Manhattan diamond.
    Diamond,
    /// Euclidean circle.
    #[default]
    Circle,
    /// 3D name for [`Square`](Radius::Square).
    Cube,
    /// 3D name for [`Diamond`](Radius::Diamond).
    Octahedron,
    /// 3D name for [`Circle`](Radius::Circle).
    Sphere,
}

impl Radius {
    /// The metric that decides which cells are inside the radius.
    pub const fn distance(self) -> Distance {
        match self {
            Self::Square | Self::Cube => Distance::Chebyshev,
            Self::Diamond | Self::Octahedron => Distance::Manhattan,
            Self::Circle | Self::Sphere => Distance::Euclidean,
        }
    }

    /// The neighbourhood matching this shape.
    pub const fn adjacency(self) -> AdjacencyRule {
        match self {
            Self::Diamond | Self::Octahedron => AdjacencyRule::Cardinals,
            Self::Square | Self::Cube | Self::Circle | Self::Sphere => AdjacencyRule::EightWay,
        }
    }

    /// Every point within `radius` of `center` under this shape's metric,
    /// in row-major order.
    ///
    /// A negative or non-finite `radius` yields no points; use
    /// [`positions_in_radius_bounded`](Self::positions_in_radius_bounded)
    /// when the radius may be infinite.
    ///
    /// ```
    /// use penumbra_core::Point;
    /// use penumbra_space::Radius;
    ///
    /// assert_eq!(Radius::Square.positions_in_radius(Point::new(0, 0), 1.0).len(), 9);
    /// assert_eq!(Radius::Diamond.positions_in_radius(Point::new(0, 0), 1.0).len(), 5);
    /// assert_eq!(Radius::Circle.positions_in_radius(Point::new(0, 0), 2.0).len(), 13);
    /// ```
    pub fn positions_in_radius(self, center: Point, radius: f64) -> Vec<Point> {
        if !radius.is_finite() || radius < 0.0 {
            return Vec::new();
        }
        self.collect_in_window(center, radius, radius.floor() as i32, None)
    }

    /// Like [`positions_in_radius`](Self::positions_in_radius) but restricted
    /// to `[0, width) x [0, height)`. An infinite `radius` covers the grid.
    pub fn positions_in_radius_bounded(
        self,
        center: Point,
        radius: f64,
        width: usize,
        height: usize,
    ) -> Vec<Point> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        // No in-grid point can be further than this from `center` in any
        // axis, even when `center` itself lies outside the grid.
        let span = (width + height) as i64
            + i64::from(center.x.unsigned_abs())
            + i64::from(center.y.unsigned_abs());
        let reach = (radius.floor() as i64).min(span).min(i32::MAX as i64) as i32;
        self.collect_in_window(center, radius, reach, Some((width, height)))
    }

    fn collect_in_window(
        self,
        center: Point,
        radius: f64,
        reach: i32,
        clip: Option<(usize, usize)>,
    ) -> Vec<Point> {
        let Some((min, max)) = grid2d::window(center, reach, clip) else {
            return Vec::new();
        };
        let metric = self.distance();
        let mut out = Vec::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if metric.calculate(x - center.x, y - center.y) <= radius {
                    out.push(Point::new(x, y));
                }
            }
        }
        out
    }
}

impl From<Distance> for Radius {
    fn from(distance: Distance) -> Self {
        distance.radius()
    }
}

impl From<AdjacencyRule> for Radius {
    fn from(rule: AdjacencyRule) -> Self {
        rule.radius()
    }
}
