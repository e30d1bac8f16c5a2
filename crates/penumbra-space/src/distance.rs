//! Distance metrics on the integer grid.

use crate::adjacency::AdjacencyRule;
use crate::direction::Direction;
use crate::radius::Radius;
use penumbra_core::Point;

/// A distance metric.
///
/// Each metric matches the graph geodesic of one neighbourhood: Manhattan
/// for 4-connected movement, Chebyshev for 8-connected movement where a
/// diagonal step costs 1, and Euclidean for straight-line (round) shapes.
///
/// # Examples
///
/// ```
/// use penumbra_space::Distance;
///
/// assert_eq!(Distance::Chebyshev.calculate(3, -4), 4.0);
/// assert_eq!(Distance::Manhattan.calculate(3, -4), 7.0);
/// assert_eq!(Distance::Euclidean.calculate(3, -4), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distance {
    /// `max(|dx|, |dy|)` (L-inf).
    Chebyshev,
    /// `|dx| + |dy|` (L1).
    Manhattan,
    /// `sqrt(dx² + dy²)` (L2).
    Euclidean,
}

impl Distance {
    /// Distance covered by the offset `(dx, dy)`.
    pub fn calculate(self, dx: i32, dy: i32) -> f64 {
        let dx = (dx as f64).abs();
        let dy = (dy as f64).abs();
        match self {
            Self::Chebyshev => dx.max(dy),
            Self::Manhattan => dx + dy,
            Self::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }

    /// A value that orders offsets the same way as
    /// [`calculate`](Self::calculate) without the square root.
    ///
    /// Squared length for Euclidean; identical to `calculate` otherwise.
    pub fn magnitude(self, dx: i32, dy: i32) -> f64 {
        match self {
            Self::Euclidean => {
                let dx = dx as f64;
                let dy = dy as f64;
                dx * dx + dy * dy
            }
            Self::Chebyshev | Self::Manhattan => self.calculate(dx, dy),
        }
    }

    /// Distance between two points.
    pub fn between(self, a: Point, b: Point) -> f64 {
        let d = b - a;
        self.calculate(d.x, d.y)
    }

    /// The neighbourhood whose graph geodesic this metric measures.
    ///
    /// Manhattan maps to [`AdjacencyRule::Cardinals`]; the others to
    /// [`AdjacencyRule::EightWay`].
    pub const fn adjacency(self) -> AdjacencyRule {
        match self {
            Self::Manhattan => AdjacencyRule::Cardinals,
            Self::Chebyshev | Self::Euclidean => AdjacencyRule::EightWay,
        }
    }

    /// Directions that count as adjacent under this metric.
    ///
    /// [`Direction::CARDINALS`] for Manhattan, otherwise all eight
    /// directions clockwise from `Up`.
    pub fn adjacency_directions(self) -> &'static [Direction] {
        match self {
            Self::Manhattan => &Direction::CARDINALS,
            Self::Chebyshev | Self::Euclidean => &Direction::ALL,
        }
    }

    /// The 2D radius shape drawn by this metric.
    pub const fn radius(self) -> Radius {
        match self {
            Self::Chebyshev => Radius::Square,
            Self::Manhattan => Radius::Diamond,
            Self::Euclidean => Radius::Circle,
        }
    }
}

impl From<Radius> for Distance {
    fn from(radius: Radius) -> Self {
        radius.distance()
    }
}

impl From<AdjacencyRule> for Distance {
    fn from(rule: AdjacencyRule) -> Self {
        rule.distance()
    }
}
