//! Neighbourhood rules: which directions count as adjacent.

use crate::convention::GridConvention;
use crate::direction::Direction;
use crate::distance::Distance;
use crate::radius::Radius;
use penumbra_core::Point;
use smallvec::SmallVec;

/// Which of the eight directions connect a cell to its neighbours.
///
/// # Examples
///
/// ```
/// use penumbra_core::Point;
/// use penumbra_space::{AdjacencyRule, GridConvention};
///
/// let conv = GridConvention::default();
/// let n = AdjacencyRule::Cardinals.neighbours_bounded(Point::new(0, 0), conv, 4, 4);
/// assert_eq!(n.len(), 2); // corner: only down and right survive
/// assert_eq!(AdjacencyRule::EightWay.neighbours(Point::new(0, 0), conv).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjacencyRule {
    /// Up, down, left, right.
    Cardinals,
    /// The four diagonals only.
    Diagonals,
    /// Cardinals then diagonals.
    EightWay,
}

impl AdjacencyRule {
    /// Directions of the neighbours, in fixed order.
    ///
    /// `Cardinals` yields [`Direction::CARDINALS`], `Diagonals` yields
    /// [`Direction::DIAGONALS`], and `EightWay` yields the cardinals
    /// followed by the diagonals.
    pub fn directions(self) -> &'static [Direction] {
        const EIGHT_WAY: [Direction; 8] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ];
        match self {
            Self::Cardinals => &Direction::CARDINALS,
            Self::Diagonals => &Direction::DIAGONALS,
            Self::EightWay => &EIGHT_WAY,
        }
    }

    /// Neighbour directions in clockwise order, beginning at `start`.
    ///
    /// For `Cardinals` / `Diagonals` a `start` of the wrong kind is first
    /// rotated one step clockwise.
    pub fn directions_clockwise_from(self, start: Direction) -> SmallVec<[Direction; 8]> {
        match self {
            Self::Cardinals => {
                Direction::cardinal_or_diagonal_clockwise_from(start, true).into_iter().collect()
            }
            Self::Diagonals => {
                Direction::cardinal_or_diagonal_clockwise_from(start, false).into_iter().collect()
            }
            Self::EightWay => Direction::all_clockwise_from(start).into_iter().collect(),
        }
    }

    /// Neighbour directions in counter-clockwise order, beginning at `start`.
    pub fn directions_counter_clockwise_from(
        self,
        start: Direction,
    ) -> SmallVec<[Direction; 8]> {
        match self {
            Self::Cardinals => Direction::cardinal_or_diagonal_counter_clockwise_from(start, true)
                .into_iter()
                .collect(),
            Self::Diagonals => Direction::cardinal_or_diagonal_counter_clockwise_from(start, false)
                .into_iter()
                .collect(),
            Self::EightWay => Direction::all_counter_clockwise_from(start).into_iter().collect(),
        }
    }

    /// Neighbours of `point`, unbounded, in [`directions`](Self::directions)
    /// order.
    pub fn neighbours(self, point: Point, convention: GridConvention) -> SmallVec<[Point; 8]> {
        self.directions()
            .iter()
            .map(|&d| convention.translate(point, d))
            .collect()
    }

    /// Neighbours of `point` that lie within `[0, width) x [0, height)`.
    pub fn neighbours_bounded(
        self,
        point: Point,
        convention: GridConvention,
        width: usize,
        height: usize,
    ) -> SmallVec<[Point; 8]> {
        self.directions()
            .iter()
            .map(|&d| convention.translate(point, d))
            .filter(|p| {
                p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height
            })
            .collect()
    }

    /// The metric whose geodesic this neighbourhood produces.
    ///
    /// `Diagonals` reports Chebyshev since every diagonal step costs 1.
    pub const fn distance(self) -> Distance {
        match self {
            Self::Cardinals => Distance::Manhattan,
            Self::Diagonals | Self::EightWay => Distance::Chebyshev,
        }
    }

    /// The 2D radius shape matching [`distance`](Self::distance).
    pub const fn radius(self) -> Radius {
        self.distance().radius()
    }
}

impl From<Distance> for AdjacencyRule {
    fn from(distance: Distance) -> Self {
        distance.adjacency()
    }
}

impl From<Radius> for AdjacencyRule {
    fn from(radius: Radius) -> Self {
        radius.adjacency()
    }
}
