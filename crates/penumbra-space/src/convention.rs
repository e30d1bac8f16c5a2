//! Vertical-axis orientation for grid coordinates.

use crate::direction::Direction;
use penumbra_core::Point;

/// Which way the Y axis grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Y increases downward (screen / console coordinates). `Up` is `y - 1`.
    #[default]
    Down,
    /// Y increases upward (mathematical coordinates). `Up` is `y + 1`.
    Up,
}

/// The coordinate convention a program uses for its grids.
///
/// This is the only orientation state in the workspace. It is an immutable
/// `Copy` value rather than process-wide state: build one at startup and
/// hand it to every component that turns [`Direction`]s into offsets
/// (the visibility engine keeps one in its configuration). Two components
/// holding different conventions simply disagree about which way is up;
/// they cannot race.
///
/// # Examples
///
/// ```
/// use penumbra_core::Point;
/// use penumbra_space::{Direction, GridConvention};
///
/// let screen = GridConvention::Y_DOWN;
/// let maths = GridConvention::Y_UP;
/// let p = Point::new(3, 3);
/// assert_eq!(screen.translate(p, Direction::UpRight), Point::new(4, 2));
/// assert_eq!(maths.translate(p, Direction::UpRight), Point::new(4, 4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridConvention {
    y_axis: YAxis,
}

impl GridConvention {
    /// Y increases downward. This is the default.
    pub const Y_DOWN: GridConvention = GridConvention { y_axis: YAxis::Down };

    /// Y increases upward.
    pub const Y_UP: GridConvention = GridConvention { y_axis: YAxis::Up };

    /// Create a convention with the given Y orientation.
    pub const fn new(y_axis: YAxis) -> Self {
        Self { y_axis }
    }

    /// The Y orientation.
    pub const fn y_axis(self) -> YAxis {
        self.y_axis
    }

    /// `true` when `Up` means increasing Y.
    pub const fn y_increases_upward(self) -> bool {
        matches!(self.y_axis, YAxis::Up)
    }

    /// Offset of `direction` as a point.
    pub const fn delta(self, direction: Direction) -> Point {
        Point::new(direction.dx(), direction.dy(self))
    }

    /// `point` moved one step in `direction`.
    pub fn translate(self, point: Point, direction: Direction) -> Point {
        point + self.delta(direction)
    }

    /// Compass bearing of the offset `(dx, dy)` in degrees.
    ///
    /// 0° points up, angles increase clockwise, and the result lies in
    /// `[0, 360)`. The zero offset has bearing 0.
    pub fn angle_degrees(self, dx: i32, dy: i32) -> f64 {
        // Component along "up" under this convention.
        let up = match self.y_axis {
            YAxis::Down => -dy,
            YAxis::Up => dy,
        };
        let deg = (dx as f64).atan2(up as f64).to_degrees();
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }

    /// The one of the eight directions closest in angle to the line from
    /// `from` to `to`, or `None` when the points coincide.
    ///
    /// Bearings exactly halfway between two directions round clockwise.
    pub fn direction_between(self, from: Point, to: Point) -> Direction {
        let d = to - from;
        if d == Point::ZERO {
            return Direction::None;
        }
        let angle = self.angle_degrees(d.x, d.y);
        let idx = (angle / 45.0).round() as usize % 8;
        Direction::ALL[idx]
    }

    /// The cardinal direction closest in angle to the line from `from` to
    /// `to`, or `None` when the points coincide.
    pub fn cardinal_direction_between(self, from: Point, to: Point) -> Direction {
        let d = to - from;
        if d == Point::ZERO {
            return Direction::None;
        }
        let angle = self.angle_degrees(d.x, d.y);
        let idx = (angle / 90.0).round() as usize % 4;
        Direction::ALL[idx * 2]
    }
}
