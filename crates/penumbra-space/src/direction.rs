//! The eight compass directions plus `None`.

use crate::convention::{GridConvention, YAxis};
use std::fmt;

/// A compass direction on an 8-connected grid, or `None`.
///
/// The eight real directions form a clockwise cycle starting at
/// [`Up`](Direction::Up). [`rotate`](Direction::rotate) is index arithmetic
/// modulo 8 on that cycle.
///
/// A direction does not know its own `dy`: whether `Up` means `y - 1` or
/// `y + 1` depends on the [`GridConvention`] in force, so vertical
/// components are always resolved through one. `dx` is convention-free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No direction; the zero vector.
    #[default]
    None,
    /// Up.
    Up,
    /// Up and to the right.
    UpRight,
    /// Right.
    Right,
    /// Down and to the right.
    DownRight,
    /// Down.
    Down,
    /// Down and to the left.
    DownLeft,
    /// Left.
    Left,
    /// Up and to the left.
    UpLeft,
}

/// Clockwise cycle starting at `Up`; `Direction::index` points into this.
const CLOCKWISE: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

impl Direction {
    /// The four cardinal directions in fixed order: up, down, left, right.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions in fixed order: up-left, up-right,
    /// down-left, down-right.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// All eight directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = CLOCKWISE;

    /// Position in the clockwise cycle (`Up` = 0), or `None` for
    /// [`Direction::None`].
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Up => Some(0),
            Self::UpRight => Some(1),
            Self::Right => Some(2),
            Self::DownRight => Some(3),
            Self::Down => Some(4),
            Self::DownLeft => Some(5),
            Self::Left => Some(6),
            Self::UpLeft => Some(7),
        }
    }

    /// Rotate by `steps` eighth-turns. Positive is clockwise.
    ///
    /// `None` stays `None`.
    ///
    /// ```
    /// use penumbra_space::Direction;
    ///
    /// assert_eq!(Direction::Up.rotate(1), Direction::UpRight);
    /// assert_eq!(Direction::Up.rotate(-1), Direction::UpLeft);
    /// assert_eq!(Direction::Left.rotate(10), Direction::Up);
    /// assert_eq!(Direction::None.rotate(3), Direction::None);
    /// ```
    pub fn rotate(self, steps: i32) -> Self {
        match self.index() {
            Some(i) => CLOCKWISE[(i as i32 + steps.rem_euclid(8)) as usize % 8],
            None => Self::None,
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        self.rotate(4)
    }

    /// `true` for up, down, left and right.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// `true` for the four diagonals.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpRight | Self::DownRight | Self::DownLeft | Self::UpLeft
        )
    }

    /// Horizontal component. Independent of the grid convention.
    pub const fn dx(self) -> i32 {
        match self {
            Self::UpRight | Self::Right | Self::DownRight => 1,
            Self::DownLeft | Self::Left | Self::UpLeft => -1,
            Self::None | Self::Up | Self::Down => 0,
        }
    }

    /// Vertical component under a Y-down convention.
    const fn dy_down(self) -> i32 {
        match self {
            Self::Up | Self::UpRight | Self::UpLeft => -1,
            Self::Down | Self::DownRight | Self::DownLeft => 1,
            Self::None | Self::Left | Self::Right => 0,
        }
    }

    /// Vertical component under `convention`.
    pub const fn dy(self, convention: GridConvention) -> i32 {
        match convention.y_axis() {
            YAxis::Down => self.dy_down(),
            YAxis::Up => -self.dy_down(),
        }
    }

    /// `(dx, dy)` under `convention`.
    pub const fn delta(self, convention: GridConvention) -> (i32, i32) {
        (self.dx(), self.dy(convention))
    }

    /// Direction whose unit vector has the same signs as `(dx, dy)`.
    ///
    /// `(0, 0)` maps to `None`. Magnitudes are ignored, so `(5, -2)` is
    /// treated like `(1, -1)`.
    pub fn from_delta(dx: i32, dy: i32, convention: GridConvention) -> Self {
        let dy_down = match convention.y_axis() {
            YAxis::Down => dy,
            YAxis::Up => -dy,
        };
        match (dx.signum(), dy_down.signum()) {
            (0, -1) => Self::Up,
            (1, -1) => Self::UpRight,
            (1, 0) => Self::Right,
            (1, 1) => Self::DownRight,
            (0, 1) => Self::Down,
            (-1, 1) => Self::DownLeft,
            (-1, 0) => Self::Left,
            (-1, -1) => Self::UpLeft,
            _ => Self::None,
        }
    }

    /// All eight directions clockwise, beginning at `start`.
    ///
    /// `None` is treated as `Up`.
    pub fn all_clockwise_from(start: Direction) -> [Direction; 8] {
        let start = start.or_up();
        std::array::from_fn(|i| start.rotate(i as i32))
    }

    /// All eight directions counter-clockwise, beginning at `start`.
    ///
    /// `None` is treated as `Up`.
    pub fn all_counter_clockwise_from(start: Direction) -> [Direction; 8] {
        let start = start.or_up();
        std::array::from_fn(|i| start.rotate(-(i as i32)))
    }

    /// The four cardinals (or diagonals) clockwise, beginning at `start`.
    ///
    /// If `start` is not of the requested kind it is first rotated one
    /// step clockwise onto the nearest direction that is. `None` is treated
    /// as `Up`.
    ///
    /// ```
    /// use penumbra_space::Direction;
    ///
    /// assert_eq!(
    ///     Direction::cardinal_or_diagonal_clockwise_from(Direction::UpRight, true),
    ///     [Direction::Right, Direction::Down, Direction::Left, Direction::Up],
    /// );
    /// ```
    pub fn cardinal_or_diagonal_clockwise_from(
        start: Direction,
        want_cardinal: bool,
    ) -> [Direction; 4] {
        let mut start = start.or_up();
        if start.is_cardinal() != want_cardinal {
            start = start.rotate(1);
        }
        std::array::from_fn(|i| start.rotate(2 * i as i32))
    }

    /// Counter-clockwise counterpart of
    /// [`cardinal_or_diagonal_clockwise_from`](Self::cardinal_or_diagonal_clockwise_from).
    ///
    /// A mismatched `start` is rotated one step counter-clockwise.
    pub fn cardinal_or_diagonal_counter_clockwise_from(
        start: Direction,
        want_cardinal: bool,
    ) -> [Direction; 4] {
        let mut start = start.or_up();
        if start.is_cardinal() != want_cardinal {
            start = start.rotate(-1);
        }
        std::array::from_fn(|i| start.rotate(-2 * i as i32))
    }

    fn or_up(self) -> Self {
        if self == Self::None {
            Self::Up
        } else {
            self
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Up => "Up",
            Self::UpRight => "UpRight",
            Self::Right => "Right",
            Self::DownRight => "DownRight",
            Self::Down => "Down",
            Self::DownLeft => "DownLeft",
            Self::Left => "Left",
            Self::UpLeft => "UpLeft",
        };
        f.write_str(name)
    }
}
