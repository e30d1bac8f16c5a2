//! Recursive symmetric shadow casting over eight octants.

use crate::cone::Cone;
use indexmap::IndexSet;
use penumbra_core::{ArrayView, GridView, Point};
use penumbra_space::{Direction, Distance, GridConvention};

/// Maps octant-local `(delta_x, delta_y)` onto grid offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Octant {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Octant {
    /// The two octants flanking a diagonal `(dx, dy)`.
    pub(crate) const fn pair(dx: i32, dy: i32) -> [Octant; 2] {
        [
            Octant {
                xx: 0,
                xy: dx,
                yx: dy,
                yy: 0,
            },
            Octant {
                xx: dx,
                xy: 0,
                yx: 0,
                yy: dy,
            },
        ]
    }

    fn transform(self, origin: Point, delta_x: i32, delta_y: i32) -> Point {
        Point::new(
            origin.x + delta_x * self.xx + delta_y * self.xy,
            origin.y + delta_x * self.yx + delta_y * self.yy,
        )
    }
}

/// Octants in sweep order for `convention`.
pub(crate) fn octants(convention: GridConvention) -> [Octant; 8] {
    let mut out = [Octant::pair(0, 0)[0]; 8];
    for (i, dir) in Direction::DIAGONALS.into_iter().enumerate() {
        let (dx, dy) = dir.delta(convention);
        let [a, b] = Octant::pair(dx, dy);
        out[2 * i] = a;
        out[2 * i + 1] = b;
    }
    out
}

/// Per-calculation inputs shared by every recursive call.
pub(crate) struct Sweep<'a, M: ?Sized> {
    pub resistance: &'a M,
    pub origin: Point,
    pub radius: f64,
    pub decay: f64,
    pub metric: Distance,
    pub cone: Option<Cone>,
    pub convention: GridConvention,
    pub tolerance: f64,
    pub max_row: i32,
}

impl<M: GridView<f64> + ?Sized> Sweep<'_, M> {
    fn admits(&self, cell: Point) -> bool {
        match self.cone {
            None => true,
            Some(cone) => {
                let bearing = self
                    .convention
                    .angle_degrees(cell.x - self.origin.x, cell.y - self.origin.y);
                cone.contains(bearing, self.tolerance)
            }
        }
    }

    fn is_opaque(&self, cell: Point) -> bool {
        self.resistance.get(cell) >= 1.0
    }
}

/// Sweep one octant from `row` outwards over the slope window `[end, start]`.
pub(crate) fn shadow_cast<M: GridView<f64> + ?Sized>(
    sweep: &Sweep<'_, M>,
    light: &mut ArrayView<f64>,
    lit: &mut IndexSet<Point>,
    row: i32,
    mut start: f64,
    end: f64,
    octant: Octant,
) {
    if start < end {
        return;
    }

    let mut new_start = 0.0;
    let mut blocked = false;
    let mut distance = row;
    while f64::from(distance) <= sweep.radius && distance < sweep.max_row && !blocked {
        let delta_y = -distance;
        for delta_x in -distance..=0 {
            let cell = octant.transform(sweep.origin, delta_x, delta_y);
            let left_slope = (f64::from(delta_x) - 0.5) / (f64::from(delta_y) + 0.5);
            let right_slope = (f64::from(delta_x) + 0.5) / (f64::from(delta_y) - 0.5);

            if !light.contains(cell) || start < right_slope {
                continue;
            }
            if end > left_slope {
                break;
            }

            let d = sweep.metric.calculate(delta_x, delta_y);
            if d <= sweep.radius && sweep.admits(cell) {
                light[cell] = 1.0 - sweep.decay * d;
                lit.insert(cell);
            }

            let opaque = sweep.is_opaque(cell);
            if blocked {
                if opaque {
                    new_start = right_slope;
                    continue;
                }
                blocked = false;
                start = new_start;
            } else if opaque && f64::from(distance) < sweep.radius {
                blocked = true;
                shadow_cast(sweep, light, lit, distance + 1, start, left_slope, octant);
                new_start = right_slope;
            }
        }
        distance += 1;
    }
}
