//! End-to-end field-of-view scenarios.

use penumbra_core::{ArrayView, Point};
use penumbra_fov::{Fov, FovConfig, FovError};
use penumbra_space::{Distance, GridConvention, Radius};
use penumbra_test_utils::fixtures::{
    map_from_ascii, mirror_point_x, mirror_x, open_map, random_map, render_light,
};
use penumbra_test_utils::CountingView;
use proptest::prelude::*;

const EPS: f64 = 1e-12;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn lit_set(fov: &Fov) -> Vec<Point> {
    let mut v: Vec<Point> = fov.current_fov().iter().copied().collect();
    v.sort();
    v
}

// ── Concrete scenarios ──────────────────────────────────────────

#[test]
fn open_five_by_five_circle() {
    let map = open_map(5, 5);
    let mut fov = Fov::new();
    let light = fov
        .calculate(&map, Point::new(2, 2), 2.0, Radius::Circle)
        .unwrap();

    assert_eq!(light[Point::new(2, 2)], 1.0);
    assert!(approx(light[Point::new(2, 3)], 1.0 - 1.0 / 3.0));
    assert!(approx(light[Point::new(2, 4)], 1.0 - 2.0 / 3.0));
    for corner in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        assert_eq!(light[Point::from(corner)], 0.0, "corner {corner:?}");
    }
}

#[test]
fn wall_shadows_the_cell_directly_behind_it() {
    let mut map = open_map(5, 5);
    map[Point::new(2, 3)] = 1.0;
    let mut fov = Fov::new();

    let light = fov
        .calculate(&map, Point::new(2, 2), 2.0, Radius::Circle)
        .unwrap();
    assert_eq!(light[Point::new(2, 4)], 0.0);
    assert!(light[Point::new(2, 3)] > 0.0, "the wall itself is lit");

    // (1, 4) and (3, 4) sit at distance sqrt(5), so they need radius 3.
    let light = fov
        .calculate(&map, Point::new(2, 2), 3.0, Radius::Circle)
        .unwrap();
    assert_eq!(light[Point::new(2, 4)], 0.0);
    assert!(light[Point::new(1, 4)] > 0.0);
    assert!(light[Point::new(3, 4)] > 0.0);
}

#[test]
fn diagonal_wall_shadows_the_diagonal_only() {
    let mut map = open_map(7, 7);
    map[Point::new(3, 3)] = 1.0;
    let mut fov = Fov::new();
    let light = fov
        .calculate(&map, Point::new(2, 2), 3.0, Radius::Circle)
        .unwrap();
    assert_eq!(light[Point::new(4, 4)], 0.0);
    assert!(light[Point::new(4, 3)] > 0.0);
    assert!(light[Point::new(3, 4)] > 0.0);
}

#[test]
fn corridor_from_ascii() {
    let m = map_from_ascii(&[
        "#######",
        "#@....#",
        "###.###",
        "###.###",
    ]);
    let origin = m.origin.unwrap();
    let mut fov = Fov::new();
    let light = fov.calculate_unbounded(&m.resistance, origin).unwrap();
    let picture = render_light(light);

    assert!(fov.is_visible(Point::new(5, 1)), "\n{picture}");
    assert!(fov.is_visible(Point::new(0, 1)), "\n{picture}");
    // Around the corner of the side passage.
    assert!(!fov.is_visible(Point::new(3, 3)), "\n{picture}");
}

#[test]
fn fractional_resistance_does_not_block() {
    let mut map = open_map(5, 1);
    map[Point::new(2, 0)] = 0.99;
    let mut fov = Fov::new();
    fov.calculate(&map, Point::new(0, 0), 4.0, Radius::Square)
        .unwrap();
    assert!(fov.is_visible(Point::new(4, 0)));

    map[Point::new(2, 0)] = 1.0;
    fov.calculate(&map, Point::new(0, 0), 4.0, Radius::Square)
        .unwrap();
    assert!(fov.is_visible(Point::new(2, 0)));
    assert!(!fov.is_visible(Point::new(3, 0)));
}

// ── Radius and falloff ──────────────────────────────────────────

#[test]
fn open_ground_matches_linear_falloff() {
    let map = open_map(13, 13);
    let origin = Point::new(6, 6);
    for shape in [Radius::Square, Radius::Diamond, Radius::Circle] {
        for radius in [1.0, 2.5, 4.0] {
            let mut fov = Fov::new();
            let light = fov.calculate(&map, origin, radius, shape).unwrap();
            let metric = shape.distance();
            for (p, &b) in light.iter() {
                let d = metric.between(origin, p);
                let expected = if d <= radius {
                    1.0 - d / (radius + 1.0)
                } else {
                    0.0
                };
                assert!(approx(b, expected), "{shape:?} r={radius} at {p}: {b} != {expected}");
            }
        }
    }
}

#[test]
fn boundary_is_inclusive() {
    let map = open_map(11, 11);
    let origin = Point::new(5, 5);
    let mut fov = Fov::new();

    fov.calculate(&map, origin, 3.0, Radius::Square).unwrap();
    assert!(approx(fov.brightness(Point::new(8, 8)), 0.25));
    assert_eq!(fov.brightness(Point::new(9, 5)), 0.0);

    fov.calculate(&map, origin, 3.0, Radius::Diamond).unwrap();
    assert!(fov.is_visible(Point::new(7, 6)));
    assert!(!fov.is_visible(Point::new(7, 7)));

    fov.calculate(&map, origin, 3.0, Radius::Circle).unwrap();
    assert!(fov.is_visible(Point::new(8, 5)));
    assert!(!fov.is_visible(Point::new(8, 6)));
}

#[test]
fn falloff_is_monotonic_along_a_ray() {
    let map = open_map(20, 3);
    let mut fov = Fov::new();
    let light = fov
        .calculate(&map, Point::new(0, 1), 15.0, Radius::Circle)
        .unwrap();
    let ray: Vec<f64> = (0..20).map(|x| light[Point::new(x, 1)]).collect();
    assert!(ray.windows(2).all(|w| w[0] >= w[1]), "{ray:?}");
    assert!(ray[15] > 0.0);
    assert_eq!(ray[16], 0.0);
}

#[test]
fn reads_stay_inside_the_radius() {
    let map = CountingView::new(open_map(50, 50));
    let mut fov = Fov::new();
    fov.calculate(&map, Point::new(25, 25), 2.0, Radius::Square)
        .unwrap();
    // Eight octants, rows 1 and 2 hold 2 and 3 cells.
    assert!(map.reads() > 0);
    assert!(map.reads() <= 8 * (2 + 3), "{} reads", map.reads());
}

// ── Cones ───────────────────────────────────────────────────────

#[test]
fn zero_span_cone_lights_a_single_ray() {
    let map = open_map(11, 11);
    let origin = Point::new(5, 5);
    let mut fov = Fov::new();

    fov.calculate_cone(&map, origin, 4.0, Radius::Circle, 90.0, 0.0)
        .unwrap();
    let expected: Vec<Point> = (5..=9).map(|x| Point::new(x, 5)).collect();
    assert_eq!(lit_set(&fov), expected);

    fov.calculate_cone(&map, origin, 4.0, Radius::Circle, 45.0, 0.0)
        .unwrap();
    assert_eq!(
        lit_set(&fov),
        vec![Point::new(5, 5), Point::new(6, 4), Point::new(7, 3)]
    );
}

#[test]
fn cone_always_lights_its_origin() {
    let map = open_map(5, 5);
    let mut fov = Fov::new();
    let light = fov
        .calculate_cone(&map, Point::new(0, 0), 3.0, Radius::Circle, 270.0, 10.0)
        .unwrap();
    assert_eq!(light[Point::new(0, 0)], 1.0);
    assert_eq!(fov.current_fov().len(), 1);
}

#[test]
fn quarter_cone_stays_in_its_quadrant() {
    let map = open_map(9, 9);
    let origin = Point::new(4, 4);
    let mut fov = Fov::new();
    fov.calculate_cone(&map, origin, 4.0, Radius::Square, 45.0, 90.0)
        .unwrap();
    for p in fov.current_fov() {
        assert!(p.x >= origin.x && p.y <= origin.y, "{p} outside up-right quadrant");
    }
    // Both edges are inclusive.
    assert!(fov.is_visible(Point::new(4, 0)));
    assert!(fov.is_visible(Point::new(8, 4)));
}

#[test]
fn cone_rejects_bad_arguments() {
    let map = open_map(3, 3);
    let mut fov = Fov::new();
    let origin = Point::new(1, 1);
    assert!(matches!(
        fov.calculate_cone(&map, origin, 1.0, Radius::Circle, f64::NAN, 10.0),
        Err(FovError::InvalidConeAngle { .. })
    ));
    assert!(matches!(
        fov.calculate_cone(&map, origin, 1.0, Radius::Circle, 0.0, f64::NAN),
        Err(FovError::InvalidConeSpan { .. })
    ));
    assert!(fov
        .calculate_cone(&map, origin, 1.0, Radius::Circle, -45.0, 720.0)
        .is_ok());
}

#[test]
fn y_up_cone_points_the_other_way() {
    let map = open_map(7, 7);
    let origin = Point::new(3, 3);
    let mut fov = Fov::with_config(FovConfig::new(GridConvention::Y_UP)).unwrap();
    fov.calculate_cone(&map, origin, 3.0, Radius::Circle, 0.0, 0.0)
        .unwrap();
    assert_eq!(
        lit_set(&fov),
        vec![
            Point::new(3, 3),
            Point::new(3, 4),
            Point::new(3, 5),
            Point::new(3, 6)
        ]
    );
}

// ── Errors ──────────────────────────────────────────────────────

#[test]
fn origin_must_be_on_the_map() {
    let map = open_map(4, 4);
    let mut fov = Fov::new();
    for origin in [Point::new(-1, 0), Point::new(0, 4), Point::new(4, 4)] {
        let err = fov
            .calculate(&map, origin, 2.0, Radius::Circle)
            .unwrap_err();
        assert!(matches!(err, FovError::OriginOutOfBounds(_)), "{origin}");
        assert!(std::error::Error::source(&err).is_some());
    }
}

#[test]
fn degenerate_radius_behaves_like_one() {
    let map = open_map(5, 5);
    let origin = Point::new(2, 2);
    let mut a = Fov::new();
    let mut b = Fov::new();
    let reference = a
        .calculate(&map, origin, 1.0, Radius::Circle)
        .unwrap()
        .clone();
    for r in [0.0, -3.0, 0.5, f64::NEG_INFINITY] {
        assert_eq!(b.calculate(&map, origin, r, Radius::Circle).unwrap(), &reference, "r={r}");
    }
}

// ── Properties ──────────────────────────────────────────────────

fn scene() -> impl Strategy<Value = (ArrayView<f64>, Point)> {
    (3usize..14, 3usize..14, 0.0f64..0.45, any::<u64>(), any::<u16>(), any::<u16>()).prop_map(
        |(w, h, density, seed, ox, oy)| {
            let map = random_map(w, h, density, seed);
            let origin = Point::new(ox as i32 % w as i32, oy as i32 % h as i32);
            (map, origin)
        },
    )
}

fn shape() -> impl Strategy<Value = Radius> {
    prop_oneof![
        Just(Radius::Square),
        Just(Radius::Diamond),
        Just(Radius::Circle)
    ]
}

proptest! {
    #[test]
    fn origin_is_always_lit((map, origin) in scene(), radius in 0.0f64..20.0, shape in shape()) {
        let mut fov = Fov::new();
        let light = fov.calculate(&map, origin, radius, shape).unwrap();
        prop_assert_eq!(light[origin], 1.0);
    }

    #[test]
    fn visibility_agrees_with_lit_set((map, origin) in scene(), radius in 1.0f64..20.0, shape in shape()) {
        let mut fov = Fov::new();
        fov.calculate(&map, origin, radius, shape).unwrap();
        let light = fov.light().unwrap();
        for (p, &b) in light.iter() {
            prop_assert!((0.0..=1.0).contains(&b));
            prop_assert_eq!(b > 0.0, fov.current_fov().contains(&p));
        }
    }

    #[test]
    fn mirror_symmetric((map, origin) in scene(), radius in 1.0f64..12.0, shape in shape()) {
        let width = map.width();
        let mirrored = mirror_x(&map);
        let mut a = Fov::new();
        let mut b = Fov::new();
        let la = a.calculate(&map, origin, radius, shape).unwrap();
        let lb = b.calculate(&mirrored, mirror_point_x(origin, width), radius, shape).unwrap();
        prop_assert_eq!(la, &mirror_x(lb));
    }

    #[test]
    fn full_cone_equals_plain((map, origin) in scene(), radius in 1.0f64..12.0, angle in -720.0f64..720.0) {
        let mut a = Fov::new();
        let mut b = Fov::new();
        let plain = a.calculate(&map, origin, radius, Radius::Circle).unwrap();
        let cone = b.calculate_cone(&map, origin, radius, Radius::Circle, angle, 360.0).unwrap();
        prop_assert_eq!(plain, cone);
    }

    #[test]
    fn repeated_calls_are_bit_identical((map, origin) in scene(), radius in 1.0f64..12.0, shape in shape()) {
        let mut fov = Fov::new();
        let first = fov.calculate(&map, origin, radius, shape).unwrap().clone();
        let second = fov.calculate(&map, origin, radius, shape).unwrap();
        prop_assert_eq!(&first, second);
        prop_assert_eq!(fov.newly_seen().count(), 0);
    }

    #[test]
    fn convention_does_not_change_plain_fov((map, origin) in scene(), radius in 1.0f64..12.0) {
        let mut down = Fov::new();
        let mut up = Fov::with_config(FovConfig::new(GridConvention::Y_UP)).unwrap();
        let a = down.calculate(&map, origin, radius, Radius::Circle).unwrap();
        let b = up.calculate(&map, origin, radius, Radius::Circle).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn lit_cells_are_within_radius((map, origin) in scene(), radius in 1.0f64..12.0) {
        let mut fov = Fov::new();
        fov.calculate(&map, origin, radius, Radius::Diamond).unwrap();
        for &p in fov.current_fov() {
            prop_assert!(Distance::Manhattan.between(origin, p) <= radius);
        }
    }
}
