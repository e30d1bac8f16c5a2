//! Geometry contract test helpers.
//!
//! These functions verify the laws the rest of the workspace relies on:
//! metric axioms for [`Distance`], neighbour symmetry for
//! [`AdjacencyRule`], and the rotation cycle of [`Direction`]. Reused
//! across the module test suites.

use crate::adjacency::AdjacencyRule;
use crate::convention::GridConvention;
use crate::direction::Direction;
use crate::distance::Distance;
use crate::grid2d;
use indexmap::IndexSet;
use penumbra_core::Point;

/// Assert that `distance(a, a) == 0.0` for every point of the window.
pub fn assert_distance_reflexive(metric: Distance, extent: usize) {
    for p in grid2d::canonical_ordering_2d(extent, extent) {
        let d = metric.between(p, p);
        assert!(
            (d - 0.0).abs() < f64::EPSILON,
            "{metric:?}: distance({p}, {p}) = {d}, expected 0.0"
        );
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all pairs.
pub fn assert_distance_symmetric(metric: Distance, extent: usize) {
    let cells = grid2d::canonical_ordering_2d(extent, extent);
    for &a in &cells {
        for &b in &cells {
            let dab = metric.between(a, b);
            let dba = metric.between(b, a);
            assert!(
                (dab - dba).abs() < f64::EPSILON,
                "{metric:?}: distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(metric: Distance, extent: usize) {
    let cells = grid2d::canonical_ordering_2d(extent, extent);
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                let dac = metric.between(a, c);
                let dab = metric.between(a, b);
                let dbc = metric.between(b, c);
                assert!(
                    dac <= dab + dbc + 1e-9,
                    "{metric:?}: triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Run all metric checks on an `extent x extent` window.
pub fn run_metric_compliance(metric: Distance, extent: usize) {
    assert_distance_reflexive(metric, extent);
    assert_distance_symmetric(metric, extent);
    assert_distance_triangle_inequality(metric, extent);
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and that
/// no cell lists a neighbour twice.
pub fn assert_neighbours_symmetric(
    rule: AdjacencyRule,
    convention: GridConvention,
    width: usize,
    height: usize,
) {
    for p in grid2d::canonical_ordering_2d(width, height) {
        let ns = rule.neighbours_bounded(p, convention, width, height);
        let unique: IndexSet<_> = ns.iter().collect();
        assert_eq!(unique.len(), ns.len(), "{rule:?}: duplicate neighbours of {p}");
        for nb in ns {
            let back = rule.neighbours_bounded(nb, convention, width, height);
            assert!(
                back.contains(&p),
                "{rule:?}: neighbour symmetry violated: {nb} in N({p}) but {p} not in N({nb})"
            );
        }
    }
}

/// Assert that single clockwise steps visit all eight directions once and
/// that `rotate(1)` and `rotate(-1)` are inverses.
pub fn assert_rotation_cycle() {
    let mut seen = IndexSet::new();
    let mut d = Direction::Up;
    for _ in 0..8 {
        assert!(seen.insert(d), "{d} visited twice");
        assert_eq!(d.rotate(1).rotate(-1), d);
        d = d.rotate(1);
    }
    assert_eq!(d, Direction::Up);
    assert_eq!(seen.len(), 8);
    assert_eq!(Direction::None.rotate(1), Direction::None);
}
