//! The field-of-view engine.

use crate::cone::Cone;
use crate::config::FovConfig;
use crate::error::FovError;
use crate::shadowcast::{octants, shadow_cast, Sweep};
use indexmap::IndexSet;
use penumbra_core::{check_bounds, ArrayView, GridView, Point};
use penumbra_space::Radius;

/// Reusable field-of-view calculator.
///
/// Owns the illumination buffer and the sets of lit positions from the
/// latest and the previous calculation. The buffer is reused while the
/// resistance map keeps its dimensions and reallocated when they change.
///
/// Each `calculate*` call takes `&mut self`, so one engine serves one
/// caller at a time; separate engines are independent.
#[derive(Clone, Debug, Default)]
pub struct Fov {
    config: FovConfig,
    light: Option<ArrayView<f64>>,
    current: IndexSet<Point>,
    previous: IndexSet<Point>,
}

impl Fov {
    /// Engine with the default [`FovConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FovError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: FovConfig) -> Result<Self, FovError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &FovConfig {
        &self.config
    }

    /// Compute illumination from `origin` out to `radius` under `shape`.
    ///
    /// Cells with resistance `>= 1` block sight but are themselves lit when
    /// reached. Brightness is `1 - d / (radius + 1)` for metric distance
    /// `d <= radius` and 0 elsewhere; the origin is always 1.
    ///
    /// A radius below 1 is treated as 1.
    ///
    /// # Errors
    ///
    /// - [`FovError::OriginOutOfBounds`] if `origin` is outside the map.
    /// - [`FovError::InvalidRadius`] if `radius` is NaN.
    pub fn calculate<M: GridView<f64> + ?Sized>(
        &mut self,
        resistance: &M,
        origin: Point,
        radius: f64,
        shape: Radius,
    ) -> Result<&ArrayView<f64>, FovError> {
        self.run(resistance, origin, radius, shape, None)
    }

    /// Compute illumination with no distance limit.
    ///
    /// Every reachable cell has brightness 1.
    pub fn calculate_unbounded<M: GridView<f64> + ?Sized>(
        &mut self,
        resistance: &M,
        origin: Point,
    ) -> Result<&ArrayView<f64>, FovError> {
        self.run(resistance, origin, f64::INFINITY, Radius::Circle, None)
    }

    /// Like [`calculate`](Self::calculate), but only cells whose bearing from
    /// `origin` lies within `span_degrees / 2` of `angle_degrees` are lit.
    ///
    /// Bearings are measured clockwise from up under the configured
    /// [`GridConvention`](penumbra_space::GridConvention). Cone edges are
    /// inclusive. The cone does not change what blocks sight, so a span of
    /// 360 produces exactly the result of [`calculate`](Self::calculate).
    ///
    /// # Errors
    ///
    /// Those of [`calculate`](Self::calculate), plus
    /// [`FovError::InvalidConeAngle`] and [`FovError::InvalidConeSpan`].
    pub fn calculate_cone<M: GridView<f64> + ?Sized>(
        &mut self,
        resistance: &M,
        origin: Point,
        radius: f64,
        shape: Radius,
        angle_degrees: f64,
        span_degrees: f64,
    ) -> Result<&ArrayView<f64>, FovError> {
        let cone = Cone::new(angle_degrees, span_degrees)?;
        self.run(resistance, origin, radius, shape, Some(cone))
    }

    fn run<M: GridView<f64> + ?Sized>(
        &mut self,
        resistance: &M,
        origin: Point,
        radius: f64,
        shape: Radius,
        cone: Option<Cone>,
    ) -> Result<&ArrayView<f64>, FovError> {
        let (width, height) = (resistance.width(), resistance.height());
        check_bounds(origin, width, height).map_err(FovError::OriginOutOfBounds)?;
        if radius.is_nan() {
            return Err(FovError::InvalidRadius { value: radius });
        }
        let radius = if radius < 1.0 {
            log::debug!("fov radius {radius} below 1, clamping to 1");
            1.0
        } else {
            radius
        };

        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();

        let convention = self.config.convention;
        let sweep = Sweep {
            resistance,
            origin,
            radius,
            decay: 1.0 / (radius + 1.0),
            metric: shape.distance(),
            cone,
            convention,
            tolerance: self.config.cone_tolerance_degrees,
            max_row: i32::try_from(width + height).unwrap_or(i32::MAX),
        };

        let light = prepare_buffer(&mut self.light, width, height)?;
        light[origin] = 1.0;
        self.current.insert(origin);
        for octant in octants(convention) {
            shadow_cast(&sweep, light, &mut self.current, 1, 1.0, 0.0, octant);
        }

        log::trace!(
            "fov from {origin} radius {radius} {shape:?}: {} cells lit",
            self.current.len()
        );
        Ok(light)
    }

    /// Illumination map of the latest calculation, if any.
    pub fn light(&self) -> Option<&ArrayView<f64>> {
        self.light.as_ref()
    }

    /// Brightness at `point` in `[0, 1]`. Zero before the first calculation
    /// and outside the map.
    pub fn brightness(&self, point: Point) -> f64 {
        self.light
            .as_ref()
            .and_then(|l| l.get_checked(point))
            .unwrap_or(0.0)
    }

    /// Whether `point` was lit by the latest calculation.
    pub fn is_visible(&self, point: Point) -> bool {
        self.brightness(point) > 0.0
    }

    /// Positions lit by the latest calculation, origin first.
    pub fn current_fov(&self) -> &IndexSet<Point> {
        &self.current
    }

    /// Positions lit now but not by the calculation before.
    pub fn newly_seen(&self) -> impl Iterator<Item = Point> + '_ {
        self.current.difference(&self.previous).copied()
    }

    /// Positions lit by the calculation before but not now.
    pub fn newly_unseen(&self) -> impl Iterator<Item = Point> + '_ {
        self.previous.difference(&self.current).copied()
    }

    /// Drop the buffer and forget both calculations.
    pub fn reset(&mut self) {
        self.light = None;
        self.current.clear();
        self.previous.clear();
    }
}

/// Zero the buffer in `slot`, reallocating when the dimensions differ.
fn prepare_buffer(
    slot: &mut Option<ArrayView<f64>>,
    width: usize,
    height: usize,
) -> Result<&mut ArrayView<f64>, FovError> {
    let fresh = match slot.take() {
        Some(mut buf) if buf.dimensions() == (width, height) => {
            buf.fill(0.0);
            buf
        }
        old => {
            log::debug!(
                "fov buffer reallocated: {:?} -> {width}x{height}",
                old.map(|b| b.dimensions())
            );
            ArrayView::filled(width, height, 0.0).map_err(FovError::Buffer)?
        }
    };
    Ok(slot.insert(fresh))
}
