//! Angular restriction of a field of view.

use crate::error::FovError;

/// An angular wedge centred on a compass bearing.
///
/// Bearings are in degrees, 0° pointing up under the engine's
/// [`GridConvention`](penumbra_space::GridConvention) and increasing
/// clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    angle: f64,
    span: f64,
}

impl Cone {
    /// A cone centred on `angle_degrees` with total width `span_degrees`.
    ///
    /// The angle is wrapped into `[0, 360)`. A span above 360 is clamped to
    /// 360 (the full circle).
    ///
    /// # Errors
    ///
    /// - [`FovError::InvalidConeAngle`] if the angle is NaN or infinite.
    /// - [`FovError::InvalidConeSpan`] if the span is NaN or negative.
    pub fn new(angle_degrees: f64, span_degrees: f64) -> Result<Self, FovError> {
        if !angle_degrees.is_finite() {
            return Err(FovError::InvalidConeAngle {
                value: angle_degrees,
            });
        }
        if span_degrees.is_nan() || span_degrees < 0.0 {
            return Err(FovError::InvalidConeSpan {
                value: span_degrees,
            });
        }
        Ok(Self {
            angle: normalize_degrees(angle_degrees),
            span: span_degrees.min(360.0),
        })
    }

    /// Centre bearing in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Total angular width in `[0, 360]`.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Whether `bearing` lies within the cone, edges inclusive, allowing
    /// `tolerance` degrees of slack.
    pub fn contains(&self, bearing: f64, tolerance: f64) -> bool {
        angular_difference(bearing, self.angle).abs() <= self.span * 0.5 + tolerance
    }
}

/// Wrap an angle into `[0, 360)`.
pub(crate) fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Signed difference `a - b` wrapped into `[-180, 180)`.
pub(crate) fn angular_difference(a: f64, b: f64) -> f64 {
    (a - b + 540.0).rem_euclid(360.0) - 180.0
}
