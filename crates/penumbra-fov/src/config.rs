//! Field-of-view configuration.

use crate::error::FovError;
use penumbra_space::GridConvention;

/// Configuration for a [`Fov`](crate::Fov) engine.
///
/// Validated when the engine is built; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FovConfig {
    /// Coordinate convention. Decides which way a cone's 0° points and how
    /// octant transforms are derived from the diagonal directions.
    ///
    /// Default: [`GridConvention::Y_DOWN`].
    pub convention: GridConvention,

    /// Slack, in degrees, added to half the cone span when testing whether
    /// a cell's bearing lies inside a cone. Absorbs floating-point error in
    /// the bearing computation so that cells exactly on a cone edge (or on
    /// the ray of a zero-width cone) are lit.
    ///
    /// Default: `1e-9`. Must be finite and non-negative.
    pub cone_tolerance_degrees: f64,
}

impl FovConfig {
    /// Default cone edge tolerance.
    pub const DEFAULT_CONE_TOLERANCE: f64 = 1e-9;

    /// Config with the given convention and default tolerance.
    pub fn new(convention: GridConvention) -> Self {
        Self {
            convention,
            cone_tolerance_degrees: Self::DEFAULT_CONE_TOLERANCE,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), FovError> {
        let tol = self.cone_tolerance_degrees;
        if !tol.is_finite() || tol < 0.0 {
            return Err(FovError::InvalidConfig {
                reason: format!("cone_tolerance_degrees must be finite and >= 0, got {tol}"),
            });
        }
        Ok(())
    }
}

impl Default for FovConfig {
    fn default() -> Self {
        Self::new(GridConvention::default())
    }
}
