//! Error types for field-of-view calculation.

use penumbra_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors detected before a field-of-view sweep starts.
///
/// Every variant is a rejected input; a sweep that starts always completes.
#[derive(Clone, Debug, PartialEq)]
pub enum FovError {
    /// The origin lies outside the resistance map.
    OriginOutOfBounds(GridError),
    /// The radius is NaN.
    InvalidRadius {
        /// The rejected value.
        value: f64,
    },
    /// The cone's angular span is NaN or negative.
    InvalidConeSpan {
        /// The rejected value.
        value: f64,
    },
    /// The cone's centre angle is NaN or infinite.
    InvalidConeAngle {
        /// The rejected value.
        value: f64,
    },
    /// An [`FovConfig`](crate::FovConfig) invariant is violated.
    InvalidConfig {
        /// Which invariant.
        reason: String,
    },
    /// The illumination buffer could not be allocated.
    Buffer(GridError),
}

impl fmt::Display for FovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginOutOfBounds(e) => write!(f, "origin out of bounds: {e}"),
            Self::InvalidRadius { value } => write!(f, "radius must not be NaN, got {value}"),
            Self::InvalidConeSpan { value } => {
                write!(f, "cone span must be a non-negative number of degrees, got {value}")
            }
            Self::InvalidConeAngle { value } => {
                write!(f, "cone angle must be finite, got {value}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid fov config: {reason}"),
            Self::Buffer(e) => write!(f, "illumination buffer: {e}"),
        }
    }
}

impl Error for FovError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OriginOutOfBounds(e) | Self::Buffer(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penumbra_core::Point;

    #[test]
    fn origin_error_chains_to_grid_error() {
        let inner = GridError::OutOfBounds {
            point: Point::new(9, 0),
            width: 5,
            height: 5,
        };
        let e = FovError::OriginOutOfBounds(inner.clone());
        assert_eq!(
            e.to_string(),
            "origin out of bounds: point (9, 0) out of bounds: [0, 5) x [0, 5)"
        );
        let src = e.source().unwrap();
        assert_eq!(src.to_string(), inner.to_string());
    }

    #[test]
    fn value_errors_have_no_source() {
        assert!(FovError::InvalidRadius { value: f64::NAN }.source().is_none());
        assert!(FovError::InvalidConeSpan { value: -1.0 }
            .to_string()
            .contains("-1"));
    }
}
