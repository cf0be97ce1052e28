//! Parameter validation
//!
//! Generation never fails — out-of-contract segment counts degrade to
//! emitting nothing, and non-finite dimensions produce non-finite geometry.
//! Hosts that want to reject bad configuration before a pass can call
//! [`Shape::validate`].

use thiserror::Error;

use crate::shapes::Shape;

/// Out-of-contract shape parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{shape}: {name} must be > 0, got {value}")]
    NonPositiveDimension {
        shape: &'static str,
        name: &'static str,
        value: f32,
    },

    #[error("{shape}: {name} must be finite, got {value}")]
    NonFiniteDimension {
        shape: &'static str,
        name: &'static str,
        value: f32,
    },

    #[error("{shape}: segments must be >= 3, got {segments}")]
    TooFewSegments {
        shape: &'static str,
        segments: i32,
    },
}

fn dimension(shape: &'static str, name: &'static str, value: f32) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFiniteDimension { shape, name, value });
    }
    if value <= 0.0 {
        return Err(ShapeError::NonPositiveDimension { shape, name, value });
    }
    Ok(())
}

fn subdivision(shape: &'static str, segments: i32) -> Result<(), ShapeError> {
    if segments < 3 {
        return Err(ShapeError::TooFewSegments { shape, segments });
    }
    Ok(())
}

impl Shape {
    /// Check all parameters against the documented contract: positive, finite
    /// dimensions and segment counts of at least 3.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            Shape::Pyramid { base_size, height } => {
                dimension("pyramid", "base_size", base_size)?;
                dimension("pyramid", "height", height)
            }
            Shape::Cylinder {
                height,
                radius,
                segments,
            } => {
                dimension("cylinder", "height", height)?;
                dimension("cylinder", "radius", radius)?;
                subdivision("cylinder", segments)
            }
            Shape::Rectangle { width, height } => {
                dimension("rectangle", "width", width)?;
                dimension("rectangle", "height", height)
            }
            Shape::Sphere { radius, segments } => {
                dimension("sphere", "radius", radius)?;
                subdivision("sphere", segments)
            }
            Shape::Capsule {
                radius,
                height,
                segments,
            } => {
                dimension("capsule", "radius", radius)?;
                dimension("capsule", "height", height)?;
                subdivision("capsule", segments)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters_pass() {
        let shape = Shape::Capsule {
            radius: 0.5,
            height: 2.0,
            segments: 16,
        };
        assert_eq!(shape.validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let shape = Shape::Sphere {
            radius: 0.0,
            segments: 8,
        };
        assert_eq!(
            shape.validate(),
            Err(ShapeError::NonPositiveDimension {
                shape: "sphere",
                name: "radius",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_non_finite_dimension_rejected() {
        let shape = Shape::Rectangle {
            width: f32::NAN,
            height: 1.0,
        };
        assert!(matches!(
            shape.validate(),
            Err(ShapeError::NonFiniteDimension {
                shape: "rectangle",
                name: "width",
                ..
            })
        ));
    }

    #[test]
    fn test_too_few_segments_rejected() {
        let shape = Shape::Cylinder {
            height: 1.0,
            radius: 1.0,
            segments: 2,
        };
        assert_eq!(
            shape.validate(),
            Err(ShapeError::TooFewSegments {
                shape: "cylinder",
                segments: 2,
            })
        );
    }
}
