//! Wireframe line generation for parametric debug shapes
//!
//! Generates wireframe line geometry for five parametric solids (pyramid,
//! cylinder, rectangle, sphere, capsule) as ordered pairs of 3D endpoints,
//! ready for a host line renderer. Shapes are generated around a center point
//! and rotated by Euler angles; every pass recomputes from scratch, so there
//! is no geometry state to invalidate.
//!
//! The host provides a [`LineSink`] and brackets each generation pass with
//! [`draw_shape`], or collects segments directly with [`Shape::segments`].
//!
//! # Example
//! ```
//! use glam::Vec3;
//! use wireshape::{draw_shape, SegmentBuffer, Shape, Transform};
//!
//! let shape = Shape::Sphere { radius: 1.0, segments: 16 };
//! let transform = Transform::new(Vec3::ZERO, Vec3::new(0.0, 45.0, 0.0));
//!
//! let mut sink = SegmentBuffer::default();
//! draw_shape(&mut sink, &shape, &transform, Some(0xFFFF_FFFF));
//! assert!(!sink.segments.is_empty());
//! ```

mod error;
mod shapes;
mod sink;
mod transform;

pub use error::ShapeError;
pub use shapes::Shape;
pub use sink::{LineSegment, LineSink, SegmentBuffer, draw_shape};
pub use transform::{Transform, rotate_point};
