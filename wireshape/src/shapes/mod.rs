//! Wireframe shape generators
//!
//! Five parametric solids, each generated as an ordered sequence of line
//! segments. Generators are pure: parameters and transform in, segments out
//! through a [`LineSink`]. Every pass recomputes geometry from scratch; there
//! is no caching or state carried between calls.

mod complex;
mod simple;


use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sink::{LineSegment, LineSink, SegmentBuffer};
use crate::transform::Transform;

/// Shape selector with per-kind parameters. Exactly one kind is active per
/// generation pass; the host owns the values and the generators borrow them
/// read-only.
///
/// Segment counts are signed so out-of-contract values can be represented;
/// counts below 1 make the affected generator emit nothing rather than fault
/// (counts below 6 are valid but visibly coarse).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Square-based pyramid: closed base quad plus four edges to the apex
    Pyramid { base_size: f32, height: f32 },
    /// Open tube: bottom ring, top ring, and vertical connecting edges
    Cylinder {
        height: f32,
        radius: f32,
        segments: i32,
    },
    /// Planar quad in the plane perpendicular to +Y
    Rectangle { width: f32, height: f32 },
    /// Latitude/longitude wireframe, `segments` subdividing both axes
    Sphere { radius: f32, segments: i32 },
    /// Cylinder body with latitude-ring hemisphere caps; `height` spans the
    /// body only, the caps extend beyond it
    Capsule {
        radius: f32,
        height: f32,
        segments: i32,
    },
}

impl Shape {
    /// Emit this shape's segments into `sink`, rotated and placed by
    /// `transform`.
    pub fn emit<S: LineSink>(&self, transform: &Transform, sink: &mut S) {
        match *self {
            Shape::Pyramid { base_size, height } => {
                simple::emit_pyramid(base_size, height, transform, sink);
            }
            Shape::Cylinder {
                height,
                radius,
                segments,
            } => {
                complex::emit_cylinder(height, radius, segments, transform, sink);
            }
            Shape::Rectangle { width, height } => {
                simple::emit_rectangle(width, height, transform, sink);
            }
            Shape::Sphere { radius, segments } => {
                complex::emit_sphere(radius, segments, transform, sink);
            }
            Shape::Capsule {
                radius,
                height,
                segments,
            } => {
                complex::emit_capsule(radius, height, segments, transform, sink);
            }
        }
    }

    /// Collect this shape's segments into a fresh `Vec`.
    pub fn segments(&self, transform: &Transform) -> Vec<LineSegment> {
        let mut buffer = SegmentBuffer::default();
        self.emit(transform, &mut buffer);
        buffer.segments
    }
}

/// Rotate both endpoints and forward the pair to the sink. Every generator
/// routes every segment through here; nothing emits raw coordinates.
pub(crate) fn emit_segment<S: LineSink>(
    sink: &mut S,
    start: Vec3,
    end: Vec3,
    transform: &Transform,
) {
    sink.line(transform.apply(start), transform.apply(end));
}

/// Emit a closed polyline: consecutive edges through `points`, then one
/// closing edge from the last point back to the first.
///
/// A ring built with a duplicated seam point therefore ends with a
/// zero-length closing edge; that edge is emitted, not filtered.
pub(crate) fn emit_loop<S: LineSink>(sink: &mut S, points: &[Vec3], transform: &Transform) {
    for pair in points.windows(2) {
        emit_segment(sink, pair[0], pair[1], transform);
    }
    if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
        emit_segment(sink, last, first, transform);
    }
}
