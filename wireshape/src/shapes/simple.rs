//! Planar and faceted shapes: rectangle, pyramid

use glam::Vec3;

use crate::sink::LineSink;
use crate::transform::Transform;

use super::{emit_loop, emit_segment};

/// Emit the 4 edges of a planar rectangle centered on the transform's center,
/// lying in the plane perpendicular to +Y.
///
/// `height` here is the rectangle's own second in-plane extent, not the
/// common vertical axis.
pub(super) fn emit_rectangle<S: LineSink>(
    width: f32,
    height: f32,
    transform: &Transform,
    sink: &mut S,
) {
    let center = transform.center;
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    let corners = [
        center + Vec3::new(-half_w, 0.0, -half_h),
        center + Vec3::new(half_w, 0.0, -half_h),
        center + Vec3::new(half_w, 0.0, half_h),
        center + Vec3::new(-half_w, 0.0, half_h),
    ];
    emit_loop(sink, &corners, transform);
}

/// Emit the 8 edges of a square-based pyramid: the closed base quad in corner
/// order, then one edge from each base corner to the apex at `height` above
/// the center.
///
/// `height = 0` collapses the apex onto the base plane; the flattened shape
/// is still emitted.
pub(super) fn emit_pyramid<S: LineSink>(
    base_size: f32,
    height: f32,
    transform: &Transform,
    sink: &mut S,
) {
    let center = transform.center;
    let half = base_size * 0.5;

    let corners = [
        center + Vec3::new(-half, 0.0, -half),
        center + Vec3::new(half, 0.0, -half),
        center + Vec3::new(half, 0.0, half),
        center + Vec3::new(-half, 0.0, half),
    ];
    let apex = center + Vec3::new(0.0, height, 0.0);

    emit_loop(sink, &corners, transform);
    for corner in corners {
        emit_segment(sink, corner, apex, transform);
    }
}
