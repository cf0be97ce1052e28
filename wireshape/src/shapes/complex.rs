//! Curved shapes: cylinder, sphere, capsule
//!
//! All three approximate circles with `segments` straight edges. Counts below
//! 1 are soft-rejected (nothing is emitted) so ring angle steps never divide
//! by zero.

use std::f32::consts::TAU;

use glam::Vec3;
use tracing::warn;

use crate::sink::LineSink;
use crate::transform::Transform;

use super::{emit_loop, emit_segment};

/// Point on the circle of `radius` around `center`, at `angle` radians from
/// the +X axis, in the plane perpendicular to +Y.
fn ring_point(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Emit a cylinder wireframe: per ring index one bottom-ring edge, the
/// matching top-ring edge, and the vertical edge between the rings. Exactly
/// `3 * segments` edges total.
///
/// Ring closure is modular (the last edge wraps to index 0), so there is no
/// duplicate seam edge.
pub(super) fn emit_cylinder<S: LineSink>(
    height: f32,
    radius: f32,
    segments: i32,
    transform: &Transform,
    sink: &mut S,
) {
    if segments < 1 {
        warn!("emit_cylinder: segments must be >= 1 (got {segments}), emitting nothing");
        return;
    }

    let half_height = Vec3::new(0.0, height * 0.5, 0.0);
    let bottom_center = transform.center - half_height;
    let top_center = transform.center + half_height;
    let step = TAU / segments as f32;

    for i in 0..segments {
        let angle = i as f32 * step;
        let next_angle = ((i + 1) % segments) as f32 * step;

        emit_segment(
            sink,
            ring_point(bottom_center, radius, angle),
            ring_point(bottom_center, radius, next_angle),
            transform,
        );
        emit_segment(
            sink,
            ring_point(top_center, radius, angle),
            ring_point(top_center, radius, next_angle),
            transform,
        );
        emit_segment(
            sink,
            ring_point(bottom_center, radius, angle),
            ring_point(top_center, radius, angle),
            transform,
        );
    }
}

/// Emit a latitude/longitude sphere wireframe with `segments` subdividing
/// both axes.
///
/// Latitude rings run pole to pole inclusive and are built with a duplicated
/// seam point, so each ring closes through [`emit_loop`] with `segments + 1`
/// edges, the last one zero-length at the seam. The longitude pass stops one
/// short of the seam so that meridian is drawn exactly once. Pole rings
/// collapse to zero radius and still emit their edges.
pub(super) fn emit_sphere<S: LineSink>(
    radius: f32,
    segments: i32,
    transform: &Transform,
    sink: &mut S,
) {
    if segments < 1 {
        warn!("emit_sphere: segments must be >= 1 (got {segments}), emitting nothing");
        return;
    }

    let center = transform.center;
    let lat_segments = segments;
    let lon_segments = segments;

    let latitude = |i: i32| (-90.0 + 180.0 * i as f32 / lat_segments as f32).to_radians();
    let longitude = |j: i32| TAU * j as f32 / lon_segments as f32;

    // Latitude pass: one closed ring per latitude step, poles included
    let mut ring = Vec::with_capacity(lon_segments as usize + 1);
    for i in 0..=lat_segments {
        let lat = latitude(i);
        let ring_radius = lat.cos() * radius;
        let ring_center = center + Vec3::new(0.0, lat.sin() * radius, 0.0);

        ring.clear();
        for j in 0..=lon_segments {
            ring.push(ring_point(ring_center, ring_radius, longitude(j)));
        }
        emit_loop(sink, &ring, transform);
    }

    // Longitude pass: `lon_segments` meridians, seam drawn once
    let mut meridian = Vec::with_capacity(lat_segments as usize + 1);
    for j in 0..lon_segments {
        let angle = longitude(j);

        meridian.clear();
        for i in 0..=lat_segments {
            let lat = latitude(i);
            let ring_radius = lat.cos() * radius;
            let ring_center = center + Vec3::new(0.0, lat.sin() * radius, 0.0);
            meridian.push(ring_point(ring_center, ring_radius, angle));
        }
        emit_loop(sink, &meridian, transform);
    }
}

/// Emit a capsule wireframe: a cylinder body whose ring centers sit at
/// `±height/2`, plus hemisphere caps built from latitude rings only — no
/// meridians on the caps. The caps extend beyond the body ring centers, so
/// the capsule's total extent exceeds `height`.
///
/// Cap subdivision is `segments / 2` latitude steps with integer truncation;
/// odd counts get one ring fewer than the fractional division would give.
pub(super) fn emit_capsule<S: LineSink>(
    radius: f32,
    height: f32,
    segments: i32,
    transform: &Transform,
    sink: &mut S,
) {
    if segments < 1 {
        warn!("emit_capsule: segments must be >= 1 (got {segments}), emitting nothing");
        return;
    }

    // Body, same edge rule as the cylinder
    emit_cylinder(height, radius, segments, transform, sink);

    let hemi_steps = segments / 2;
    if hemi_steps < 1 {
        warn!("emit_capsule: segments < 2 leaves no cap subdivision, skipping caps");
        return;
    }

    let half_height = Vec3::new(0.0, height * 0.5, 0.0);
    let top_center = transform.center + half_height;
    let bottom_center = transform.center - half_height;

    let mut ring = Vec::with_capacity(segments as usize + 1);
    for (cap_center, direction) in [(top_center, 1.0f32), (bottom_center, -1.0f32)] {
        for i in 0..=hemi_steps {
            let lat = (90.0 * i as f32 / hemi_steps as f32).to_radians();
            let ring_radius = lat.cos() * radius;
            let ring_center = cap_center + Vec3::new(0.0, direction * lat.sin() * radius, 0.0);

            ring.clear();
            for j in 0..=segments {
                ring.push(ring_point(ring_center, ring_radius, TAU * j as f32 / segments as f32));
            }
            emit_loop(sink, &ring, transform);
        }
    }
}
