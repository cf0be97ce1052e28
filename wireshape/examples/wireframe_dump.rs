//! Generate every shape once and report what a render pass would draw

use glam::Vec3;
use wireshape::{SegmentBuffer, Shape, Transform, draw_shape};

fn main() {
    tracing_subscriber::fmt().init();

    let transform = Transform::new(Vec3::ZERO, Vec3::new(0.0, 30.0, 0.0));
    let shapes = [
        (
            "pyramid",
            Shape::Pyramid {
                base_size: 2.0,
                height: 1.5,
            },
        ),
        (
            "cylinder",
            Shape::Cylinder {
                height: 2.0,
                radius: 0.5,
                segments: 16,
            },
        ),
        (
            "rectangle",
            Shape::Rectangle {
                width: 2.0,
                height: 1.0,
            },
        ),
        (
            "sphere",
            Shape::Sphere {
                radius: 1.0,
                segments: 16,
            },
        ),
        (
            "capsule",
            Shape::Capsule {
                radius: 0.5,
                height: 2.0,
                segments: 16,
            },
        ),
    ];

    let mut sink = SegmentBuffer::default();
    for (name, shape) in shapes {
        if let Err(err) = shape.validate() {
            eprintln!("{name}: invalid parameters: {err}");
            continue;
        }

        draw_shape(&mut sink, &shape, &transform, Some(0xFFFF_FFFF));
        let total: f32 = sink.segments.iter().map(|s| s.length()).sum();
        println!(
            "{name}: {} segments, {total:.2} units of line",
            sink.segments.len()
        );
    }
}
