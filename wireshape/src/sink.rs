//! Line emission sink
//!
//! Generators never draw. They stream transformed endpoint pairs into a
//! caller-supplied [`LineSink`]; the host decides what a batch means (an
//! immediate-mode draw bracket, a vertex buffer upload, a test buffer).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use tracing::trace;

use crate::shapes::Shape;
use crate::transform::Transform;

/// One wireframe edge: an ordered pair of 3D endpoints.
///
/// Plain vertex data (`Pod`), so a host can upload a `&[LineSegment]` slice
/// directly as a line-list vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Edge length; degenerate seam-closing edges report 0.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Consumer of generated line geometry.
///
/// Calls arrive in strict `begin_batch` → `line`* → `end_batch` order, at
/// most once per generation pass. `color` is packed RGBA8 (`0xRRGGBBAA`) and
/// is only forwarded to the renderer, never interpreted here.
pub trait LineSink {
    fn begin_batch(&mut self, color: u32);
    fn line(&mut self, start: Vec3, end: Vec3);
    fn end_batch(&mut self);
}

/// Sink that collects a pass into memory, for tests and hosts that buffer
/// geometry before drawing.
#[derive(Clone, Debug, Default)]
pub struct SegmentBuffer {
    pub segments: Vec<LineSegment>,
    /// Color of the most recent batch, if one was begun
    pub color: Option<u32>,
}

impl LineSink for SegmentBuffer {
    fn begin_batch(&mut self, color: u32) {
        self.segments.clear();
        self.color = Some(color);
    }

    fn line(&mut self, start: Vec3, end: Vec3) {
        self.segments.push(LineSegment::new(start, end));
    }

    fn end_batch(&mut self) {}
}

/// Run one generation-and-draw pass.
///
/// `color` is the active material for the batch. When it is absent the whole
/// pass is skipped; that is a deliberate short-circuit, not an error.
/// Otherwise all segments of the pass are wrapped in exactly one
/// `begin_batch`/`end_batch` pair — partial batches are never flushed.
pub fn draw_shape<S: LineSink>(
    sink: &mut S,
    shape: &Shape,
    transform: &Transform,
    color: Option<u32>,
) {
    let Some(color) = color else {
        trace!("draw_shape: no active color, skipping pass");
        return;
    };

    sink.begin_batch(color);
    shape.emit(transform, sink);
    sink.end_batch();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records the call sequence, to check batch bracketing
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<Event>,
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Begin(u32),
        Line,
        End,
    }

    impl LineSink for RecordingSink {
        fn begin_batch(&mut self, color: u32) {
            self.events.push(Event::Begin(color));
        }

        fn line(&mut self, _start: Vec3, _end: Vec3) {
            self.events.push(Event::Line);
        }

        fn end_batch(&mut self) {
            self.events.push(Event::End);
        }
    }

    #[test]
    fn test_draw_shape_brackets_one_batch() {
        let mut sink = RecordingSink::default();
        let shape = Shape::Rectangle {
            width: 2.0,
            height: 1.0,
        };

        draw_shape(&mut sink, &shape, &Transform::default(), Some(0xFF00FFFF));

        assert_eq!(sink.events.first(), Some(&Event::Begin(0xFF00FFFF)));
        assert_eq!(sink.events.last(), Some(&Event::End));
        let lines = sink
            .events
            .iter()
            .filter(|e| matches!(e, Event::Line))
            .count();
        assert_eq!(lines, 4);
        assert_eq!(sink.events.len(), lines + 2, "exactly one begin/end pair");
    }

    #[test]
    fn test_draw_shape_skips_pass_without_color() {
        let mut sink = RecordingSink::default();
        let shape = Shape::Sphere {
            radius: 1.0,
            segments: 8,
        };

        draw_shape(&mut sink, &shape, &Transform::default(), None);

        assert!(sink.events.is_empty(), "no partial batch without a color");
    }

    #[test]
    fn test_segment_buffer_resets_per_batch() {
        let mut sink = SegmentBuffer::default();
        let shape = Shape::Rectangle {
            width: 1.0,
            height: 1.0,
        };

        draw_shape(&mut sink, &shape, &Transform::default(), Some(0xFFFFFFFF));
        assert_eq!(sink.segments.len(), 4);
        assert_eq!(sink.color, Some(0xFFFFFFFF));

        // A second pass replaces the previous batch, it does not append
        draw_shape(&mut sink, &shape, &Transform::default(), Some(0x00FF00FF));
        assert_eq!(sink.segments.len(), 4);
        assert_eq!(sink.color, Some(0x00FF00FF));
    }

    #[test]
    fn test_segment_length() {
        let segment = LineSegment::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert!((segment.length() - 5.0).abs() < 1e-6);
        assert_eq!(LineSegment::new(Vec3::ONE, Vec3::ONE).length(), 0.0);
    }
}
