// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a figure renders into.
//!
//! `pixchart` never rasterizes anything itself. A [`Figure`](crate::Figure)
//! resolves every primitive to absolute pixel coordinates and hands it to a
//! [`Canvas`]; backends (a software rasterizer, an SVG writer, a GPU scene
//! builder) only have to paint.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use pixchart_text::{TextRotation, TextStyle};

/// Horizontal anchoring of a [`TextRun`] relative to its origin.
///
/// Text is always vertically centered on the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The origin is the start of the line.
    Start,
    /// The origin is the middle of the line.
    #[default]
    Middle,
    /// The origin is the end of the line.
    End,
}

/// A single line of text ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The string.
    pub text: String,
    /// Anchor point in canvas pixels.
    pub origin: Point,
    /// Horizontal anchoring along the (possibly rotated) baseline.
    pub anchor: TextAnchor,
    /// Font inputs.
    pub style: TextStyle,
    /// Fill color.
    pub color: Color,
    /// Orientation.
    pub rotation: TextRotation,
}

impl TextRun {
    /// Creates a centered, horizontal run.
    pub fn new(text: impl Into<String>, origin: Point, style: TextStyle, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            anchor: TextAnchor::Middle,
            style,
            color,
            rotation: TextRotation::Horizontal,
        }
    }

    /// Sets the anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the rotation.
    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = rotation;
        self
    }

    fn translated(mut self, offset: Vec2) -> Self {
        self.origin += offset;
        self
    }
}

/// Drawing primitives consumed by a figure.
///
/// All coordinates are absolute pixels in the canvas' own space, y down.
pub trait Canvas {
    /// Strokes a straight segment.
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, width: f64);

    /// Strokes the outline of `rect`.
    fn draw_rect(&mut self, rect: Rect, color: Color, stroke_width: f64);

    /// Fills a circle.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Fills `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws one line of text.
    fn draw_text(&mut self, run: &TextRun);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, width: f64) {
        (**self).draw_line(p1, p2, color, width);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke_width: f64) {
        (**self).draw_rect(rect, color, stroke_width);
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        (**self).draw_circle(center, radius, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    fn draw_text(&mut self, run: &TextRun) {
        (**self).draw_text(run);
    }
}

/// A canvas adapter that shifts every primitive by a fixed offset.
///
/// Figures lay out in their own coordinates with the origin at the top-left
/// corner and draw through this to land at their position on the target.
#[derive(Debug)]
pub(crate) struct Offset<'a, C: ?Sized> {
    inner: &'a mut C,
    offset: Vec2,
}

impl<'a, C: Canvas + ?Sized> Offset<'a, C> {
    pub(crate) fn new(inner: &'a mut C, origin: Point) -> Self {
        Self {
            inner,
            offset: origin.to_vec2(),
        }
    }
}

impl<C: Canvas + ?Sized> Canvas for Offset<'_, C> {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, width: f64) {
        self.inner
            .draw_line(p1 + self.offset, p2 + self.offset, color, width);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke_width: f64) {
        self.inner.draw_rect(rect + self.offset, color, stroke_width);
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.inner.draw_circle(center + self.offset, radius, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.inner.fill_rect(rect + self.offset, color);
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.inner.draw_text(&run.clone().translated(self.offset));
    }
}

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Canvas::draw_line`].
    Line {
        /// Start point.
        p1: Point,
        /// End point.
        p2: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`Canvas::draw_rect`].
    StrokeRect {
        /// Outlined rectangle.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`Canvas::draw_circle`].
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas::fill_rect`].
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas::draw_text`].
    Text(TextRun),
}

/// A canvas that records calls instead of painting them.
///
/// Useful for tests and for replaying a frame into another backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingCanvas {
    /// Calls in the order they were made.
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards recorded calls.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replays the recording into another canvas.
    pub fn replay(&self, target: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Line {
                    p1,
                    p2,
                    color,
                    width,
                } => target.draw_line(*p1, *p2, *color, *width),
                DrawCommand::StrokeRect { rect, color, width } => {
                    target.draw_rect(*rect, *color, *width);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => target.draw_circle(*center, *radius, *color),
                DrawCommand::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawCommand::Text(run) => target.draw_text(run),
            }
        }
    }

    /// Recorded text runs, in order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            p1,
            p2,
            color,
            width,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke_width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width: stroke_width,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn offset_shifts_every_primitive() {
        let mut rec = RecordingCanvas::new();
        {
            let mut c = Offset::new(&mut rec, Point::new(100.0, 50.0));
            c.draw_line(Point::ZERO, Point::new(1.0, 1.0), css::RED, 1.0);
            c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), css::RED);
            c.draw_text(&TextRun::new(
                "t",
                Point::new(5.0, 5.0),
                TextStyle::default(),
                css::BLACK,
            ));
        }
        assert_eq!(
            rec.commands[0],
            DrawCommand::Line {
                p1: Point::new(100.0, 50.0),
                p2: Point::new(101.0, 51.0),
                color: css::RED,
                width: 1.0,
            }
        );
        assert_eq!(
            rec.commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(100.0, 50.0, 110.0, 60.0),
                color: css::RED,
            }
        );
        assert_eq!(rec.texts().next().unwrap().origin, Point::new(105.0, 55.0));
    }

    #[test]
    fn replay_reproduces_the_recording() {
        let mut rec = RecordingCanvas::new();
        rec.draw_circle(Point::new(1.0, 2.0), 3.0, css::BLUE);
        rec.draw_rect(Rect::new(0.0, 0.0, 4.0, 4.0), css::BLACK, 1.0);
        let mut copy = RecordingCanvas::new();
        rec.replay(&mut copy);
        assert_eq!(rec, copy);
    }
}
