// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Canvas`] that serializes primitives as SVG elements.

use std::fmt::Write as _;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use pixchart::{Canvas, TextAnchor, TextRotation, TextRun};

#[derive(Debug, Default)]
pub(crate) struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn to_svg_string(&self, size: Size) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = size.width,
            h = size.height,
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn draw_line(&mut self, p1: Point, p2: Point, color: Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{width}"/>"#,
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            hex(color),
        );
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, stroke_width: f64) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{stroke_width}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(color),
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}"/>"#,
            center.x,
            center.y,
            hex(color),
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(color),
        );
    }

    fn draw_text(&mut self, run: &TextRun) {
        let anchor = match run.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let (x, y) = (run.origin.x, run.origin.y);
        let _ = write!(
            self.body,
            r#"<text x="{x}" y="{y}" font-size="{}" font-family="{}" text-anchor="{anchor}" dominant-baseline="middle" fill="{}""#,
            run.style.font_size,
            run.style.font_family.as_css_family(),
            hex(run.color),
        );
        if run.rotation != TextRotation::Horizontal {
            // SVG angles run clockwise.
            let angle = -run.rotation.degrees();
            let _ = write!(self.body, r#" transform="rotate({angle} {x} {y})""#);
        }
        let _ = writeln!(self.body, ">{}</text>", escape_xml(&run.text));
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use pixchart::TextStyle;

    use super::*;

    #[test]
    fn text_is_escaped_and_rotated() {
        let mut canvas = SvgCanvas::new();
        canvas.draw_text(
            &TextRun::new("a<b", Point::new(5.0, 6.0), TextStyle::new(10.0), css::BLACK)
                .with_rotation(TextRotation::Vertical),
        );
        let svg = canvas.to_svg_string(Size::new(10.0, 10.0));
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("rotate(-90 5 6)"));
    }

    #[test]
    fn colors_are_hex() {
        assert_eq!(hex(css::ORANGE), "#ffa500");
    }
}
