// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend packing and drawing.
//!
//! Items (swatch, gap, name, gap) are packed left to right into lines no wider
//! than the figure's content width. The packed block is centered along the
//! bottom edge of the figure.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use pixchart_text::{TextMeasurer, TextRotation};
use smallvec::SmallVec;

use crate::canvas::{Canvas, TextAnchor, TextRun};
use crate::layout::Region;
use crate::series::{ChartKind, SeriesStore};
use crate::style::FigureStyle;

/// One series entry in the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Series name.
    pub name: String,
    /// Series kind, which picks the swatch shape.
    pub kind: ChartKind,
    /// Swatch color.
    pub color: Color,
    /// Full item width: swatch, gap, name, gap.
    pub width: f64,
}

/// Items of one legend line.
pub type LegendLine = SmallVec<[LegendItem; 4]>;

/// A packed legend, ready to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// Packed lines, top to bottom.
    pub lines: Vec<LegendLine>,
    /// Height of every line.
    pub line_height: f64,
}

impl LegendLayout {
    /// Packs one item per series, in insertion order, into lines no wider than
    /// `available_width`.
    ///
    /// Returns `None` when there are no series. An item wider than the available
    /// width still gets a line of its own.
    pub fn pack(
        store: &SeriesStore,
        measurer: &dyn TextMeasurer,
        style: &FigureStyle,
        available_width: f64,
    ) -> Option<Self> {
        if store.is_empty() {
            return None;
        }
        let text_style = style.text_style();
        let p = style.padding;

        let mut lines: Vec<LegendLine> = Vec::new();
        let mut current = LegendLine::new();
        let mut current_width = 0.0;
        let mut line_height = style.legend_line_height;

        for series in store {
            let (name_w, name_h) =
                measurer.extent(series.name(), &text_style, TextRotation::Horizontal);
            line_height = line_height.max(name_h);
            let width = style.legend_swatch_width + p + name_w + p;

            if !current.is_empty() && current_width + width > available_width {
                lines.push(core::mem::take(&mut current));
                current_width = 0.0;
            }
            current_width += width;
            current.push(LegendItem {
                name: series.name().into(),
                kind: series.kind(),
                color: series.color(),
                width,
            });
        }
        lines.push(current);

        Some(Self { lines, line_height })
    }

    /// Content size: the widest line by the total line height.
    pub fn size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| line.iter().map(|item| item.width).sum::<f64>())
            .fold(0.0_f64, f64::max);
        let height = self.line_height * self.lines.len() as f64;
        Size::new(width, height)
    }

    /// Draws the legend box and its items into `region`.
    pub fn draw(&self, canvas: &mut dyn Canvas, region: &Region, style: &FigureStyle) {
        canvas.fill_rect(region.outer, style.background);
        canvas.draw_rect(region.outer, style.border_color, 1.0);

        let inner = region.inner();
        let text_style = style.text_style();
        let swatch_w = style.legend_swatch_width;
        let h = self.line_height;

        let mut y = inner.y0;
        for line in &self.lines {
            let mut x = inner.x0;
            let mid = y + 0.5 * h;
            for item in line {
                match item.kind {
                    ChartKind::Line { .. } => canvas.draw_line(
                        Point::new(x, mid),
                        Point::new(x + swatch_w, mid),
                        item.color,
                        1.0,
                    ),
                    ChartKind::Bar { .. } => {
                        canvas.fill_rect(Rect::new(x, y, x + swatch_w, y + h), item.color);
                    }
                    ChartKind::Scatter { .. } => canvas.draw_circle(
                        Point::new(x + 0.5 * swatch_w, mid),
                        style.legend_marker_radius,
                        item.color,
                    ),
                }
                let name_x = x + swatch_w + style.padding;
                canvas.draw_text(
                    &TextRun::new(
                        item.name.clone(),
                        Point::new(name_x, mid),
                        text_style.clone(),
                        style.text_color,
                    )
                    .with_anchor(TextAnchor::Start),
                );
                x += item.width;
            }
            y += h;
        }
    }
}
