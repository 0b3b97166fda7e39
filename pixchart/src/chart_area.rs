// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart area: data-to-pixel mapping and series drawing.
//!
//! The chart area's outer box is inset by the chart margin to get the *data
//! rect*. Domain minimums map to its left and bottom edges and domain maximums
//! to its right and top edges, so outermost ticks never sit on the border.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::trace;

use crate::axis::{AxisDomain, AxisPlan};
use crate::canvas::Canvas;
use crate::paint_order::Layer;
use crate::series::{ChartKind, Series, SeriesStore, XValue};
use crate::style::{FigureStyle, GridStyle};

/// Maps data values into figure pixels for one draw.
#[derive(Clone, Debug, PartialEq)]
pub struct DataTransform {
    chart: Rect,
    data: Rect,
    x_domain: AxisDomain,
    x_gap: f64,
    categories: Option<Vec<String>>,
    y_domain: AxisDomain,
    y_scale: f64,
}

impl DataTransform {
    /// Builds the transform for a chart area box and the two axis plans.
    pub fn new(chart: Rect, margin: f64, x: &AxisPlan, y: &AxisPlan) -> Self {
        let usable_w = (chart.width() - 2.0 * margin).max(0.0);
        let usable_h = (chart.height() - 2.0 * margin).max(0.0);
        let data = Rect::new(
            chart.x0 + margin,
            chart.y0 + margin,
            chart.x0 + margin + usable_w,
            chart.y0 + margin + usable_h,
        );

        let x_span = x.domain.span();
        // A single category has no gap to divide; it sits on the left edge.
        let x_gap = if x_span > 0.0 {
            usable_w / x_span
        } else {
            usable_w
        };
        let y_span = y.domain.span();
        let y_scale = if y_span > 0.0 { usable_h / y_span } else { 0.0 };

        Self {
            chart,
            data,
            x_domain: x.domain,
            x_gap,
            categories: x.categories.clone(),
            y_domain: y.domain,
            y_scale,
        }
    }

    /// The chart area's outer box.
    pub fn chart_rect(&self) -> Rect {
        self.chart
    }

    /// The chart area inset by the chart margin.
    pub fn data_rect(&self) -> Rect {
        self.data
    }

    /// Pixels per x unit, or per category step on a categorical axis.
    pub fn x_gap(&self) -> f64 {
        self.x_gap
    }

    /// Pixels per y unit.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Horizontal pixel of a numeric x value, without clipping.
    pub fn x_position(&self, x: f64) -> f64 {
        self.data.x0 + (x - self.x_domain.min) * self.x_gap
    }

    /// Horizontal pixel of the category at `index`.
    pub fn category_position(&self, index: usize) -> f64 {
        self.data.x0 + index as f64 * self.x_gap
    }

    /// Vertical pixel of a y value; larger values are higher up.
    pub fn y_position(&self, y: f64) -> f64 {
        self.data.y0 + (self.y_domain.max - y) * self.y_scale
    }

    /// Vertical pixel of `y = 0`, where bars start.
    pub fn zero_line(&self) -> f64 {
        self.y_position(0.0)
    }

    /// Horizontal pixel of an x sample.
    ///
    /// Numeric values outside the x domain map to `None`; the bounds are
    /// inclusive. Every category present on the axis maps to a pixel.
    pub fn map_x(&self, x: XValue<'_>) -> Option<f64> {
        match x {
            XValue::Number(v) => self.x_domain.contains(v).then(|| self.x_position(v)),
            XValue::Category(label) => self
                .categories
                .as_ref()?
                .binary_search_by(|c| c.as_str().cmp(label))
                .ok()
                .map(|i| self.category_position(i)),
        }
    }

    /// The rectangle of a bar at horizontal pixel `px` for value `y`.
    ///
    /// Bars grow up from the zero line for positive values and down for
    /// negative ones.
    pub fn bar_rect(&self, px: f64, y: f64, width: f64) -> Rect {
        let zero = self.zero_line();
        let h = y * self.y_scale;
        let top = if h >= 0.0 { zero - h } else { zero };
        let half = 0.5 * width;
        Rect::new(px - half, top, px + half, top + h.abs())
    }

    /// Bar width used when a bar series has none: two thirds of the x gap.
    pub fn default_bar_width(&self) -> f64 {
        self.x_gap * 2.0 / 3.0
    }
}

/// Draws a vertical gridline per x tick and a horizontal one per y tick.
pub(crate) fn draw_gridlines(
    canvas: &mut dyn Canvas,
    transform: &DataTransform,
    x: &AxisPlan,
    y: &AxisPlan,
    grid: &GridStyle,
) {
    let chart = transform.chart_rect();
    for tick in &x.ticks {
        canvas.draw_line(
            Point::new(tick.position, chart.y0),
            Point::new(tick.position, chart.y1),
            grid.color,
            grid.width,
        );
    }
    for tick in &y.ticks {
        canvas.draw_line(
            Point::new(chart.x0, tick.position),
            Point::new(chart.x1, tick.position),
            grid.color,
            grid.width,
        );
    }
}

/// Draws every series painted in `layer`, in insertion order.
pub(crate) fn draw_series(
    canvas: &mut dyn Canvas,
    transform: &DataTransform,
    store: &SeriesStore,
    layer: Layer,
) {
    for series in store.iter().filter(|s| Layer::for_kind(s.kind()) == layer) {
        let drawn = draw_one(canvas, transform, series);
        trace!(name = series.name(), drawn, "drew series");
    }
}

fn draw_one(canvas: &mut dyn Canvas, transform: &DataTransform, series: &Series) -> usize {
    let color = series.color();
    let points = series
        .points()
        .filter_map(|(x, y)| transform.map_x(x).map(|px| (px, y)));

    match series.kind() {
        ChartKind::Line { width } => {
            let pts: Vec<Point> = points
                .map(|(px, y)| Point::new(px, transform.y_position(y)))
                .collect();
            for pair in pts.windows(2) {
                canvas.draw_line(pair[0], pair[1], color, width);
            }
            pts.len()
        }
        ChartKind::Bar { width } => {
            let bw = width.unwrap_or_else(|| transform.default_bar_width());
            let mut n = 0;
            for (px, y) in points {
                canvas.fill_rect(transform.bar_rect(px, y, bw), color);
                n += 1;
            }
            n
        }
        ChartKind::Scatter { radius } => {
            let mut n = 0;
            for (px, y) in points {
                canvas.draw_circle(Point::new(px, transform.y_position(y)), radius, color);
                n += 1;
            }
            n
        }
    }
}

/// Refills the four bands of the figure around the chart area with the
/// background, hiding marks that fall outside it.
pub(crate) fn draw_mask(canvas: &mut dyn Canvas, chart: Rect, size: Size, style: &FigureStyle) {
    let (w, h) = (size.width, size.height);
    let bands = [
        Rect::new(0.0, 0.0, w, chart.y0),
        Rect::new(0.0, chart.y1, w, h),
        Rect::new(0.0, chart.y0, chart.x0, chart.y1),
        Rect::new(chart.x1, chart.y0, w, chart.y1),
    ];
    for band in bands {
        if band.width() > 0.0 && band.height() > 0.0 {
            canvas.fill_rect(band, style.background);
        }
    }
}
