// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure composition.
//!
//! A [`Figure`] owns the series, the optional guides (title, axis labels,
//! legend, gridlines) and any explicit axis limits. Nothing is laid out until
//! [`Figure::draw`]: every draw plans the whole figure from scratch, then paints
//! it layer by layer. Between draws callers may upsert series freely, which is
//! how a frame loop animates a chart.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use pixchart_text::TextMeasurer;
use tracing::{debug, warn};

use crate::axis::{Axis, AxisPlan};
use crate::canvas::{Canvas, Offset, TextRun};
use crate::chart_area::{self, DataTransform};
use crate::error::{ChartError, ChartResult};
use crate::label::{Label, LabelKind};
use crate::layout::{FigureLayout, LayoutSpec, RegionKind};
use crate::legend::LegendLayout;
use crate::paint_order::Layer;
use crate::series::{ChartKind, Series, SeriesStore, XData, XDataType};
use crate::style::FigureStyle;

/// The result of planning a figure: everything a draw needs, in figure coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FigurePlan {
    /// Region boxes.
    pub layout: FigureLayout,
    /// Resolved x axis, with tick positions.
    pub x_axis: AxisPlan,
    /// Resolved y axis, with tick positions.
    pub y_axis: AxisPlan,
    /// Data-to-pixel mapping for the chart area.
    pub transform: DataTransform,
    /// Packed legend, if the legend is enabled and there are series.
    pub legend: Option<LegendLayout>,
}

/// A chart with a fixed pixel size at a fixed position on its canvas.
#[derive(Clone, Debug)]
pub struct Figure {
    origin: Point,
    size: Size,
    style: FigureStyle,
    series: SeriesStore,
    title: Option<Label>,
    x_label: Option<Label>,
    y_label: Option<Label>,
    legend: bool,
    gridlines: bool,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
}

impl Figure {
    /// Creates an empty figure occupying `size` pixels at `origin` on the canvas.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            style: FigureStyle::default(),
            series: SeriesStore::new(),
            title: None,
            x_label: None,
            y_label: None,
            legend: false,
            gridlines: false,
            xlim: None,
            ylim: None,
        }
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Top-left corner on the canvas.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Figure bounds in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Current style.
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// Stored series.
    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    /// Explicit x limit, if one was accepted.
    pub fn xlim(&self) -> Option<(f64, f64)> {
        self.xlim
    }

    /// Explicit y limit, if one was accepted.
    pub fn ylim(&self) -> Option<(f64, f64)> {
        self.ylim
    }

    /// Sets the title.
    pub fn add_title(&mut self, text: impl Into<String>) -> &mut Self {
        self.title = Some(Label::new(LabelKind::Title, text));
        self
    }

    /// Enables the legend.
    pub fn add_legend(&mut self) -> &mut Self {
        self.legend = true;
        self
    }

    /// Sets the y-axis label.
    pub fn add_y_axis_label(&mut self, text: impl Into<String>) -> &mut Self {
        self.y_label = Some(Label::new(LabelKind::YAxis, text));
        self
    }

    /// Sets the x-axis label.
    pub fn add_x_axis_label(&mut self, text: impl Into<String>) -> &mut Self {
        self.x_label = Some(Label::new(LabelKind::XAxis, text));
        self
    }

    /// Enables gridlines at every tick.
    pub fn add_gridlines(&mut self) -> &mut Self {
        self.gridlines = true;
        self
    }

    /// Fixes the x domain to `[min, max]`.
    ///
    /// This also commits the x axis to numeric data. Invalid limits are
    /// rejected with [`ChartError::InvalidAxisLimit`] and the figure keeps its
    /// previous x limit (or keeps auto-computing it).
    pub fn set_xlim(&mut self, min: f64, max: f64) -> ChartResult<()> {
        check_limit(Axis::X, min, max)?;
        self.series.lock_x_type(XDataType::Numeric)?;
        self.xlim = Some((min, max));
        Ok(())
    }

    /// Fixes the y domain to `[min, max]`.
    ///
    /// Invalid limits are rejected like in [`Figure::set_xlim`].
    pub fn set_ylim(&mut self, min: f64, max: f64) -> ChartResult<()> {
        check_limit(Axis::Y, min, max)?;
        self.ylim = Some((min, max));
        Ok(())
    }

    /// Adds or updates a line series.
    ///
    /// `color` and `width` only apply when `name` is new; an update replaces
    /// the data and keeps everything else.
    pub fn line(
        &mut self,
        name: impl Into<String>,
        xdata: impl Into<XData>,
        ydata: impl Into<Vec<f64>>,
        color: Option<Color>,
        width: Option<f64>,
    ) -> ChartResult<()> {
        let kind = ChartKind::Line {
            width: width.unwrap_or(self.style.line_width),
        };
        self.upsert(name.into(), xdata.into(), ydata.into(), kind, color)
    }

    /// Adds or updates a bar series.
    ///
    /// Without a `width`, bars are two thirds of the x gap wide.
    pub fn bar(
        &mut self,
        name: impl Into<String>,
        xdata: impl Into<XData>,
        ydata: impl Into<Vec<f64>>,
        color: Option<Color>,
        width: Option<f64>,
    ) -> ChartResult<()> {
        let kind = ChartKind::Bar { width };
        self.upsert(name.into(), xdata.into(), ydata.into(), kind, color)
    }

    /// Adds or updates a scatter series.
    pub fn scatter(
        &mut self,
        name: impl Into<String>,
        xdata: impl Into<XData>,
        ydata: impl Into<Vec<f64>>,
        color: Option<Color>,
        radius: Option<f64>,
    ) -> ChartResult<()> {
        let kind = ChartKind::Scatter {
            radius: radius.unwrap_or(self.style.scatter_radius),
        };
        self.upsert(name.into(), xdata.into(), ydata.into(), kind, color)
    }

    fn upsert(
        &mut self,
        name: String,
        xdata: XData,
        ydata: Vec<f64>,
        kind: ChartKind,
        color: Option<Color>,
    ) -> ChartResult<()> {
        let color = color.unwrap_or_else(|| self.style.series_color(self.series.len()));
        let series = Series::new(name, xdata, ydata, kind, color)?;
        self.series.add_or_update(series)?;
        Ok(())
    }

    /// Runs the layout pass without drawing.
    ///
    /// Fails with [`ChartError::NoData`] if an axis has neither data nor an
    /// explicit limit, and with [`ChartError::DegenerateDomain`] if an axis'
    /// data has zero span.
    pub fn plan(&self, measurer: &impl TextMeasurer) -> ChartResult<FigurePlan> {
        self.plan_dyn(measurer)
    }

    fn plan_dyn(&self, measurer: &dyn TextMeasurer) -> ChartResult<FigurePlan> {
        let style = &self.style;
        let text_style = style.text_style();
        let p = style.padding;

        let mut x_axis = AxisPlan::plan(Axis::X, &self.series, self.xlim, style.max_ticks)?;
        let mut y_axis = AxisPlan::plan(Axis::Y, &self.series, self.ylim, style.max_ticks)?;
        x_axis.measure(measurer, &text_style, p);
        y_axis.measure(measurer, &text_style, p);

        let legend = if self.legend {
            LegendLayout::pack(&self.series, measurer, style, self.size.width - 2.0 * p)
        } else {
            None
        };

        let layout = FigureLayout::arrange(&LayoutSpec {
            size: self.size,
            padding: p,
            title: self.title.as_ref().map(|l| l.measure(measurer, style)),
            legend: legend.as_ref().map(LegendLayout::size),
            y_label: self.y_label.as_ref().map(|l| l.measure(measurer, style)),
            x_label: self.x_label.as_ref().map(|l| l.measure(measurer, style)),
            y_ticks: y_axis.thickness,
            x_ticks: x_axis.thickness,
        });

        let transform =
            DataTransform::new(layout.chart_area(), style.chart_margin, &x_axis, &y_axis);
        x_axis.place(&transform);
        y_axis.place(&transform);

        let chart = transform.chart_rect();
        debug!(
            x = chart.x0,
            y = chart.y0,
            width = chart.width(),
            height = chart.height(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "planned figure"
        );

        Ok(FigurePlan {
            layout,
            x_axis,
            y_axis,
            transform,
            legend,
        })
    }

    /// Plans the figure and paints it into `canvas`.
    ///
    /// Drawing an unchanged figure twice issues identical canvas calls. On
    /// error nothing is drawn.
    pub fn draw(
        &self,
        canvas: &mut impl Canvas,
        measurer: &impl TextMeasurer,
    ) -> ChartResult<FigurePlan> {
        let plan = self.plan_dyn(measurer)?;
        let mut target = Offset::new(canvas, self.origin);
        for layer in Layer::ALL {
            self.paint(&mut target, &plan, layer);
        }
        Ok(plan)
    }

    fn paint(&self, canvas: &mut dyn Canvas, plan: &FigurePlan, layer: Layer) {
        let style = &self.style;
        let layout = &plan.layout;
        let chart = layout.chart_area();
        match layer {
            Layer::Background => {
                canvas.fill_rect(Rect::from_origin_size(Point::ZERO, self.size), style.background);
            }
            Layer::Grid => {
                if self.gridlines {
                    chart_area::draw_gridlines(
                        canvas,
                        &plan.transform,
                        &plan.x_axis,
                        &plan.y_axis,
                        &style.grid,
                    );
                }
            }
            Layer::Bars | Layer::Lines | Layer::Points => {
                chart_area::draw_series(canvas, &plan.transform, &self.series, layer);
            }
            Layer::Mask => chart_area::draw_mask(canvas, chart, self.size, style),
            Layer::Frame => canvas.draw_rect(chart, style.border_color, 1.0),
            Layer::Title => {
                if let Some(title) = &self.title {
                    title.draw(canvas, layout.region(RegionKind::Title), style);
                }
            }
            Layer::Legend => {
                if let Some(legend) = &plan.legend {
                    legend.draw(canvas, layout.region(RegionKind::Legend), style);
                }
            }
            Layer::AxisLabels => {
                if let Some(label) = &self.y_label {
                    label.draw(canvas, layout.region(RegionKind::YLabel), style);
                }
                if let Some(label) = &self.x_label {
                    label.draw(canvas, layout.region(RegionKind::XLabel), style);
                }
            }
            Layer::TickLabels => {
                let text_style = style.text_style();
                let band_x = layout.region(RegionKind::YTicks).outer.center().x;
                for tick in &plan.y_axis.ticks {
                    canvas.draw_text(&TextRun::new(
                        tick.label.clone(),
                        Point::new(band_x, tick.position),
                        text_style.clone(),
                        style.text_color,
                    ));
                }
                let band_y = layout.region(RegionKind::XTicks).outer.center().y;
                for tick in &plan.x_axis.ticks {
                    canvas.draw_text(&TextRun::new(
                        tick.label.clone(),
                        Point::new(tick.position, band_y),
                        text_style.clone(),
                        style.text_color,
                    ));
                }
            }
        }
    }
}

fn check_limit(axis: Axis, min: f64, max: f64) -> ChartResult<()> {
    if min.is_finite() && max.is_finite() && max > min {
        return Ok(());
    }
    warn!(axis = axis.name(), min, max, "rejected axis limit");
    Err(ChartError::InvalidAxisLimit {
        axis: axis.name(),
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::style::DEFAULT_PALETTE;

    fn figure() -> Figure {
        Figure::new(Point::ZERO, Size::new(400.0, 300.0))
    }

    #[test]
    fn default_colors_cycle_through_the_palette() {
        let mut fig = figure();
        for i in 0..11 {
            fig.scatter(alloc::format!("s{i}"), [1.0], vec![1.0], None, None)
                .unwrap();
        }
        let colors: Vec<Color> = fig.series().iter().map(Series::color).collect();
        assert_eq!(colors[0], DEFAULT_PALETTE[0]);
        assert_eq!(colors[9], DEFAULT_PALETTE[9]);
        assert_eq!(colors[10], DEFAULT_PALETTE[0]);
    }

    #[test]
    fn explicit_color_and_size_are_kept() {
        let mut fig = figure();
        fig.line("l", [1.0, 2.0], vec![1.0, 2.0], Some(css::TEAL), Some(4.0))
            .unwrap();
        fig.bar("b", [1.0, 2.0], vec![1.0, 2.0], None, None).unwrap();
        let l = fig.series().get("l").unwrap();
        assert_eq!(l.color(), css::TEAL);
        assert_eq!(l.kind(), ChartKind::Line { width: 4.0 });
        assert_eq!(
            fig.series().get("b").unwrap().kind(),
            ChartKind::Bar { width: None }
        );
    }

    #[test]
    fn rejected_limit_keeps_the_previous_one() {
        let mut fig = figure();
        fig.set_ylim(0.0, 10.0).unwrap();
        assert!(fig.set_ylim(3.0, 1.0).is_err());
        assert!(fig.set_ylim(f64::NAN, 1.0).is_err());
        assert_eq!(fig.ylim(), Some((0.0, 10.0)));
    }

    #[test]
    fn xlim_locks_the_x_axis_to_numbers() {
        let mut fig = figure();
        fig.set_xlim(0.0, 10.0).unwrap();
        let err = fig
            .line("c", ["a", "b"], vec![1.0, 2.0], None, None)
            .unwrap_err();
        assert!(matches!(err, ChartError::AxisTypeMismatch { .. }));

        let mut fig = figure();
        fig.bar("c", ["a", "b"], vec![1.0, 2.0], None, None).unwrap();
        assert!(matches!(
            fig.set_xlim(0.0, 1.0),
            Err(ChartError::AxisTypeMismatch { .. })
        ));
        assert_eq!(fig.xlim(), None);
    }

    #[test]
    fn bounds_include_the_origin() {
        let fig = Figure::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(fig.bounds(), Rect::new(10.0, 20.0, 110.0, 70.0));
    }
}
