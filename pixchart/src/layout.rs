// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region layout for a figure.
//!
//! Layout follows a measure/arrange split:
//! - **Measure**: every region with content reports the extent it needs
//!   (title and label text heights, legend lines, tick band thickness).
//! - **Arrange**: [`FigureLayout::arrange`] stacks those extents inside the
//!   fixed figure size. The title sits on top, the legend on the bottom edge
//!   with the x label above it, and the y label and y tick band on the left.
//!   The chart area takes whatever is left.
//!
//! Regions without content keep a zero-sized box so the rest of the stack does
//! not need to special-case them.

use kurbo::{Rect, Size};

/// The seven regions of a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Figure title.
    Title,
    /// Legend box.
    Legend,
    /// Rotated y-axis label.
    YLabel,
    /// X-axis label.
    XLabel,
    /// Y tick label band.
    YTicks,
    /// X tick label band.
    XTicks,
    /// Where series are drawn.
    ChartArea,
}

impl RegionKind {
    /// Every region kind, in arena order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Legend,
        Self::YLabel,
        Self::XLabel,
        Self::YTicks,
        Self::XTicks,
        Self::ChartArea,
    ];

    fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Legend => 1,
            Self::YLabel => 2,
            Self::XLabel => 3,
            Self::YTicks => 4,
            Self::XTicks => 5,
            Self::ChartArea => 6,
        }
    }
}

/// A rectangle of the figure with a padded content box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Region {
    /// Outer box, in figure coordinates.
    pub outer: Rect,
    /// Inset between `outer` and the content box.
    pub padding: f64,
}

impl Region {
    /// Creates a region.
    pub fn new(outer: Rect, padding: f64) -> Self {
        Self { outer, padding }
    }

    /// The content box: `outer` inset by `padding`, never of negative size.
    pub fn inner(&self) -> Rect {
        let w = (self.outer.width() - 2.0 * self.padding).max(0.0);
        let h = (self.outer.height() - 2.0 * self.padding).max(0.0);
        let x0 = self.outer.x0 + self.padding;
        let y0 = self.outer.y0 + self.padding;
        Rect::new(x0, y0, x0 + w, y0 + h)
    }

    /// Returns `true` if the region reserves no area.
    pub fn is_empty(&self) -> bool {
        self.outer.width() <= 0.0 || self.outer.height() <= 0.0
    }
}

/// Measured extents fed into [`FigureLayout::arrange`].
///
/// `None` means the region has no content and collapses to zero size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutSpec {
    /// Figure size.
    pub size: Size,
    /// Region padding.
    pub padding: f64,
    /// Title text height.
    pub title: Option<f64>,
    /// Legend content size (all packed lines).
    pub legend: Option<Size>,
    /// Y label extent across the axis (the rotated text's width).
    pub y_label: Option<f64>,
    /// X label text height.
    pub x_label: Option<f64>,
    /// Y tick band width.
    pub y_ticks: f64,
    /// X tick band height.
    pub x_ticks: f64,
}

/// Output of the arrange pass: one [`Region`] per [`RegionKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureLayout {
    regions: [Region; 7],
}

impl FigureLayout {
    /// Arranges all regions inside `spec.size`, in figure coordinates.
    pub fn arrange(spec: &LayoutSpec) -> Self {
        let p = spec.padding.max(0.0);
        let (w, h) = (spec.size.width.max(0.0), spec.size.height.max(0.0));
        let empty = |x: f64, y: f64| Region::new(Rect::new(x, y, x, y), p);

        let title = match spec.title {
            Some(text_h) => Region::new(Rect::new(0.0, 0.0, w, (text_h + 2.0 * p).min(h)), p),
            None => empty(0.0, 0.0),
        };
        let title_h = title.outer.height();

        // Boxes are clamped to the figure; crowded guides collapse onto the title.
        let legend = match spec.legend {
            Some(content) => {
                let x0 = 0.5 * (w - content.width) - p;
                let x1 = (x0 + content.width + 2.0 * p).min(w);
                let y0 = (h - content.height - 2.0 * p).max(title_h);
                Region::new(Rect::new(x0.max(0.0), y0, x1, h), p)
            }
            None => empty(0.0, h),
        };

        let x_label_h = spec.x_label.map_or(0.0, |text_h| text_h + 2.0 * p);
        let y_label_w = spec.y_label.map_or(0.0, |text_w| text_w + 2.0 * p).min(w);
        let x_ticks_h = spec.x_ticks.max(0.0);
        let y_ticks_w = spec.y_ticks.max(0.0);

        let x_label_y1 = legend.outer.y0;
        let x_label_y0 = (x_label_y1 - x_label_h).max(title_h);
        let x_label = Region::new(Rect::new(y_label_w, x_label_y0, w, x_label_y1), p);

        let y_label = Region::new(Rect::new(0.0, title_h, y_label_w, x_label_y0), p);

        let x_ticks_y0 = (x_label_y0 - x_ticks_h).max(title_h);
        let left = (y_label_w + y_ticks_w).min(w);
        let x_ticks = Region::new(Rect::new(left, x_ticks_y0, w, x_label_y0), p);

        let y_ticks = Region::new(Rect::new(y_label_w, title_h, left, x_ticks_y0), p);

        let chart_w = (w - left - p).max(0.0);
        let chart = Region::new(Rect::new(left, title_h, left + chart_w, x_ticks_y0), p);

        let mut regions = [Region::default(); 7];
        regions[RegionKind::Title.index()] = title;
        regions[RegionKind::Legend.index()] = legend;
        regions[RegionKind::YLabel.index()] = y_label;
        regions[RegionKind::XLabel.index()] = x_label;
        regions[RegionKind::YTicks.index()] = y_ticks;
        regions[RegionKind::XTicks.index()] = x_ticks;
        regions[RegionKind::ChartArea.index()] = chart;
        Self { regions }
    }

    /// The region of the given kind.
    pub fn region(&self, kind: RegionKind) -> &Region {
        &self.regions[kind.index()]
    }

    /// The chart area's outer box.
    pub fn chart_area(&self) -> Rect {
        self.region(RegionKind::ChartArea).outer
    }

    /// Iterates `(kind, region)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RegionKind, &Region)> + '_ {
        RegionKind::ALL.iter().map(|&k| (k, self.region(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> LayoutSpec {
        LayoutSpec {
            size: Size::new(400.0, 300.0),
            padding: 5.0,
            ..LayoutSpec::default()
        }
    }

    #[test]
    fn bare_figure_gives_everything_to_the_chart_area() {
        let layout = FigureLayout::arrange(&spec());
        assert_eq!(layout.chart_area(), Rect::new(0.0, 0.0, 395.0, 300.0));
        for kind in [RegionKind::Title, RegionKind::Legend, RegionKind::XLabel] {
            assert!(layout.region(kind).is_empty());
        }
    }

    #[test]
    fn full_stack() {
        let layout = FigureLayout::arrange(&LayoutSpec {
            title: Some(14.0),
            legend: Some(Size::new(100.0, 20.0)),
            y_label: Some(10.0),
            x_label: Some(10.0),
            y_ticks: 29.0,
            x_ticks: 15.0,
            ..spec()
        });

        let title = layout.region(RegionKind::Title).outer;
        assert_eq!(title, Rect::new(0.0, 0.0, 400.0, 24.0));

        let legend = layout.region(RegionKind::Legend);
        assert_eq!(legend.outer, Rect::new(145.0, 270.0, 255.0, 300.0));
        assert_eq!(legend.inner(), Rect::new(150.0, 275.0, 250.0, 295.0));

        let x_label = layout.region(RegionKind::XLabel).outer;
        assert_eq!(x_label, Rect::new(20.0, 250.0, 400.0, 270.0));

        let y_label = layout.region(RegionKind::YLabel).outer;
        assert_eq!(y_label, Rect::new(0.0, 24.0, 20.0, 250.0));

        let y_ticks = layout.region(RegionKind::YTicks).outer;
        assert_eq!(y_ticks, Rect::new(20.0, 24.0, 49.0, 235.0));

        let x_ticks = layout.region(RegionKind::XTicks).outer;
        assert_eq!(x_ticks, Rect::new(49.0, 235.0, 400.0, 250.0));

        assert_eq!(layout.chart_area(), Rect::new(49.0, 24.0, 395.0, 235.0));
    }

    #[test]
    fn inner_box_never_goes_negative() {
        let r = Region::new(Rect::new(10.0, 10.0, 14.0, 12.0), 5.0);
        let inner = r.inner();
        assert_eq!(inner.width(), 0.0);
        assert_eq!(inner.height(), 0.0);
    }

    #[test]
    fn arrange_is_deterministic() {
        let s = LayoutSpec {
            title: Some(14.0),
            y_ticks: 20.0,
            ..spec()
        };
        assert_eq!(FigureLayout::arrange(&s), FigureLayout::arrange(&s));
    }

    fn assert_inside(layout: &FigureLayout, size: Size) {
        for (kind, region) in layout.iter() {
            let r = region.outer;
            assert!(r.x0 <= r.x1 && r.y0 <= r.y1, "{kind:?} is inverted: {r:?}");
            assert!(
                r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= size.width && r.y1 <= size.height,
                "{kind:?} leaves the figure: {r:?}"
            );
        }
    }

    #[test]
    fn wide_legend_is_clamped_to_the_figure() {
        let size = Size::new(100.0, 100.0);
        let layout = FigureLayout::arrange(&LayoutSpec {
            size,
            legend: Some(Size::new(212.0, 10.0)),
            ..spec()
        });
        assert_eq!(
            layout.region(RegionKind::Legend).outer,
            Rect::new(0.0, 80.0, 100.0, 100.0)
        );
        assert_inside(&layout, size);
    }

    #[test]
    fn crowded_small_figure_keeps_regions_inside() {
        let size = Size::new(20.0, 20.0);
        let layout = FigureLayout::arrange(&LayoutSpec {
            size,
            title: Some(14.0),
            legend: Some(Size::new(30.0, 10.0)),
            y_label: Some(10.0),
            x_label: Some(10.0),
            y_ticks: 23.0,
            x_ticks: 15.0,
            ..spec()
        });
        assert_inside(&layout, size);
        assert_eq!(layout.region(RegionKind::Title).outer.height(), 20.0);
        assert_eq!(layout.chart_area().height(), 0.0);
    }
}
