// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure-wide styling and layout constants.

use peniko::Color;
use peniko::color::palette::css;
use pixchart_text::{FontFamily, TextStyle};

/// Colors assigned to series that were added without one, cycled by series count.
pub const DEFAULT_PALETTE: [Color; 10] = [
    css::BLUE,
    css::ORANGE,
    css::GREEN,
    css::RED,
    css::PURPLE,
    css::BROWN,
    css::PINK,
    css::GRAY,
    css::OLIVE,
    css::AQUA,
];

/// Gridline styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(224, 224, 224),
            width: 1.0,
        }
    }
}

/// Styling and spacing shared by every region of a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureStyle {
    /// Figure, legend and masking fill.
    pub background: Color,
    /// Color of all text.
    pub text_color: Color,
    /// Chart-area and legend border color.
    pub border_color: Color,
    /// Font family for all text.
    pub font_family: FontFamily,
    /// Font size for labels, ticks and legend names.
    pub font_size: f64,
    /// Font size for the title.
    pub title_font_size: f64,
    /// Inset between a region's outer and inner box.
    pub padding: f64,
    /// Upper bound on tick intervals per numeric axis.
    pub max_ticks: usize,
    /// Inset of the data rect inside the chart area.
    pub chart_margin: f64,
    /// Lower bound on a legend line's height.
    pub legend_line_height: f64,
    /// Width of a legend swatch.
    pub legend_swatch_width: f64,
    /// Radius of the scatter swatch in the legend.
    pub legend_marker_radius: f64,
    /// Gridline styling.
    pub grid: GridStyle,
    /// Default stroke width for line series.
    pub line_width: f64,
    /// Default marker radius for scatter series.
    pub scatter_radius: f64,
    /// Colors for series created without one.
    pub palette: [Color; 10],
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            background: css::WHITE,
            text_color: css::BLACK,
            border_color: css::BLACK,
            font_family: FontFamily::SansSerif,
            font_size: 10.0,
            title_font_size: 14.0,
            padding: 5.0,
            max_ticks: 10,
            chart_margin: 10.0,
            legend_line_height: 10.0,
            legend_swatch_width: 10.0,
            legend_marker_radius: 3.0,
            grid: GridStyle::default(),
            line_width: 2.0,
            scatter_radius: 3.0,
            palette: DEFAULT_PALETTE,
        }
    }
}

impl FigureStyle {
    /// Text style for labels, ticks and legend names.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size).with_family(self.font_family.clone())
    }

    /// Text style for the title.
    pub fn title_style(&self) -> TextStyle {
        TextStyle::new(self.title_font_size).with_family(self.font_family.clone())
    }

    /// Default color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    /// Sets the border color.
    pub fn with_border_color(mut self, border_color: Color) -> Self {
        self.border_color = border_color;
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size.max(0.0);
        self
    }

    /// Sets the title font size.
    pub fn with_title_font_size(mut self, font_size: f64) -> Self {
        self.title_font_size = font_size.max(0.0);
        self
    }

    /// Sets the region padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the tick budget.
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Sets the chart-area margin.
    pub fn with_chart_margin(mut self, margin: f64) -> Self {
        self.chart_margin = margin.max(0.0);
        self
    }

    /// Sets the gridline style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the default series palette.
    pub fn with_palette(mut self, palette: [Color; 10]) -> Self {
        self.palette = palette;
        self
    }
}
