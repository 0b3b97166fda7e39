// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure title and axis labels.
//!
//! Labels take part in layout (they reserve a band of the figure) and are
//! drawn centered in the region they were given. The y label is rotated a
//! quarter turn and reads bottom to top.

use alloc::string::String;

use pixchart_text::{TextMeasurer, TextRotation, TextStyle};

use crate::canvas::{Canvas, TextRun};
use crate::layout::Region;
use crate::style::FigureStyle;

/// Which slot a [`Label`] fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Figure title, across the top.
    Title,
    /// X-axis label, under the x tick band.
    XAxis,
    /// Y-axis label, left of the y tick band.
    YAxis,
}

/// A single-line text label.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Its slot in the figure.
    pub kind: LabelKind,
}

impl Label {
    /// Creates a label.
    pub fn new(kind: LabelKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Orientation the label is drawn with.
    pub fn rotation(&self) -> TextRotation {
        match self.kind {
            LabelKind::YAxis => TextRotation::Vertical,
            LabelKind::Title | LabelKind::XAxis => TextRotation::Horizontal,
        }
    }

    /// Text style the label is drawn with.
    pub fn text_style(&self, style: &FigureStyle) -> TextStyle {
        match self.kind {
            LabelKind::Title => style.title_style(),
            LabelKind::XAxis | LabelKind::YAxis => style.text_style(),
        }
    }

    /// Extent the label needs across its band, without padding.
    ///
    /// That is the text height for the title and x label, and the rotated
    /// text's width for the y label.
    pub fn measure(&self, measurer: &dyn TextMeasurer, style: &FigureStyle) -> f64 {
        let (w, h) = measurer.extent(&self.text, &self.text_style(style), self.rotation());
        match self.kind {
            LabelKind::YAxis => w,
            LabelKind::Title | LabelKind::XAxis => h,
        }
    }

    /// Draws the label centered in `region`.
    pub fn draw(&self, canvas: &mut dyn Canvas, region: &Region, style: &FigureStyle) {
        canvas.draw_text(
            &TextRun::new(
                self.text.clone(),
                region.outer.center(),
                self.text_style(style),
                style.text_color,
            )
            .with_rotation(self.rotation()),
        );
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use pixchart_text::HeuristicTextMeasurer;

    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn title_uses_title_font() {
        let style = FigureStyle::default();
        let title = Label::new(LabelKind::Title, "Sales");
        assert!((title.measure(&HeuristicTextMeasurer, &style) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn y_label_measures_rotated_width() {
        let style = FigureStyle::default();
        let label = Label::new(LabelKind::YAxis, "a long label");
        assert!((label.measure(&HeuristicTextMeasurer, &style) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn drawn_at_region_center() {
        let style = FigureStyle::default();
        let label = Label::new(LabelKind::YAxis, "y");
        let region = Region::new(Rect::new(0.0, 20.0, 20.0, 220.0), 5.0);
        let mut canvas = RecordingCanvas::new();
        label.draw(&mut canvas, &region, &style);
        let run = canvas.texts().next().unwrap();
        assert_eq!(run.origin, Point::new(10.0, 120.0));
        assert_eq!(run.rotation, TextRotation::Vertical);
    }
}
