// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for figure layout.
//!
//! Figure layout depends on the rendered size of strings: the title and axis
//! labels reserve bands whose thickness is their text height, tick bands grow
//! to fit the widest tick label, and legend items are packed by the width of
//! each series name. Glyph rendering itself is a downstream concern, so the
//! layout code only ever asks a [`TextMeasurer`] how big a string would be.
//!
//! The crate is `no_std` (it uses `alloc` for owned font family names) so the
//! same trait can be implemented by a shaping engine, a bitmap font atlas or a
//! browser canvas.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures single lines of text.
///
/// Implementations must be deterministic: measuring the same string with the
/// same style twice must return the same metrics, otherwise repeated draws of
/// an unchanged figure would not produce identical geometry.
pub trait TextMeasurer {
    /// Measure `text` as a single unrotated line.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the `(width, height)` box `text` occupies once drawn with `rotation`.
    fn extent(&self, text: &str, style: &TextStyle, rotation: TextRotation) -> (f64, f64) {
        self.measure(text, style).extent(rotation)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a sans-serif `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Replaces the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"DejaVu Sans"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name in CSS `font-family` syntax.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// How a line of text is oriented when drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextRotation {
    /// Left-to-right, unrotated.
    #[default]
    Horizontal,
    /// Rotated 90° counter-clockwise (reads bottom-to-top), as used for y-axis labels.
    Vertical,
}

impl TextRotation {
    /// Rotation angle in degrees, counter-clockwise.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Horizontal => 0.0,
            Self::Vertical => 90.0,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width of the whole line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Returns the `(width, height)` box of the line once drawn with `rotation`.
    ///
    /// A vertical line swaps its advance and its line height.
    #[must_use]
    pub fn extent(&self, rotation: TextRotation) -> (f64, f64) {
        match rotation {
            TextRotation::Horizontal => (self.advance_width, self.line_height()),
            TextRotation::Vertical => (self.line_height(), self.advance_width),
        }
    }
}

/// A heuristic measurer for tests, demos and headless layout.
///
/// It assumes an average glyph advance of 0.6em and a baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
