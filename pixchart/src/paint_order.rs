// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of the parts of a figure.
//!
//! A [`Canvas`](crate::Canvas) has no depth buffer, so a figure is painted back
//! to front in the order of [`Layer::ALL`]. Series are grouped by kind before
//! painting, which keeps bars under lines and lines under markers no matter
//! the order the series were added in.

use crate::series::ChartKind;

/// One paint pass of a figure, declared back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Figure background fill.
    Background,
    /// Gridlines behind the series.
    Grid,
    /// Bar series.
    Bars,
    /// Line series.
    Lines,
    /// Scatter series.
    Points,
    /// Background bands around the chart area that hide out-of-range marks.
    Mask,
    /// Chart-area border.
    Frame,
    /// Figure title.
    Title,
    /// Legend box and items.
    Legend,
    /// Axis labels.
    AxisLabels,
    /// Tick labels.
    TickLabels,
}

impl Layer {
    /// Every layer, back to front.
    pub const ALL: [Self; 11] = [
        Self::Background,
        Self::Grid,
        Self::Bars,
        Self::Lines,
        Self::Points,
        Self::Mask,
        Self::Frame,
        Self::Title,
        Self::Legend,
        Self::AxisLabels,
        Self::TickLabels,
    ];

    /// The layer a series of this kind is painted in.
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar { .. } => Self::Bars,
            ChartKind::Line { .. } => Self::Lines,
            ChartKind::Scatter { .. } => Self::Points,
        }
    }
}
