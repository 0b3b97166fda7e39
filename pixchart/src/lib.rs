// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure layout, tick generation and data-to-pixel transforms for simple charts.
//!
//! A [`Figure`] holds named line, bar and scatter series over one shared x
//! axis. Each [`Figure::draw`] runs a two-phase pipeline:
//! - **Plan**: resolve both axis domains and their "nice" ticks, measure the
//!   title, labels, legend and tick bands, then arrange every region inside the
//!   fixed figure size.
//! - **Paint**: map each series through a [`DataTransform`] and issue primitive
//!   calls to a [`Canvas`], back to front.
//!
//! Rasterization and font metrics stay outside this crate: callers supply a
//! [`Canvas`] and a [`TextMeasurer`]. [`RecordingCanvas`] and
//! [`HeuristicTextMeasurer`] cover tests and headless use.
//!
//! ```
//! use kurbo::{Point, Size};
//! use pixchart::{Figure, HeuristicTextMeasurer, RecordingCanvas};
//!
//! let mut fig = Figure::new(Point::ZERO, Size::new(400.0, 300.0));
//! fig.add_title("Demo").add_legend().add_gridlines();
//! fig.line("a", [1.0, 2.0, 3.0], vec![10.0, 20.0, 15.0], None, None)?;
//! fig.bar("b", [1.0, 2.0, 3.0], vec![5.0, 8.0, 30.0], None, None)?;
//!
//! let mut canvas = RecordingCanvas::new();
//! fig.draw(&mut canvas, &HeuristicTextMeasurer)?;
//! assert!(!canvas.commands.is_empty());
//! # Ok::<(), pixchart::ChartError>(())
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod canvas;
mod chart_area;
mod error;
mod figure;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod label;
mod layout;
mod legend;
mod paint_order;
mod series;
mod style;
mod ticks;

pub use axis::{Axis, AxisDomain, AxisPlan, DomainSource, Tick, TickValue};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TextAnchor, TextRun};
pub use chart_area::DataTransform;
pub use error::{ChartError, ChartResult};
pub use figure::{Figure, FigurePlan};
pub use format::format_tick;
pub use label::{Label, LabelKind};
pub use layout::{FigureLayout, LayoutSpec, Region, RegionKind};
pub use legend::{LegendItem, LegendLayout, LegendLine};
pub use paint_order::Layer;
pub use series::{ChartKind, Series, SeriesStore, Upsert, Value, XData, XDataType, XValue};
pub use style::{DEFAULT_PALETTE, FigureStyle, GridStyle};
pub use ticks::{NiceTicks, TickStep, nice_ticks};

pub use pixchart_text::{
    FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextRotation, TextStyle,
};
