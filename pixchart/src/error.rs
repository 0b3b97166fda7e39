// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for figure configuration and drawing.

use alloc::string::String;

use thiserror::Error;

use crate::series::XDataType;

/// Errors raised while configuring or drawing a [`crate::Figure`].
///
/// Data validation errors reject the offending call and leave the figure
/// untouched. [`ChartError::InvalidAxisLimit`] is recoverable: the figure keeps
/// auto-computing that axis. [`ChartError::DegenerateDomain`] and
/// [`ChartError::NoData`] only surface from a draw.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// A value has the wrong type: non-finite numbers, or x data mixing numbers and strings.
    #[error("invalid data type: {0}")]
    InvalidDataType(String),

    /// `xdata` and `ydata` have different lengths.
    #[error("length of x ({x}) and y ({y}) must be equal")]
    LengthMismatch {
        /// Number of x values.
        x: usize,
        /// Number of y values.
        y: usize,
    },

    /// A series was given no points.
    #[error("series `{0}` has no data")]
    EmptyData(String),

    /// The x axis type of a series conflicts with the figure's established type.
    #[error("x axis is {expected:?} but series `{name}` has {found:?} x data")]
    AxisTypeMismatch {
        /// Name of the rejected series (empty when an axis limit caused the conflict).
        name: String,
        /// Type the figure already committed to.
        expected: XDataType,
        /// Type of the rejected input.
        found: XDataType,
    },

    /// An explicit axis limit is not finite or not strictly increasing.
    #[error("invalid {axis} axis limit ({min}, {max}): max must be greater than min")]
    InvalidAxisLimit {
        /// `"x"` or `"y"`.
        axis: &'static str,
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// The data span of an axis is zero, so no ticks can be generated.
    #[error("degenerate {axis} domain: min and max are both {value}")]
    DegenerateDomain {
        /// `"x"` or `"y"`.
        axis: &'static str,
        /// The collapsed bound.
        value: f64,
    },

    /// An axis has neither data nor an explicit limit at draw time.
    #[error("no data for the {0} axis")]
    NoData(&'static str),

    /// An update targeted a series name that is not stored.
    #[error("no series named `{0}`")]
    MissingChart(String),
}

/// Result type for figure operations.
pub type ChartResult<T> = Result<T, ChartError>;
