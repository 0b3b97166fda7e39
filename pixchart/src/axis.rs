// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis planning: domains, ticks and tick bands.
//!
//! Planning an axis happens in three steps that mirror the figure's
//! measure/arrange pass:
//! - [`AxisPlan::plan`] resolves the domain and tick values. It depends only on
//!   the series data and any explicit limit.
//! - [`AxisPlan::measure`] sizes the tick band from the tick label strings.
//! - [`AxisPlan::place`] assigns pixel positions once the chart area is known.

use alloc::string::String;
use alloc::vec::Vec;

use pixchart_text::{TextMeasurer, TextRotation, TextStyle};

use crate::chart_area::DataTransform;
use crate::error::{ChartError, ChartResult};
use crate::format::format_tick;
use crate::series::{SeriesStore, XData, XDataType};
use crate::ticks::nice_ticks;

/// Which axis of the figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// `"x"` or `"y"`, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Where the bounds of an [`AxisDomain`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainSource {
    /// An explicit figure limit; never widened.
    Explicit,
    /// Widened from the data to the outermost nice ticks.
    FromTicks,
    /// Taken from the data as is (category indices on a categorical axis).
    FromData,
}

/// The value range an axis represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDomain {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Provenance of the bounds.
    pub source: DomainSource,
}

impl AxisDomain {
    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The value a tick stands for.
#[derive(Clone, Debug, PartialEq)]
pub enum TickValue {
    /// A numeric tick.
    Number(f64),
    /// A category label, with its index on the axis.
    Category(usize, String),
}

/// A labeled reference value with its pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// The data value.
    pub value: TickValue,
    /// Label text.
    pub label: String,
    /// Pixel position along the axis, in figure coordinates. Zero until placed.
    pub position: f64,
}

/// The resolved plan of one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisPlan {
    /// Which axis this plans.
    pub axis: Axis,
    /// Effective domain. Categorical axes use category indices.
    pub domain: AxisDomain,
    /// Sorted distinct categories, for a categorical axis.
    pub categories: Option<Vec<String>>,
    /// Ticks, ascending by pixel position once placed.
    pub ticks: Vec<Tick>,
    /// Decimals used by numeric tick labels.
    pub decimals: usize,
    /// Tick band thickness: height for x, width for y.
    pub thickness: f64,
}

impl AxisPlan {
    /// Resolves the domain and ticks of `axis`.
    ///
    /// An explicit `limit` wins over the data; ticks are then generated from the
    /// exact limit and clipped to it. Without a limit the domain comes from the
    /// data and is widened to the outermost nice ticks.
    pub fn plan(
        axis: Axis,
        store: &SeriesStore,
        limit: Option<(f64, f64)>,
        max_ticks: usize,
    ) -> ChartResult<Self> {
        if axis == Axis::X && store.x_type() == Some(XDataType::Categorical) {
            return Self::plan_categorical(store);
        }

        if let Some((min, max)) = limit {
            let mut ticks = checked_ticks(axis, min, max, max_ticks)?;
            ticks.clip(min, max);
            let domain = AxisDomain {
                min,
                max,
                source: DomainSource::Explicit,
            };
            return Ok(Self::numeric(axis, domain, &ticks.values, ticks.step.decimals));
        }

        let bounds = match axis {
            Axis::X => store.x_bounds(),
            Axis::Y => store.y_bounds(),
        };
        let (min, max) = bounds.ok_or(ChartError::NoData(axis.name()))?;
        let ticks = checked_ticks(axis, min, max, max_ticks)?;
        let domain = AxisDomain {
            min: ticks.first().unwrap_or(min),
            max: ticks.last().unwrap_or(max),
            source: DomainSource::FromTicks,
        };
        Ok(Self::numeric(axis, domain, &ticks.values, ticks.step.decimals))
    }

    fn plan_categorical(store: &SeriesStore) -> ChartResult<Self> {
        let Some(XData::Categorical(categories)) = store.combined_x_data() else {
            return Err(ChartError::NoData("x"));
        };
        let last = categories.len().saturating_sub(1) as f64;
        let ticks = categories
            .iter()
            .enumerate()
            .map(|(i, c)| Tick {
                value: TickValue::Category(i, c.clone()),
                label: c.clone(),
                position: 0.0,
            })
            .collect();
        Ok(Self {
            axis: Axis::X,
            domain: AxisDomain {
                min: 0.0,
                max: last,
                source: DomainSource::FromData,
            },
            categories: Some(categories),
            ticks,
            decimals: 0,
            thickness: 0.0,
        })
    }

    fn numeric(axis: Axis, domain: AxisDomain, values: &[f64], decimals: usize) -> Self {
        let mut ticks: Vec<Tick> = values
            .iter()
            .map(|&v| Tick {
                value: TickValue::Number(v),
                label: format_tick(v, decimals),
                position: 0.0,
            })
            .collect();
        // Screen y grows downwards, so the largest value comes first.
        if axis == Axis::Y {
            ticks.reverse();
        }
        Self {
            axis,
            domain,
            categories: None,
            ticks,
            decimals,
            thickness: 0.0,
        }
    }

    /// Returns `true` for a categorical axis.
    pub fn is_categorical(&self) -> bool {
        self.categories.is_some()
    }

    /// Sizes the tick band: the largest label extent across the axis, plus `padding`.
    pub fn measure(&mut self, measurer: &dyn TextMeasurer, style: &TextStyle, padding: f64) {
        let extent = self
            .ticks
            .iter()
            .map(|t| {
                let (w, h) = measurer.extent(&t.label, style, TextRotation::Horizontal);
                match self.axis {
                    Axis::X => h,
                    Axis::Y => w,
                }
            })
            .fold(0.0_f64, f64::max);
        self.thickness = extent + padding;
    }

    /// Assigns every tick its pixel position under `transform`.
    pub fn place(&mut self, transform: &DataTransform) {
        for tick in &mut self.ticks {
            tick.position = match (&tick.value, self.axis) {
                (TickValue::Number(v), Axis::X) => transform.x_position(*v),
                (TickValue::Category(i, _), Axis::X) => transform.category_position(*i),
                (TickValue::Number(v), Axis::Y) => transform.y_position(*v),
                (TickValue::Category(i, _), Axis::Y) => transform.category_position(*i),
            };
        }
    }
}

fn checked_ticks(
    axis: Axis,
    min: f64,
    max: f64,
    max_ticks: usize,
) -> ChartResult<crate::ticks::NiceTicks> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(ChartError::DegenerateDomain {
            axis: axis.name(),
            value: min,
        });
    }
    nice_ticks(min, max, max_ticks)
}
