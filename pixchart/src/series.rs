// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named series and the store that keeps them consistent.
//!
//! A figure shares one x axis between all of its series, so the first series
//! fixes whether that axis is numeric or categorical and every later series
//! must agree. Series are keyed by name: re-adding a name replaces its data
//! in place, which is how a redraw loop feeds fresh samples without the legend
//! or stacking order shuffling.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Whether an x axis holds numbers or category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XDataType {
    /// Continuous numeric values.
    Numeric,
    /// String category labels.
    Categorical,
}

/// A dynamically typed input value.
///
/// Typed inputs (`Vec<f64>`, `Vec<&str>`) convert straight into [`XData`]; this
/// is for callers whose data arrives untyped and must be checked.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The x samples of one series: all numeric or all categorical.
#[derive(Clone, Debug, PartialEq)]
pub enum XData {
    /// Numeric x values.
    Numeric(Vec<f64>),
    /// Category labels.
    Categorical(Vec<String>),
}

impl XData {
    /// Builds x data from untyped values.
    ///
    /// Fails with [`ChartError::InvalidDataType`] if numbers and strings are mixed.
    pub fn from_values(values: Vec<Value>) -> ChartResult<Self> {
        match values.first() {
            None | Some(Value::Number(_)) => values
                .into_iter()
                .map(|v| match v {
                    Value::Number(n) => Ok(n),
                    Value::Text(t) => Err(ChartError::InvalidDataType(alloc::format!(
                        "x data mixes numbers with the string `{t}`"
                    ))),
                })
                .collect::<ChartResult<Vec<_>>>()
                .map(Self::Numeric),
            Some(Value::Text(_)) => values
                .into_iter()
                .map(|v| match v {
                    Value::Text(t) => Ok(t),
                    Value::Number(n) => Err(ChartError::InvalidDataType(alloc::format!(
                        "x data mixes strings with the number {n}"
                    ))),
                })
                .collect::<ChartResult<Vec<_>>>()
                .map(Self::Categorical),
        }
    }

    /// The axis type these values need.
    pub fn data_type(&self) -> XDataType {
        match self {
            Self::Numeric(_) => XDataType::Numeric,
            Self::Categorical(_) => XDataType::Categorical,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, if this is numeric data.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Categorical(_) => None,
        }
    }

    /// The category labels, if this is categorical data.
    pub fn as_categorical(&self) -> Option<&[String]> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(v) => Some(v),
        }
    }
}

impl From<Vec<f64>> for XData {
    fn from(value: Vec<f64>) -> Self {
        Self::Numeric(value)
    }
}

impl From<&[f64]> for XData {
    fn from(value: &[f64]) -> Self {
        Self::Numeric(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for XData {
    fn from(value: [f64; N]) -> Self {
        Self::Numeric(value.to_vec())
    }
}

impl From<Vec<String>> for XData {
    fn from(value: Vec<String>) -> Self {
        Self::Categorical(value)
    }
}

impl From<Vec<&str>> for XData {
    fn from(value: Vec<&str>) -> Self {
        Self::Categorical(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for XData {
    fn from(value: [&str; N]) -> Self {
        Self::Categorical(value.iter().map(|s| String::from(*s)).collect())
    }
}

/// How a series is drawn, with its kind-specific size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartKind {
    /// Connected line segments of the given stroke width.
    Line {
        /// Stroke width in pixels.
        width: f64,
    },
    /// Vertical bars from the zero line.
    Bar {
        /// Bar width in pixels; `None` uses two thirds of the x gap.
        width: Option<f64>,
    },
    /// Filled circle markers.
    Scatter {
        /// Marker radius in pixels.
        radius: f64,
    },
}

/// One named dataset plus how to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    xdata: XData,
    ydata: Vec<f64>,
    kind: ChartKind,
    color: Color,
}

impl Series {
    /// Creates a validated series.
    ///
    /// Rejects empty data ([`ChartError::EmptyData`]), unequal lengths
    /// ([`ChartError::LengthMismatch`]) and non-finite numbers
    /// ([`ChartError::InvalidDataType`]).
    pub fn new(
        name: impl Into<String>,
        xdata: impl Into<XData>,
        ydata: impl Into<Vec<f64>>,
        kind: ChartKind,
        color: Color,
    ) -> ChartResult<Self> {
        let name = name.into();
        let xdata = xdata.into();
        let ydata = ydata.into();
        validate(&name, &xdata, &ydata)?;
        Ok(Self {
            name,
            xdata,
            ydata,
            kind,
            color,
        })
    }

    /// The unique series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The x samples.
    pub fn xdata(&self) -> &XData {
        &self.xdata
    }

    /// The y samples.
    pub fn ydata(&self) -> &[f64] {
        &self.ydata
    }

    /// How the series is drawn.
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Stroke/fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Iterates `(x, y)` sample pairs.
    pub fn points(&self) -> impl Iterator<Item = (XValue<'_>, f64)> + '_ {
        let xs: Box<dyn Iterator<Item = XValue<'_>>> = match &self.xdata {
            XData::Numeric(v) => Box::new(v.iter().map(|x| XValue::Number(*x))),
            XData::Categorical(v) => Box::new(v.iter().map(|x| XValue::Category(x.as_str()))),
        };
        xs.zip(self.ydata.iter().copied())
    }
}

/// A borrowed x sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum XValue<'a> {
    /// A numeric x value.
    Number(f64),
    /// A category label.
    Category(&'a str),
}

fn validate(name: &str, xdata: &XData, ydata: &[f64]) -> ChartResult<()> {
    if xdata.is_empty() && ydata.is_empty() {
        return Err(ChartError::EmptyData(name.into()));
    }
    if xdata.len() != ydata.len() {
        return Err(ChartError::LengthMismatch {
            x: xdata.len(),
            y: ydata.len(),
        });
    }
    if let Some(y) = ydata.iter().find(|y| !y.is_finite()) {
        return Err(ChartError::InvalidDataType(alloc::format!(
            "y data of `{name}` contains the non-finite value {y}"
        )));
    }
    if let Some(x) = xdata
        .as_numeric()
        .and_then(|xs| xs.iter().find(|x| !x.is_finite()))
    {
        return Err(ChartError::InvalidDataType(alloc::format!(
            "x data of `{name}` contains the non-finite value {x}"
        )));
    }
    Ok(())
}

/// Outcome of [`SeriesStore::add_or_update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// A new series was appended at this index.
    Inserted(usize),
    /// The series at this index had its data replaced.
    Updated(usize),
}

/// Insertion-ordered series keyed by name, sharing one x axis type.
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    series: Vec<Series>,
    index: HashMap<String, usize>,
    x_type: Option<XDataType>,
}

impl SeriesStore {
    /// Creates an empty store with no x axis type yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The x axis type, once the first series (or an axis limit) fixed it.
    pub fn x_type(&self) -> Option<XDataType> {
        self.x_type
    }

    /// Fixes the x axis type without adding a series.
    ///
    /// Succeeds if the type is unset or already `ty`.
    pub fn lock_x_type(&mut self, ty: XDataType) -> ChartResult<()> {
        self.check_x_type("", ty)?;
        self.x_type = Some(ty);
        Ok(())
    }

    fn check_x_type(&self, name: &str, found: XDataType) -> ChartResult<()> {
        match self.x_type {
            Some(expected) if expected != found => Err(ChartError::AxisTypeMismatch {
                name: name.into(),
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }

    /// Inserts `series`, or replaces the data of the stored series with the same name.
    ///
    /// An update keeps the stored kind, color and position; only `xdata` and
    /// `ydata` are taken from `series`. On error the store is unchanged.
    pub fn add_or_update(&mut self, series: Series) -> ChartResult<Upsert> {
        let found = series.xdata.data_type();
        self.check_x_type(&series.name, found)?;

        if let Some(&idx) = self.index.get(series.name.as_str()) {
            let slot = self
                .series
                .get_mut(idx)
                .ok_or_else(|| ChartError::MissingChart(series.name.clone()))?;
            debug!(name = %series.name, points = series.ydata.len(), "updated series");
            slot.xdata = series.xdata;
            slot.ydata = series.ydata;
            return Ok(Upsert::Updated(idx));
        }

        let idx = self.series.len();
        debug!(name = %series.name, points = series.ydata.len(), "inserted series");
        self.x_type = Some(found);
        self.index.insert(series.name.clone(), idx);
        self.series.push(series);
        Ok(Upsert::Inserted(idx))
    }

    /// Looks a series up by name.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.index.get(name).and_then(|&i| self.series.get(i))
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if no series are stored.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// All x samples of all series.
    ///
    /// Numeric axes concatenate in insertion order, duplicates included.
    /// Categorical axes are deduplicated and sorted lexicographically, so the
    /// axis order is alphabetical rather than first-seen. Returns `None` while
    /// the store is empty.
    pub fn combined_x_data(&self) -> Option<XData> {
        if self.series.is_empty() {
            return None;
        }
        Some(match self.x_type? {
            XDataType::Numeric => XData::Numeric(
                self.series
                    .iter()
                    .filter_map(|s| s.xdata.as_numeric())
                    .flatten()
                    .copied()
                    .collect(),
            ),
            XDataType::Categorical => {
                let mut all: Vec<String> = self
                    .series
                    .iter()
                    .filter_map(|s| s.xdata.as_categorical())
                    .flatten()
                    .cloned()
                    .collect();
                all.sort_unstable();
                all.dedup();
                XData::Categorical(all)
            }
        })
    }

    /// All y samples of all series, deduplicated and sorted ascending.
    pub fn combined_y_data(&self) -> Vec<f64> {
        let mut all: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.ydata.iter().copied())
            .collect();
        all.sort_unstable_by(f64::total_cmp);
        all.dedup();
        all
    }

    /// `(min, max)` over all numeric x samples.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(
            self.series
                .iter()
                .filter_map(|s| s.xdata.as_numeric())
                .flatten()
                .copied(),
        )
    }

    /// `(min, max)` over all y samples.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.series.iter().flat_map(|s| s.ydata.iter().copied()))
    }
}

impl<'a> IntoIterator for &'a SeriesStore {
    type Item = &'a Series;
    type IntoIter = core::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn line(name: &str, x: impl Into<XData>, y: Vec<f64>) -> Series {
        Series::new(name, x, y, ChartKind::Line { width: 2.0 }, css::BLUE).unwrap()
    }

    #[test]
    fn mixed_values_are_rejected() {
        let err = XData::from_values(vec![Value::from(1.0), Value::from("b")]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDataType(_)));
        let err = XData::from_values(vec![Value::from("a"), Value::from(2)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDataType(_)));
        let ok = XData::from_values(vec![Value::from("a"), Value::from("b")]).unwrap();
        assert_eq!(ok.data_type(), XDataType::Categorical);
    }

    #[test]
    fn series_validation() {
        let kind = ChartKind::Scatter { radius: 3.0 };
        let err = Series::new("e", Vec::<f64>::new(), vec![], kind, css::RED).unwrap_err();
        assert_eq!(err, ChartError::EmptyData("e".into()));

        let err = Series::new("l", [1.0, 2.0], vec![1.0], kind, css::RED).unwrap_err();
        assert_eq!(err, ChartError::LengthMismatch { x: 2, y: 1 });

        let err = Series::new("n", [1.0], vec![f64::NAN], kind, css::RED).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDataType(_)));
    }

    #[test]
    fn update_keeps_position_and_style() {
        let mut store = SeriesStore::new();
        store.add_or_update(line("a", [1.0, 2.0], vec![1.0, 2.0])).unwrap();
        store.add_or_update(line("b", [1.0, 2.0], vec![3.0, 4.0])).unwrap();

        let replacement = Series::new(
            "a",
            [5.0, 6.0, 7.0],
            vec![9.0, 8.0, 7.0],
            ChartKind::Bar { width: None },
            css::GREEN,
        )
        .unwrap();
        assert_eq!(store.add_or_update(replacement).unwrap(), Upsert::Updated(0));

        let names: Vec<&str> = store.iter().map(Series::name).collect();
        assert_eq!(names, ["a", "b"]);
        let a = store.get("a").unwrap();
        assert_eq!(a.ydata(), &[9.0, 8.0, 7.0]);
        assert_eq!(a.kind(), ChartKind::Line { width: 2.0 });
        assert_eq!(a.color(), css::BLUE);
    }

    #[test]
    fn categorical_after_numeric_is_a_mismatch() {
        let mut store = SeriesStore::new();
        store.add_or_update(line("num", [1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0])).unwrap();
        let err = store
            .add_or_update(line("cat", ["a", "b", "c"], vec![1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(err, ChartError::AxisTypeMismatch { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("num").unwrap().ydata(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn locked_numeric_axis_rejects_categories() {
        let mut store = SeriesStore::new();
        store.lock_x_type(XDataType::Numeric).unwrap();
        assert!(store.add_or_update(line("c", ["x"], vec![1.0])).is_err());
        assert!(store.is_empty());
        assert!(store.lock_x_type(XDataType::Categorical).is_err());
    }

    #[test]
    fn combined_data() {
        let mut store = SeriesStore::new();
        store.add_or_update(line("a", ["b", "a", "c"], vec![3.0, 1.0, 3.0])).unwrap();
        store.add_or_update(line("b", ["d", "a"], vec![2.0, 1.0])).unwrap();

        let x = store.combined_x_data().unwrap();
        assert_eq!(x.as_categorical().unwrap(), ["a", "b", "c", "d"]);
        assert_eq!(store.combined_y_data(), vec![1.0, 2.0, 3.0]);
        assert_eq!(store.y_bounds(), Some((1.0, 3.0)));
        assert_eq!(store.x_bounds(), None);
    }

    #[test]
    fn numeric_x_concatenates_with_duplicates() {
        let mut store = SeriesStore::new();
        store.add_or_update(line("a", [3.0, 1.0], vec![0.0, 0.0])).unwrap();
        store.add_or_update(line("b", [1.0, 7.0], vec![0.0, 0.0])).unwrap();
        let x = store.combined_x_data().unwrap();
        assert_eq!(x.as_numeric().unwrap(), &[3.0, 1.0, 1.0, 7.0]);
        assert_eq!(store.x_bounds(), Some((1.0, 7.0)));
    }
}
