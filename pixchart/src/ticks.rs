// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice number" tick generation.
//!
//! Ticks are placed at multiples of a step from the 1-2-5 family scaled by the
//! power of ten of the data span. The smallest step whose covering tick range
//! still fits in the requested tick budget wins, so a chart gets as many
//! gridlines as it asked for without ever landing on awkward values like 7 or
//! 0.3.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{ChartError, ChartResult};

/// Normalized step candidates, largest first.
const STEP_CANDIDATES: [f64; 9] = [5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01];

/// Slack applied before flooring/ceiling `value / step`, absorbing float noise
/// such as `0.3 / 0.1 == 2.9999999999999996`.
const EPSILON: f64 = 1e-9;

/// A resolved tick step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStep {
    /// Distance between consecutive ticks in data units.
    pub step: f64,
    /// Decimal places needed to print any multiple of `step` exactly.
    pub decimals: usize,
}

impl TickStep {
    fn new(step: f64) -> Self {
        let magnitude = (step.log10() + EPSILON).floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "step magnitudes are bounded by the f64 exponent range"
        )]
        let decimals = if magnitude < 0.0 {
            (-magnitude) as usize
        } else {
            0
        };
        Self { step, decimals }
    }

    /// Rounds `value` to this step's decimal precision.
    pub fn round(&self, value: f64) -> f64 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "decimals never exceeds a few hundred"
        )]
        let p = 10_f64.powi(self.decimals as i32);
        (value * p).round() / p
    }
}

/// The output of [`nice_ticks`].
#[derive(Clone, Debug, PartialEq)]
pub struct NiceTicks {
    /// The chosen step.
    pub step: TickStep,
    /// Tick values, strictly ascending.
    pub values: Vec<f64>,
}

impl NiceTicks {
    /// Smallest tick value.
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Largest tick value.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Drops ticks outside `[min, max]`; ticks exactly on a bound are kept.
    pub fn clip(&mut self, min: f64, max: f64) {
        self.values.retain(|v| *v >= min && *v <= max);
    }
}

/// Generates "nice" tick values covering `[min, max]`.
///
/// The returned ticks start at or below `min` and end at or above `max`, so
/// callers either widen their domain to the outermost ticks or
/// [`clip`](NiceTicks::clip) them to an exact domain. At most `max_ticks + 1`
/// ticks are produced (`max_ticks` intervals) unless even the coarsest step
/// does not fit, in which case the coarsest step is used anyway.
///
/// Fails with [`ChartError::DegenerateDomain`] unless `max > min` and both are
/// finite.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> ChartResult<NiceTicks> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Err(ChartError::DegenerateDomain {
            axis: "data",
            value: min,
        });
    }

    let scale = 10_f64.powi(magnitude(span));
    let budget = max_ticks as f64;

    let mut chosen = STEP_CANDIDATES[0] * scale;
    for (i, candidate) in STEP_CANDIDATES.iter().enumerate() {
        let step = candidate * scale;
        let (lo, hi) = covering_range(min, max, step);
        if hi - lo > budget {
            if i > 0 {
                break;
            }
            // Even the coarsest step overflows; keep it.
            chosen = step;
            break;
        }
        chosen = step;
    }

    let step = TickStep::new(chosen);
    let (lo, hi) = covering_range(min, max, chosen);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "covering_range returns integral values bounded by the tick budget"
    )]
    let (lo, hi) = (lo as i64, hi as i64);
    let values = (lo..=hi)
        .map(|k| step.round(k as f64 * chosen))
        .collect();
    Ok(NiceTicks { step, values })
}

/// `floor(log10(span))` as an exponent.
fn magnitude(span: f64) -> i32 {
    let m = span.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 is within [-324, 309]"
    )]
    {
        m as i32
    }
}

/// Integer multiples of `step` bracketing `[min, max]`.
fn covering_range(min: f64, max: f64, step: f64) -> (f64, f64) {
    ((min / step + EPSILON).floor(), (max / step - EPSILON).ceil())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn zero_to_ninety_seven_widens_to_one_hundred() {
        let ticks = nice_ticks(0.0, 97.0, 10).unwrap();
        assert_eq!(ticks.step.step, 10.0);
        assert_eq!(
            ticks.values,
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn combined_y_of_five_to_thirty_steps_by_five() {
        let ticks = nice_ticks(5.0, 30.0, 10).unwrap();
        assert_eq!(ticks.step.step, 5.0);
        assert_eq!(ticks.first(), Some(5.0));
        assert_eq!(ticks.last(), Some(30.0));
    }

    #[test]
    fn fractional_domain_rounds_away_float_noise() {
        let ticks = nice_ticks(0.3, 0.7, 10).unwrap();
        assert_eq!(ticks.step.decimals, 2);
        assert_eq!(ticks.values, vec![0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7]);
    }

    #[test]
    fn negative_domains_are_supported() {
        let ticks = nice_ticks(-42.0, -3.0, 5).unwrap();
        assert_eq!(ticks.step.step, 10.0);
        assert_eq!(ticks.values, vec![-50.0, -40.0, -30.0, -20.0, -10.0, 0.0]);
    }

    #[test]
    fn large_budget_falls_through_to_the_finest_step() {
        let ticks = nice_ticks(0.0, 1.0, 1000).unwrap();
        assert!((ticks.step.step - 0.01).abs() < 1e-12);
        assert_eq!(ticks.values.len(), 101);
    }

    #[test]
    fn tiny_budget_keeps_the_coarsest_step() {
        let ticks = nice_ticks(1.0, 9.0, 0).unwrap();
        assert_eq!(ticks.step.step, 5.0);
        assert_eq!(ticks.values, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn clip_keeps_ticks_on_the_bounds() {
        let mut ticks = nice_ticks(5.0, 35.0, 10).unwrap();
        ticks.clip(5.0, 35.0);
        assert_eq!(ticks.first(), Some(5.0));
        assert_eq!(ticks.last(), Some(35.0));
    }

    #[test]
    fn zero_span_is_degenerate() {
        let err = nice_ticks(4.0, 4.0, 10).unwrap_err();
        assert!(matches!(err, ChartError::DegenerateDomain { .. }));
        assert!(nice_ticks(4.0, 1.0, 10).is_err());
        assert!(nice_ticks(0.0, f64::INFINITY, 10).is_err());
    }
}
