// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for nice tick generation.

use pixchart::nice_ticks;
use proptest::prelude::*;

proptest! {
    #[test]
    fn ticks_are_ascending_bounded_and_on_step(
        min in -1.0e4_f64..1.0e4,
        span in 1.0e-2_f64..1.0e6,
        max_ticks in 3_usize..20,
    ) {
        let max = min + span;
        let ticks = nice_ticks(min, max, max_ticks).unwrap();
        let step = ticks.step.step;

        prop_assert!(ticks.values.len() <= max_ticks + 1);
        prop_assert!(ticks.values.windows(2).all(|w| w[0] < w[1]));
        for v in &ticks.values {
            let k = v / step;
            prop_assert!((k - k.round()).abs() < 1e-6, "{v} is not a multiple of {step}");
        }
        let tol = step * 1e-6;
        prop_assert!(ticks.first().unwrap() <= min + tol);
        prop_assert!(ticks.last().unwrap() >= max - tol);
    }

    #[test]
    fn clipping_stays_inside_the_limit(
        min in -1.0e3_f64..1.0e3,
        span in 1.0_f64..1.0e4,
    ) {
        let max = min + span;
        let mut ticks = nice_ticks(min, max, 10).unwrap();
        ticks.clip(min, max);
        prop_assert!(ticks.values.iter().all(|v| *v >= min && *v <= max));
    }
}
