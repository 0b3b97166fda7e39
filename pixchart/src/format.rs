// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

use alloc::format;
use alloc::string::String;

/// Formats a numeric tick with a fixed number of decimals.
///
/// `decimals` normally comes from [`crate::TickStep::decimals`] so every label
/// on an axis has the same precision. Negative zero prints as `0`.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&s[1..]);
    }
    s
}
