// Copyright 2025 the pixchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws two figures side by side on one SVG canvas.
//!
//! The left figure is redrawn over a handful of frames while its series are
//! upserted, the way an interactive loop would feed it. The last frame is
//! written to `pixchart_demo.svg`. Set `RUST_LOG=pixchart=debug` to see the
//! layout pass.

mod svg;

use std::error::Error;
use std::f64::consts::TAU;

use kurbo::{Point, Size};
use peniko::color::palette::css;
use pixchart::{Figure, FigureStyle, HeuristicTextMeasurer, Value, XData};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FRAMES: usize = 30;
const CANVAS: Size = Size::new(820.0, 340.0);

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let measurer = HeuristicTextMeasurer;

    let mut signal = Figure::new(Point::new(10.0, 20.0), Size::new(400.0, 300.0));
    signal
        .add_title("Signal")
        .add_legend()
        .add_gridlines()
        .add_x_axis_label("t")
        .add_y_axis_label("amplitude");
    if let Err(err) = signal.set_ylim(-1.5, 1.5) {
        warn!(%err, "keeping automatic y limits");
    }

    let mut fruit = Figure::new(Point::new(420.0, 20.0), Size::new(390.0, 300.0))
        .with_style(FigureStyle::default().with_background(css::IVORY));
    fruit.add_title("Harvest").add_legend().add_gridlines();
    let names: Vec<Value> = ["pear", "apple", "fig", "plum"]
        .into_iter()
        .map(Value::from)
        .collect();
    fruit.bar(
        "2024",
        XData::from_values(names.clone())?,
        vec![12.0, 30.0, 7.0, 18.0],
        None,
        None,
    )?;
    fruit.scatter(
        "target",
        XData::from_values(names)?,
        vec![15.0, 25.0, 10.0, 20.0],
        Some(css::CRIMSON),
        Some(4.0),
    )?;

    let mut canvas = svg::SvgCanvas::new();
    for frame in 0..FRAMES {
        let phase = frame as f64 / FRAMES as f64 * TAU;
        let t: Vec<f64> = (0..=40).map(|i| f64::from(i) * 0.25).collect();
        let wave: Vec<f64> = t.iter().map(|x| (x + phase).sin()).collect();
        let envelope: Vec<f64> = t.iter().map(|x| 0.5 * (0.5 * x + phase).cos()).collect();
        let samples: Vec<f64> = t.iter().step_by(4).map(|x| (x + phase).sin()).collect();
        let sample_t: Vec<f64> = t.iter().step_by(4).copied().collect();

        signal.line("wave", t.clone(), wave, None, None)?;
        signal.bar("envelope", t, envelope, None, Some(3.0))?;
        signal.scatter("samples", sample_t, samples, None, None)?;

        canvas = svg::SvgCanvas::new();
        let plan = signal.draw(&mut canvas, &measurer)?;
        fruit.draw(&mut canvas, &measurer)?;
        info!(
            frame,
            x_ticks = plan.x_axis.ticks.len(),
            y_ticks = plan.y_axis.ticks.len(),
            "drew frame"
        );
    }

    std::fs::write("pixchart_demo.svg", canvas.to_svg_string(CANVAS))?;
    println!("wrote pixchart_demo.svg");
    Ok(())
}
