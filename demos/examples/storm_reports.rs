// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storm reports.
//!
//! Grid a handful of hail reports (points) and tornado tracks (lines) onto a
//! 40 km grid, count hits per cell, and print the counts.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p gridder_demos --example storm_reports`

use gridder::{GridError, GridOptions, Gridder, HitCounting, accumulate, accumulate_all};
use kurbo::Line;
use ndarray::Array2;

const CELL: f64 = 40_000.0;
const ROWS: usize = 8;
const COLS: usize = 12;

fn main() -> Result<(), GridError> {
    env_logger::init();

    // Projected lower-left corners, in meters.
    let tx = Array2::from_shape_fn((ROWS, COLS), |(_, j)| -200_000.0 + j as f64 * CELL);
    let ty = Array2::from_shape_fn((ROWS, COLS), |(i, _)| 100_000.0 + i as f64 * CELL);
    let gridder = Gridder::new(tx, ty, GridOptions::new().with_max_distance(CELL))?;

    let hail_x = [-150_000.0, -148_000.0, 12_000.0, 95_000.0, 900_000.0];
    let hail_y = [130_000.0, 135_000.0, 210_000.0, 380_000.0, 900_000.0];
    let hail = gridder.grid_points(&hail_x, &hail_y)?;
    log::info!("{} of {} hail reports landed on the grid", hail.len(), hail_x.len());

    let tracks = [
        Line::new((-120_000.0, 150_000.0), (60_000.0, 260_000.0)),
        Line::new((100_000.0, 300_000.0), (180_000.0, 330_000.0)),
        // Starts far off the grid and is skipped as a whole.
        Line::new((-900_000.0, 150_000.0), (0.0, 150_000.0)),
    ];
    let tornadoes = gridder.grid_segments(&tracks)?;
    log::info!("{} of {} tornado tracks rasterized", tornadoes.len(), tracks.len());

    let mut counts = gridder.make_counter_grid();
    accumulate(&mut counts, &hail, HitCounting::EveryHit);
    accumulate_all(&mut counts, &tornadoes, HitCounting::OncePerGeometry);

    println!("report counts (row 0 at the bottom):");
    for row in counts.rows().into_iter().rev() {
        let line: Vec<String> = row
            .iter()
            .map(|&n| if n == 0 { ".".into() } else { n.to_string() })
            .collect();
        println!("  {}", line.join(" "));
    }
    Ok(())
}
