// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forecast areas.
//!
//! Grid two outlook polygons, once filled and once as outlines, and print the
//! covered cells as a character map.
//!
//! Run:
//! - `cargo run -p gridder_demos --example forecast_areas`

use gridder::{BackendKind, CellCoord, CellReference, GridError, GridOptions, Gridder, PolygonMode};
use kurbo::Point;
use ndarray::Array2;

fn render(title: &str, gridder: &Gridder, areas: &[Vec<CellCoord>]) {
    let (rows, cols) = gridder.grid().shape();
    let mut map = Array2::from_elem((rows, cols), '.');
    for (k, cells) in areas.iter().enumerate() {
        let mark = char::from(b'A' + (k % 26) as u8);
        for cell in cells {
            map[cell.to_index()] = mark;
        }
    }
    println!("{title}:");
    for row in map.rows().into_iter().rev() {
        println!("  {}", row.iter().collect::<String>());
    }
}

fn main() -> Result<(), GridError> {
    env_logger::init();

    // These coordinates already are cell centers, one unit apart.
    let tx = Array2::from_shape_fn((16, 24), |(_, j)| j as f64);
    let ty = Array2::from_shape_fn((16, 24), |(i, _)| i as f64);
    let options = GridOptions::new()
        .with_reference(CellReference::Center)
        .with_backend(BackendKind::UniformGrid)
        .with_max_distance(1.0);
    let gridder = Gridder::new(tx, ty, options)?;

    let rings = vec![
        vec![
            Point::new(2.0, 2.0),
            Point::new(10.0, 1.0),
            Point::new(12.0, 8.0),
            Point::new(4.0, 11.0),
        ],
        // Concave outline to the east.
        vec![
            Point::new(14.0, 3.0),
            Point::new(22.0, 3.0),
            Point::new(22.0, 13.0),
            Point::new(18.0, 7.0),
            Point::new(14.0, 13.0),
        ],
        // Collapses to a line once snapped; only its outline cells remain.
        vec![Point::new(3.0, 14.0), Point::new(8.0, 14.0), Point::new(12.0, 14.2)],
    ];

    let filled = gridder.grid_rings(&rings, PolygonMode::Fill)?;
    let outlines = gridder.grid_rings(&rings, PolygonMode::Perimeter)?;
    println!("{} of {} areas kept", filled.len(), rings.len());
    render("filled", &gridder, &filled);
    render("outlines", &gridder, &outlines);
    Ok(())
}
