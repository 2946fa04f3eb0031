// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image map basics: build polygons, install them, and feed a gesture.
//!
//! This example shows how to:
//! - assemble polygons vertex by vertex and close them,
//! - install them on an `ImageMap` with a receiver,
//! - see which pointer actions actually trigger a lookup.
//!
//! Run:
//! - `cargo run -p understory_demos --example image_map_basics`
//! - `RUST_LOG=understory_image_map=trace cargo run -p understory_demos --example image_map_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_image_map::{ImageMap, PointerAction};
use understory_polygon::{Polygon, PolygonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    North,
    South,
    Lake,
}

fn region(id: Region, vertices: &[Point]) -> Result<Polygon<Region>, PolygonError> {
    let mut polygon = Polygon::new_open();
    polygon.set_id(Some(id));
    polygon.add_vertices(vertices)?;
    polygon.close()?;
    Ok(polygon)
}

fn main() -> Result<(), PolygonError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let polygons = vec![
        region(
            Region::North,
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(0.0, 50.0),
            ],
        )?,
        region(
            Region::South,
            &[
                Point::new(0.0, 50.0),
                Point::new(100.0, 50.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        )?,
        // A concave lake straddling the border.
        region(
            Region::Lake,
            &[
                Point::new(30.0, 30.0),
                Point::new(70.0, 30.0),
                Point::new(70.0, 70.0),
                Point::new(50.0, 55.0),
                Point::new(30.0, 70.0),
            ],
        )?,
    ];

    // Closing twice is reported, not ignored.
    let mut lake = polygons[2].clone();
    if let Err(err) = lake.close() {
        println!("closing again: {err} ({:?})", err.kind());
    }

    let mut map: ImageMap<Region, &'static str> = ImageMap::new();
    map.set_polygons(polygons);
    map.set_valid_area(Rect::new(0.0, 0.0, 100.0, 100.0));
    map.set_receiver(|event: &&'static str, point: Point, hits: &[&Polygon<Region>]| {
        let regions: Vec<Region> = hits.iter().filter_map(|p| p.id().copied()).collect();
        println!("{event}: ({:.1}, {:.1}) -> {regions:?}", point.x, point.y);
    });

    // Only the release resolves.
    for (event, raw, action) in [
        ("down", Point::new(40.0, 40.0), PointerAction::Down),
        ("move", Point::new(45.0, 42.0), PointerAction::Move),
        ("up", Point::new(45.0, 42.0), PointerAction::Up),
        ("notch", Point::new(50.0, 65.0), PointerAction::Up),
        ("edge", Point::new(100.0, 20.0), PointerAction::Up),
    ] {
        let delivered = map.handle_pointer(&event, raw, action);
        if !delivered {
            println!("{event}: {action:?} ignored");
        }
    }

    Ok(())
}
