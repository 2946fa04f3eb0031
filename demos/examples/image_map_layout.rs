// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image map layout: padded view, fitted image, high-density screen.
//!
//! This example shows how a host describes its view with a `ContentLayout`
//! so that view-pixel releases come back in logical image coordinates, and
//! how the debug outlines line up with the drawn image.
//!
//! Run:
//! - `cargo run -p understory_demos --example image_map_layout`

use kurbo::{Affine, Insets, PathEl, Point, Shape, Size};
use tracing_subscriber::EnvFilter;
use understory_image_map::{ContentLayout, DisplayDensity, ImageMap, PointerAction};
use understory_polygon::{Polygon, PolygonError};

fn main() -> Result<(), PolygonError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "understory_image_map=debug"
                .parse()
                .expect("static directive parses"),
        ))
        .init();

    // Authored against a 200x100 logical image.
    let button = Polygon::new(
        Some("button"),
        &[
            Point::new(20.0, 20.0),
            Point::new(80.0, 20.0),
            Point::new(80.0, 60.0),
            Point::new(20.0, 60.0),
        ],
    )?;
    let badge = Polygon::new(
        Some("badge"),
        &[
            Point::new(150.0, 10.0),
            Point::new(190.0, 50.0),
            Point::new(150.0, 90.0),
            Point::new(110.0, 50.0),
        ],
    )?;

    // A 480 dpi screen draws the image at 3 pixels per logical unit. The host
    // fits it at half size and centers it vertically in a padded view.
    let layout = ContentLayout::new(Size::new(340.0, 200.0))
        .with_padding(Insets::new(20.0, 10.0, 20.0, 10.0))
        .with_image_transform(Affine::scale(0.5).then_translate((0.0, 15.0).into()))
        .with_density(DisplayDensity::uniform(480.0));

    let mut map: ImageMap<&'static str> = ImageMap::new();
    map.set_polygons([button, badge]);
    map.apply_layout(&layout);
    map.set_receiver(|_: &(), point: Point, hits: &[&Polygon<&'static str>]| {
        let names: Vec<&str> = hits.iter().filter_map(|p| p.id().copied()).collect();
        println!("  logical ({:.2}, {:.2}) -> {names:?}", point.x, point.y);
    });

    println!("valid area: {:?}", map.valid_area());
    for raw in [
        Point::new(95.0, 67.5),
        Point::new(245.0, 82.5),
        Point::new(5.0, 5.0),
    ] {
        println!("release at view ({}, {})", raw.x, raw.y);
        map.handle_pointer(&(), raw, PointerAction::Up);
    }

    map.set_path_visible(true);
    for path in map.debug_paths() {
        let corners = path
            .elements()
            .iter()
            .filter(|el| !matches!(el, PathEl::ClosePath))
            .count();
        println!(
            "outline: {corners} vertices, content bounds {:?}",
            path.bounding_box()
        );
    }

    Ok(())
}
