// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Insets, Point, Size};
use understory_image_map::{ContentLayout, DisplayDensity, ImageMap, PointerAction, hit_test};
use understory_polygon::Polygon;

/// Cell pitch of the generated grid, in logical units.
const CELL: f64 = 10.0;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A `side` x `side` grid of hexagons, one per cell, inset from the cell edge.
fn hexagon_grid(side: u32) -> Vec<Polygon<u32>> {
    let mut polygons = Vec::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let x = f64::from(col) * CELL;
            let y = f64::from(row) * CELL;
            let vertices = [
                Point::new(x + 3.0, y + 1.0),
                Point::new(x + 7.0, y + 1.0),
                Point::new(x + 9.0, y + 5.0),
                Point::new(x + 7.0, y + 9.0),
                Point::new(x + 3.0, y + 9.0),
                Point::new(x + 1.0, y + 5.0),
            ];
            polygons.push(
                Polygon::new(Some(row * side + col), &vertices).expect("six vertices close"),
            );
        }
    }
    polygons
}

/// Random release points over the whole view, in view pixels.
fn releases(count: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn image_map_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_image_map");

    for &side in &[8_u32, 32, 128] {
        let extent = f64::from(side) * CELL;
        let polygons = hexagon_grid(side);

        // 2x density with 8px padding on every side.
        let layout = ContentLayout::new(Size::new(extent * 2.0 + 16.0, extent * 2.0 + 16.0))
            .with_padding(Insets::uniform(8.0))
            .with_image_transform(Affine::IDENTITY)
            .with_density(DisplayDensity::uniform(320.0));
        let mut map: ImageMap<u32> = ImageMap::new();
        map.set_polygons(polygons.iter().cloned());
        map.apply_layout(&layout);
        map.set_receiver(|_: &(), _: Point, _: &[&Polygon<u32>]| {});

        let points = releases(1024, extent * 2.0 + 16.0, 0x1A6E_0000_0000_0001);

        group.bench_with_input(
            BenchmarkId::new("hit_test", side * side),
            &points,
            |b, points| {
                let transform = map.transform();
                let area = map.valid_area();
                b.iter(|| {
                    let mut hits = 0_usize;
                    for &raw in points {
                        hits += hit_test(&polygons, &transform, area, black_box(raw))
                            .polygons
                            .len();
                    }
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("handle_pointer", side * side),
            &points,
            |b, points| {
                b.iter(|| {
                    for &raw in points {
                        black_box(map.handle_pointer(&(), black_box(raw), PointerAction::Up));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ignored_move", side * side),
            &points,
            |b, points| {
                b.iter(|| {
                    for &raw in points {
                        black_box(map.query(black_box(raw), PointerAction::Move).is_ignored());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, image_map_query);
criterion_main!(benches);
