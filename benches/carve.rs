#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Rgba, RgbaImage};
use seamgrid::{FillMode, SeamGrid, SelectionMode};

fn checkerboard() -> RgbaImage {
    ImageBuffer::from_fn(64, 64, |x, y| {
        Rgba([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8, 255])
    })
}

fn carve_benchmark(c: &mut Criterion) {
    let image = checkerboard();
    c.bench_function("carve 32 rounds", move |b| {
        b.iter(|| {
            let mut grid = SeamGrid::from_raster(&image).unwrap();
            grid.carve(32, SelectionMode::NeighbourDifference).unwrap()
        })
    });
}

fn render_benchmark(c: &mut Criterion) {
    let mut grid = SeamGrid::from_raster(&checkerboard()).unwrap();
    grid.carve(32, SelectionMode::Brightness).unwrap();
    c.bench_function("render gradient fill", move |b| {
        b.iter(|| grid.render(true, FillMode::Gradient))
    });
}

criterion_group!(benches, carve_benchmark, render_benchmark);
criterion_main!(benches);
