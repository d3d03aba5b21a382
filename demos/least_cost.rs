//! Least-cost path demo.
//!
//! First routes across a small 3×5 slope image by pixel index, then runs the
//! georeferenced pipeline: two world coordinates on a synthetic slope raster
//! in, a path mask raster out.

use rasterpath_core::{Cost, Grid, PixelIndex, Shape, prepare};
use rasterpath_demos::{render, setup_logging, synthetic_slope};
use rasterpath_paths::{Connectivity, find_path};
use rasterpath_raster::{MemorySink, MemoryStore, RouteRequest, route_between, to_mask};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = setup_logging("info")?;

    // --- pixel-index routing on a tiny image ---
    let slope = synthetic_slope(42, Shape::new(3, 5), (0.0, 3.0), 0);
    println!("slope image:\n{}", render(&slope.grid, 3));

    let costs: Grid<Cost> = slope.cost_grid()?;
    let prepared = prepare(&costs)?;
    let path = find_path(
        &prepared,
        PixelIndex::new(0, 0),
        PixelIndex::new(2, 4),
        Connectivity::Eight,
    )?;
    println!(
        "path {:?}\ncost {:.3}",
        path.indices()
            .iter()
            .map(|p| (p.row, p.col))
            .collect::<Vec<_>>(),
        path.total_cost()
    );
    println!("mask:\n{}", render(&to_mask(prepared.shape(), &path)?, 1));

    // --- georeferenced pipeline ---
    let origin = (1013428.0, 6231555.0);
    let mut store = MemoryStore::new();
    store.insert(
        "slope-percent",
        synthetic_slope(7, Shape::new(60, 80), origin, 40),
        Some(3857),
    );
    let mut sink = MemorySink::new();

    let req = RouteRequest::new(
        "slope-percent",
        "least_cost",
        (origin.0 + 3.5, origin.1 - 2.5),
        (origin.0 + 75.5, origin.1 - 55.5),
    );
    let outcome = route_between(&store, &store, &mut sink, &req)?;
    println!(
        "routed {} -> {}: {} pixels, cost {:.3}, EPSG:{}",
        outcome.start,
        outcome.end,
        outcome.path.len(),
        outcome.path.total_cost(),
        outcome.epsg
    );
    Ok(())
}
