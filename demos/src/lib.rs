//! Shared helpers for the rasterpath demos.

use flexi_logger::{Logger, LoggerHandle};
use rand::{RngExt, SeedableRng};
use rasterpath_core::{GeoTransform, Grid, Shape};
use rasterpath_raster::Raster;

/// No-data marker used by the synthetic rasters.
pub const NODATA: f64 = -9999.0;

/// Install a stderr logger. `RUST_LOG` overrides `default_level`.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(default_level: &str) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    Logger::try_with_env_or_str(default_level)?.start()
}

/// A synthetic slope-percent raster: integer slopes in `[0, 100)` on a
/// 1 m north-up grid, with `holes` cells flagged as no-data.
pub fn synthetic_slope(seed: u64, shape: Shape, origin: (f64, f64), holes: usize) -> Raster<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = Grid::from_fn(shape, |_| rng.random_range(0..100) as f64);
    for _ in 0..holes {
        let p = shape.index(rng.random_range(0..shape.len()));
        grid.set(p, NODATA);
    }
    Raster::new(grid, GeoTransform::new(origin.0, 1.0, origin.1, -1.0)).with_nodata(NODATA)
}

/// Render a grid one row per line.
pub fn render<T: std::fmt::Display>(grid: &Grid<T>, width: usize) -> String {
    let mut out = String::new();
    for r in 0..grid.rows() {
        let line: Vec<String> = grid.row(r).iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
