//! **rasterpath-core**: core types for least-cost routing over rasters.
//!
//! This crate provides the pieces every other *rasterpath* crate builds on:
//! pixel geometry, an owned row-major grid, geo-transforms with the
//! coordinate → pixel mapping, the [`Cost`] model, and the cost-grid
//! preparation that turns missing data into a dominating sentinel.

pub mod cost;
pub mod error;
pub mod geom;
pub mod grid;
pub mod prepare;
pub mod transform;

pub use cost::{Cost, CostGrid};
pub use error::{Error, Result};
pub use geom::{PixelIndex, Shape};
pub use grid::Grid;
pub use prepare::{PreparedGrid, Sentinel, prepare, prepare_with};
pub use transform::{GeoTransform, to_pixel_index};
