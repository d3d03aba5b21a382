//! Error type shared by every stage of the routing pipeline.

use thiserror::Error;

use crate::geom::{PixelIndex, Shape};

/// Errors raised by coordinate mapping, cost preparation, path search, and
/// path rasterization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("degenerate geo-transform: pixel width {pixel_width}, pixel height {pixel_height}")]
    InvalidGeoTransform { pixel_width: f64, pixel_height: f64 },
    #[error("coordinate ({x}, {y}) cannot be mapped to a pixel index")]
    InvalidCoordinate { x: f64, y: f64 },
    #[error("cost grid has no finite value")]
    EmptyOrAllMissingGrid,
    #[error("negative cost {value} at {index}")]
    NegativeCost { index: PixelIndex, value: f64 },
    #[error("sentinel {sentinel} does not dominate maximum cost {max}")]
    InvalidSentinel { max: f64, sentinel: f64 },
    #[error("path costs over {cells} cells at cost {max} overflow")]
    PathCostOverflow { max: f64, cells: usize },
    #[error("expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("index {index} is outside grid of shape {shape}")]
    OutOfBoundsIndex { index: PixelIndex, shape: Shape },
    #[error("no path from {start} to {end}")]
    NoPathFound { start: PixelIndex, end: PixelIndex },
    #[error("path index {index} is outside mask of shape {shape}")]
    IndexOutOfShape { index: PixelIndex, shape: Shape },
}

pub type Result<T = ()> = std::result::Result<T, Error>;
