//! Raster collaborators: where cost rasters come from and where masks go.
//!
//! Reading files, reprojecting, and resolving coordinate systems are left to
//! implementations of these traits. [`MemoryStore`] and [`MemorySink`] keep
//! everything in maps, for demos and tests.

use std::collections::HashMap;

use rasterpath_core::{CostGrid, GeoTransform, Grid, Result};
use thiserror::Error;

/// A georeferenced single-band raster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raster<T> {
    pub grid: Grid<T>,
    pub transform: GeoTransform,
    /// Sample value flagging missing data, if the band declares one.
    pub nodata: Option<f64>,
}

impl<T> Raster<T> {
    pub fn new(grid: Grid<T>, transform: GeoTransform) -> Self {
        Self {
            grid,
            transform,
            nodata: None,
        }
    }

    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }
}

impl Raster<f64> {
    /// Translate the samples into costs, treating NaN, infinities, and the
    /// declared no-data value as missing.
    pub fn cost_grid(&self) -> Result<CostGrid> {
        CostGrid::from_samples(self.grid.shape(), self.grid.as_slice(), self.nodata)
    }
}

/// Errors raised by raster collaborators and the routing pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error(transparent)]
    Core(#[from] rasterpath_core::Error),
    #[error("raster not found: {0}")]
    NotFound(String),
    #[error("no spatial reference for raster: {0}")]
    MissingSpatialRef(String),
}

/// Supplies rasters by name.
pub trait RasterSource {
    fn read(&self, name: &str) -> std::result::Result<Raster<f64>, RasterError>;
}

/// Persists a raster under a name, tagged with an EPSG code.
pub trait RasterSink {
    fn write(
        &mut self,
        name: &str,
        raster: &Raster<u8>,
        epsg: u32,
    ) -> std::result::Result<(), RasterError>;
}

/// Resolves the coordinate system of a named raster to an EPSG code.
pub trait SpatialRefResolver {
    fn epsg(&self, name: &str) -> std::result::Result<u32, RasterError>;
}

// ---------------------------------------------------------------------------
// In-memory collaborators
// ---------------------------------------------------------------------------

/// In-memory raster source and spatial-reference resolver.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rasters: HashMap<String, (Raster<f64>, Option<u32>)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `raster` under `name`, optionally with its EPSG code.
    pub fn insert(&mut self, name: impl Into<String>, raster: Raster<f64>, epsg: Option<u32>) {
        self.rasters.insert(name.into(), (raster, epsg));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rasters.contains_key(name)
    }
}

impl RasterSource for MemoryStore {
    fn read(&self, name: &str) -> std::result::Result<Raster<f64>, RasterError> {
        self.rasters
            .get(name)
            .map(|(r, _)| r.clone())
            .ok_or_else(|| RasterError::NotFound(name.to_string()))
    }
}

impl SpatialRefResolver for MemoryStore {
    fn epsg(&self, name: &str) -> std::result::Result<u32, RasterError> {
        match self.rasters.get(name) {
            Some((_, Some(epsg))) => Ok(*epsg),
            Some((_, None)) => Err(RasterError::MissingSpatialRef(name.to_string())),
            None => Err(RasterError::NotFound(name.to_string())),
        }
    }
}

/// A mask raster as handed to a [`RasterSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRaster {
    pub raster: Raster<u8>,
    pub epsg: u32,
}

/// In-memory raster sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    written: HashMap<String, WrittenRaster>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&WrittenRaster> {
        self.written.get(name)
    }

    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

impl RasterSink for MemorySink {
    fn write(
        &mut self,
        name: &str,
        raster: &Raster<u8>,
        epsg: u32,
    ) -> std::result::Result<(), RasterError> {
        log::debug!("storing {} raster {name} (EPSG:{epsg})", raster.grid.shape());
        self.written.insert(
            name.to_string(),
            WrittenRaster {
                raster: raster.clone(),
                epsg,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterpath_core::{Cost, PixelIndex, Shape};

    fn sample() -> Raster<f64> {
        let grid = Grid::from_rows(vec![vec![1.0, -9999.0], vec![f64::NAN, 2.0]]).unwrap();
        Raster::new(grid, GeoTransform::new(0.0, 1.0, 2.0, -1.0)).with_nodata(-9999.0)
    }

    #[test]
    fn cost_grid_translates_nodata() {
        let costs = sample().cost_grid().unwrap();
        assert_eq!(costs.missing_count(), 2);
        assert_eq!(costs.get(PixelIndex::new(1, 1)), Some(&Cost::Finite(2.0)));
    }

    #[test]
    fn store_reads_and_resolves() {
        let mut store = MemoryStore::new();
        store.insert("slope", sample(), Some(3857));
        store.insert("bare", sample(), None);
        assert!(store.contains("slope"));
        let read = store.read("slope").unwrap();
        assert_eq!(read.grid.shape(), Shape::new(2, 2));
        assert_eq!(read.nodata, Some(-9999.0));
        assert_eq!(read.transform, sample().transform);
        assert_eq!(store.epsg("slope"), Ok(3857));
        assert_eq!(
            store.epsg("bare"),
            Err(RasterError::MissingSpatialRef("bare".into()))
        );
        assert_eq!(
            store.read("nope"),
            Err(RasterError::NotFound("nope".into()))
        );
        assert_eq!(store.epsg("nope"), Err(RasterError::NotFound("nope".into())));
    }

    #[test]
    fn sink_keeps_written_rasters() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());
        let mask = Raster::new(
            Grid::filled(Shape::new(2, 2), 0u8),
            GeoTransform::new(0.0, 1.0, 0.0, -1.0),
        );
        sink.write("out", &mask, 4326).unwrap();
        assert_eq!(sink.len(), 1);
        let w = sink.get("out").unwrap();
        assert_eq!(w.epsg, 4326);
        assert_eq!(w.raster, mask);
    }

    #[test]
    fn core_errors_convert() {
        let err: RasterError = rasterpath_core::Error::EmptyOrAllMissingGrid.into();
        assert_eq!(err.to_string(), "cost grid has no finite value");
    }
}
