//! Coordinates in, georeferenced path mask out.

use rasterpath_core::{PixelIndex, Sentinel, prepare_with};
use rasterpath_paths::{LeastCostPath, SearchConfig, find_path_with};

use crate::io::{Raster, RasterError, RasterSink, RasterSource, SpatialRefResolver};
use crate::mask::to_mask;

/// A least-cost route between two world coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Name of the cost raster to read.
    pub cost_raster: String,
    /// Name the path mask is written under.
    pub output: String,
    /// `(x, y)` of the start, in the cost raster's coordinate system.
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub sentinel: Sentinel,
    pub search: SearchConfig,
    /// EPSG code for the output; resolved from the cost raster when `None`.
    pub epsg: Option<u32>,
}

impl RouteRequest {
    pub fn new(
        cost_raster: impl Into<String>,
        output: impl Into<String>,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Self {
        Self {
            cost_raster: cost_raster.into(),
            output: output.into(),
            start,
            end,
            sentinel: Sentinel::default(),
            search: SearchConfig::default(),
            epsg: None,
        }
    }
}

/// A path and its mask, still in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRaster {
    pub start: PixelIndex,
    pub end: PixelIndex,
    pub path: LeastCostPath,
    /// Same shape and geo-transform as the cost raster.
    pub mask: Raster<u8>,
}

/// Result of [`route_between`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub start: PixelIndex,
    pub end: PixelIndex,
    pub path: LeastCostPath,
    pub epsg: u32,
}

/// Map both coordinates into `raster`, prepare its costs, search, and
/// rasterize the path. `raster` is not modified.
pub fn least_cost_mask(
    raster: &Raster<f64>,
    start: (f64, f64),
    end: (f64, f64),
    sentinel: Sentinel,
    search: &SearchConfig,
) -> Result<PathRaster, RasterError> {
    let start_px = raster.transform.to_pixel_index(start.0, start.1)?;
    let end_px = raster.transform.to_pixel_index(end.0, end.1)?;
    log::debug!("mapped {start:?} -> {start_px}, {end:?} -> {end_px}");

    let prepared = prepare_with(&raster.cost_grid()?, sentinel)?;
    let path = find_path_with(&prepared, start_px, end_px, search)?;
    let grid = to_mask(prepared.shape(), &path)?;

    Ok(PathRaster {
        start: start_px,
        end: end_px,
        path,
        mask: Raster::new(grid, raster.transform),
    })
}

/// Run the full routing pipeline: read the cost raster named in `req`,
/// compute the least-cost path mask, and write it to `sink` with the source
/// geo-transform and coordinate system.
pub fn route_between<S, R, W>(
    source: &S,
    resolver: &R,
    sink: &mut W,
    req: &RouteRequest,
) -> Result<RouteOutcome, RasterError>
where
    S: RasterSource + ?Sized,
    R: SpatialRefResolver + ?Sized,
    W: RasterSink + ?Sized,
{
    let raster = source.read(&req.cost_raster)?;
    log::info!(
        "routing over {} ({} cells)",
        req.cost_raster,
        raster.grid.shape()
    );

    let routed = least_cost_mask(&raster, req.start, req.end, req.sentinel, &req.search)?;
    let epsg = match req.epsg {
        Some(epsg) => epsg,
        None => resolver.epsg(&req.cost_raster)?,
    };
    sink.write(&req.output, &routed.mask, epsg)?;

    log::info!(
        "wrote {} ({} pixels, cost {:.3}, EPSG:{epsg})",
        req.output,
        routed.path.len(),
        routed.path.total_cost()
    );
    Ok(RouteOutcome {
        start: routed.start,
        end: routed.end,
        path: routed.path,
        epsg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryStore;
    use rasterpath_core::{Error, GeoTransform, Grid, Shape};
    use rasterpath_paths::Connectivity;

    fn raster() -> Raster<f64> {
        let grid = Grid::from_rows(vec![
            vec![1.0, 1.0, 1.0, 1.0],
            vec![1.0, -9999.0, -9999.0, 1.0],
            vec![1.0, 1.0, 1.0, 1.0],
        ])
        .unwrap();
        Raster::new(grid, GeoTransform::new(100.0, 10.0, 500.0, -10.0)).with_nodata(-9999.0)
    }

    #[test]
    fn mask_follows_the_cheap_ring() {
        let r = raster();
        let out = least_cost_mask(
            &r,
            (105.0, 495.0),
            (135.0, 475.0),
            Sentinel::default(),
            &SearchConfig::new(Connectivity::Four),
        )
        .unwrap();
        assert_eq!(out.start, PixelIndex::new(0, 0));
        assert_eq!(out.end, PixelIndex::new(2, 3));
        assert_eq!(out.mask.grid.shape(), Shape::new(3, 4));
        assert_eq!(out.mask.transform, r.transform);
        assert_eq!(out.path.total_cost(), 5.0);
        assert_eq!(out.mask.grid.get(PixelIndex::new(1, 1)), Some(&0));
        assert_eq!(out.mask.grid.get(PixelIndex::new(1, 2)), Some(&0));
    }

    #[test]
    fn coordinates_outside_raster() {
        let err = least_cost_mask(
            &raster(),
            (105.0, 495.0),
            (500.0, 495.0),
            Sentinel::default(),
            &SearchConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RasterError::Core(Error::OutOfBoundsIndex { .. })
        ));
    }

    #[test]
    fn missing_source_raster() {
        let store = MemoryStore::new();
        let mut sink = crate::io::MemorySink::new();
        let req = RouteRequest::new("nope", "out", (0.0, 0.0), (1.0, 1.0));
        assert_eq!(
            route_between(&store, &store, &mut sink, &req),
            Err(RasterError::NotFound("nope".into()))
        );
        assert!(sink.is_empty());
    }
}
