//! Georeferenced least-cost routing: path masks and the raster pipeline.
//!
//! [`to_mask`] turns a [`LeastCostPath`](rasterpath_paths::LeastCostPath)
//! into a binary grid of the cost raster's shape. [`route_between`] runs the
//! whole flow against pluggable raster collaborators:
//!
//! 1. read the cost raster from a [`RasterSource`],
//! 2. map the start and end coordinates through its geo-transform,
//! 3. prepare the costs and search the least-cost path,
//! 4. rasterize the path and hand it to a [`RasterSink`], tagged with the
//!    EPSG code from a [`SpatialRefResolver`].

pub mod io;
pub mod mask;
pub mod pipeline;

pub use io::{
    MemorySink, MemoryStore, Raster, RasterError, RasterSink, RasterSource, SpatialRefResolver,
    WrittenRaster,
};
pub use mask::{ON_PATH, to_mask, to_mask_indices};
pub use pipeline::{PathRaster, RouteOutcome, RouteRequest, least_cost_mask, route_between};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rasterpath_core::{GeoTransform, Grid, Shape};

    #[test]
    fn route_request_round_trip() {
        let mut req = RouteRequest::new("slope", "least_cost", (10.0, 20.0), (30.5, 40.25));
        req.epsg = Some(3857);
        let json = serde_json::to_string(&req).unwrap();
        let back: RouteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn mask_raster_round_trip() {
        let r = Raster::new(
            Grid::filled(Shape::new(2, 3), 1u8),
            GeoTransform::new(0.0, 1.0, 0.0, -1.0),
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: Raster<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
