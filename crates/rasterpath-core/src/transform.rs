//! Affine geo-transforms and the world-coordinate → pixel-index mapping.

use crate::error::{Error, Result};
use crate::geom::PixelIndex;

/// An affine transform between pixel space and world coordinates.
///
/// Coefficients use GDAL ordering:
///
///   * `[0]`: x-coordinate of the upper-left corner of the upper-left pixel.
///   * `[1]`: W-E pixel resolution (pixel width).
///   * `[2]`: row rotation (typically zero).
///   * `[3]`: y-coordinate of the upper-left corner of the upper-left pixel.
///   * `[4]`: column rotation (typically zero).
///   * `[5]`: N-S pixel resolution (pixel height), negative for a north-up raster.
///
/// Only axis-aligned transforms are supported for mapping; rotation terms
/// are carried along so the transform can be written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoTransform([f64; 6]);

impl GeoTransform {
    /// An axis-aligned transform.
    pub const fn new(origin_x: f64, pixel_width: f64, origin_y: f64, pixel_height: f64) -> Self {
        Self([origin_x, pixel_width, 0.0, origin_y, 0.0, pixel_height])
    }

    #[inline]
    pub fn origin_x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn pixel_width(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn row_rotation(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn origin_y(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn col_rotation(&self) -> f64 {
        self.0[4]
    }

    #[inline]
    pub fn pixel_height(&self) -> f64 {
        self.0[5]
    }

    /// The six coefficients in GDAL order.
    #[inline]
    pub fn as_array(&self) -> [f64; 6] {
        self.0
    }

    /// Whether both rotation terms are zero.
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.row_rotation() == 0.0 && self.col_rotation() == 0.0
    }

    fn check_pixel_size(&self) -> Result {
        let (w, h) = (self.pixel_width(), self.pixel_height());
        if w == 0.0 || h == 0.0 || !w.is_finite() || !h.is_finite() {
            return Err(Error::InvalidGeoTransform {
                pixel_width: w,
                pixel_height: h,
            });
        }
        Ok(())
    }

    /// Map a world coordinate to the pixel containing it.
    ///
    /// `col = floor((x - origin_x) / pixel_width)` and
    /// `row = floor((y - origin_y) / pixel_height)`. The result is not
    /// bounds-checked against any raster.
    pub fn to_pixel_index(&self, x: f64, y: f64) -> Result<PixelIndex> {
        self.check_pixel_size()?;
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidCoordinate { x, y });
        }
        if !self.is_axis_aligned() {
            log::warn!(
                "geo-transform has rotation terms ({}, {}); mapping ignores them",
                self.row_rotation(),
                self.col_rotation()
            );
        }
        let col = ((x - self.origin_x()) / self.pixel_width()).floor();
        let row = ((y - self.origin_y()) / self.pixel_height()).floor();
        match (to_i64(row), to_i64(col)) {
            (Some(row), Some(col)) => Ok(PixelIndex::new(row, col)),
            _ => Err(Error::InvalidCoordinate { x, y }),
        }
    }

    /// World coordinate of the upper-left corner of pixel `p`.
    pub fn pixel_origin(&self, p: PixelIndex) -> (f64, f64) {
        self.apply(p.col as f64, p.row as f64)
    }

    /// World coordinate of the center of pixel `p`.
    pub fn pixel_center(&self, p: PixelIndex) -> (f64, f64) {
        self.apply(p.col as f64 + 0.5, p.row as f64 + 0.5)
    }

    /// Apply the full affine transform to fractional `(pixel, line)`.
    pub fn apply(&self, pixel: f64, line: f64) -> (f64, f64) {
        let [c, a, b, f, d, e] = self.0;
        (c + pixel * a + line * b, f + pixel * d + line * e)
    }
}

impl From<[f64; 6]> for GeoTransform {
    fn from(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }
}

impl From<GeoTransform> for [f64; 6] {
    fn from(gt: GeoTransform) -> Self {
        gt.0
    }
}

fn to_i64(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Free-function form of [`GeoTransform::to_pixel_index`].
pub fn to_pixel_index(gt: &GeoTransform, x: f64, y: f64) -> Result<PixelIndex> {
    gt.to_pixel_index(x, y)
}
