//! Per-cell traversal cost with an explicit missing-data state.

use crate::error::Result;
use crate::geom::Shape;
use crate::grid::Grid;

/// Traversal cost of one pixel.
///
/// Missing data is a variant rather than a NaN so that comparisons during
/// preparation never silently fail.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    Finite(f64),
    #[default]
    Missing,
}

impl Cost {
    /// Classify a raw raster sample.
    ///
    /// NaN, infinities, and samples equal to `nodata` become [`Cost::Missing`].
    pub fn from_sample(sample: f64, nodata: Option<f64>) -> Self {
        if !sample.is_finite() || nodata.is_some_and(|nd| sample == nd) {
            Self::Missing
        } else {
            Self::Finite(sample)
        }
    }

    /// The finite value, if any.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Missing => None,
        }
    }

    #[inline]
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Cost {
    fn from(v: f64) -> Self {
        Self::from_sample(v, None)
    }
}

/// A grid of [`Cost`] cells as read from a raster.
pub type CostGrid = Grid<Cost>;

impl Grid<Cost> {
    /// Build a cost grid from row-major raster samples, translating NaN,
    /// infinities, and the `nodata` value into [`Cost::Missing`].
    pub fn from_samples(shape: Shape, samples: &[f64], nodata: Option<f64>) -> Result<Self> {
        Grid::from_vec(
            shape,
            samples
                .iter()
                .map(|&s| Cost::from_sample(s, nodata))
                .collect(),
        )
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.as_slice().iter().filter(|c| c.is_missing()).count()
    }

    /// The maximum finite cost, or `None` if every cell is missing.
    pub fn max_finite(&self) -> Option<f64> {
        self.as_slice()
            .iter()
            .filter_map(|c| c.value())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geom::PixelIndex;

    #[test]
    fn sample_classification() {
        assert_eq!(Cost::from_sample(3.5, None), Cost::Finite(3.5));
        assert_eq!(Cost::from_sample(f64::NAN, None), Cost::Missing);
        assert_eq!(Cost::from_sample(f64::INFINITY, None), Cost::Missing);
        assert_eq!(Cost::from_sample(f64::NEG_INFINITY, None), Cost::Missing);
        assert_eq!(Cost::from_sample(-9999.0, Some(-9999.0)), Cost::Missing);
        assert_eq!(Cost::from_sample(-1.0, Some(-9999.0)), Cost::Finite(-1.0));
    }

    #[test]
    fn from_samples_translates_nodata() {
        let g = Grid::from_samples(
            Shape::new(2, 2),
            &[1.0, -9999.0, f64::NAN, 4.0],
            Some(-9999.0),
        )
        .unwrap();
        assert_eq!(g.missing_count(), 2);
        assert_eq!(g.get(PixelIndex::new(1, 1)), Some(&Cost::Finite(4.0)));
        assert_eq!(g.max_finite(), Some(4.0));
    }

    #[test]
    fn from_samples_checks_length() {
        let err = Grid::from_samples(Shape::new(2, 2), &[1.0], None).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn max_finite_of_all_missing() {
        let g = Grid::filled(Shape::new(2, 2), Cost::Missing);
        assert_eq!(g.max_finite(), None);
    }
}
