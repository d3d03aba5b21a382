use rasterpath_core::PixelIndex;

use crate::traits::WeightedPather;

/// A least-cost path: pixel indices from start to end inclusive, and the
/// accumulated cost of walking them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathParts"))]
pub struct LeastCostPath {
    indices: Vec<PixelIndex>,
    total_cost: f64,
}

/// Unchecked serialized form of a [`LeastCostPath`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathParts {
    indices: Vec<PixelIndex>,
    total_cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PathParts> for LeastCostPath {
    type Error = &'static str;

    fn try_from(parts: PathParts) -> Result<Self, Self::Error> {
        if parts.indices.is_empty() {
            return Err("a path holds at least one pixel");
        }
        Ok(Self::new(parts.indices, parts.total_cost))
    }
}

impl LeastCostPath {
    pub(crate) fn new(indices: Vec<PixelIndex>, total_cost: f64) -> Self {
        debug_assert!(!indices.is_empty());
        Self {
            indices,
            total_cost,
        }
    }

    /// The visited pixels, in walking order.
    #[inline]
    pub fn indices(&self) -> &[PixelIndex] {
        &self.indices
    }

    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of pixels on the path (steps + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; a path holds at least its start pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn start(&self) -> PixelIndex {
        self.indices[0]
    }

    #[inline]
    pub fn end(&self) -> PixelIndex {
        self.indices[self.indices.len() - 1]
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (PixelIndex, PixelIndex)> + '_ {
        self.indices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether any step is diagonal.
    pub fn has_diagonal_step(&self) -> bool {
        self.steps().any(|(a, b)| a.is_diagonal_to(b))
    }

    /// Sum the step weights of this path under `pather`, independently of
    /// the search that produced it.
    pub fn recompute_cost<P: WeightedPather>(&self, pather: &P) -> f64 {
        self.steps().map(|(a, b)| pather.cost(a, b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;
    use rasterpath_core::Shape;

    struct UnitSteps;

    impl Pather for UnitSteps {
        fn shape(&self) -> Shape {
            Shape::new(3, 3)
        }

        fn neighbors(&self, _p: PixelIndex, _buf: &mut Vec<PixelIndex>) {}
    }

    impl WeightedPather for UnitSteps {
        fn cost(&self, _from: PixelIndex, _to: PixelIndex) -> f64 {
            1.0
        }
    }

    #[test]
    fn accessors() {
        let path = LeastCostPath::new(
            vec![
                PixelIndex::new(0, 0),
                PixelIndex::new(1, 1),
                PixelIndex::new(1, 2),
            ],
            3.0,
        );
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.start(), PixelIndex::new(0, 0));
        assert_eq!(path.end(), PixelIndex::new(1, 2));
        assert_eq!(path.steps().count(), 2);
        assert!(path.has_diagonal_step());
        assert_eq!(path.recompute_cost(&UnitSteps), 2.0);
    }

    #[test]
    fn single_pixel_path() {
        let path = LeastCostPath::new(vec![PixelIndex::new(2, 3)], 0.0);
        assert_eq!(path.start(), path.end());
        assert_eq!(path.steps().count(), 0);
        assert_eq!(path.recompute_cost(&UnitSteps), 0.0);
    }
}
