//! Edge weighting over a [`PreparedGrid`].

use rasterpath_core::{PixelIndex, PreparedGrid, Shape};

use crate::distance::step_length;
use crate::neighbors::{Connectivity, push_neighbors};
use crate::traits::{Pather, WeightedPather};

/// Which cell costs a step is charged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostMode {
    /// The cost of the cell being entered.
    #[default]
    Destination,
    /// The mean of the two cells' costs.
    Mean,
}

/// Edge-weight policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weighting {
    /// Scale diagonal steps by `√2`.
    pub geometric: bool,
    pub mode: CostMode,
}

impl Default for Weighting {
    fn default() -> Self {
        Self {
            geometric: true,
            mode: CostMode::Destination,
        }
    }
}

/// Search settings for [`find_path_with`](crate::find_path_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub connectivity: Connectivity,
    pub weighting: Weighting,
}

impl SearchConfig {
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            ..Self::default()
        }
    }
}

/// A prepared cost grid viewed as a weighted graph.
#[derive(Debug, Clone, Copy)]
pub struct CostSurface<'a> {
    grid: &'a PreparedGrid,
    config: SearchConfig,
}

impl<'a> CostSurface<'a> {
    pub fn new(grid: &'a PreparedGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    #[inline]
    pub fn grid(&self) -> &'a PreparedGrid {
        self.grid
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Pather for CostSurface<'_> {
    #[inline]
    fn shape(&self) -> Shape {
        self.grid.shape()
    }

    fn neighbors(&self, p: PixelIndex, buf: &mut Vec<PixelIndex>) {
        push_neighbors(p, self.config.connectivity, self.grid.shape(), buf);
    }
}

impl WeightedPather for CostSurface<'_> {
    fn cost(&self, from: PixelIndex, to: PixelIndex) -> f64 {
        let Some(entered) = self.grid.cost(to) else {
            return f64::INFINITY;
        };
        let base = match self.config.weighting.mode {
            CostMode::Destination => entered,
            CostMode::Mean => match self.grid.cost(from) {
                Some(left) => (left + entered) / 2.0,
                None => return f64::INFINITY,
            },
        };
        base * step_length(from, to, self.config.weighting.geometric)
    }
}
