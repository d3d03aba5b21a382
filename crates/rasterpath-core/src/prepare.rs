//! Cost-grid preparation: collapse missing cells into a dominating sentinel.
//!
//! The search has no notion of a forbidden cell. A missing cell is instead
//! given a cost strictly greater than every real cost, so any finite detour
//! that is cheaper than crossing it wins.

use std::f64::consts::SQRT_2;

use crate::cost::{Cost, CostGrid};
use crate::error::{Error, Result};
use crate::geom::{PixelIndex, Shape};
use crate::grid::Grid;

/// How the sentinel cost for missing cells is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentinel {
    /// `max × margin`, or `margin` itself when the maximum cost is zero.
    /// `margin` must be finite and greater than 1.
    Scaled(f64),
    /// A fixed cost, which must exceed the maximum finite cost.
    Fixed(f64),
}

impl Default for Sentinel {
    fn default() -> Self {
        Self::Scaled(Self::DEFAULT_MARGIN)
    }
}

impl Sentinel {
    /// One order of magnitude above the largest real cost.
    pub const DEFAULT_MARGIN: f64 = 10.0;

    /// Resolve the sentinel value for a grid whose maximum finite cost is `max`.
    pub fn resolve(self, max: f64) -> Result<f64> {
        let sentinel = match self {
            Self::Scaled(margin) => {
                if !(margin.is_finite() && margin > 1.0) {
                    return Err(Error::InvalidSentinel {
                        max,
                        sentinel: margin,
                    });
                }
                if max == 0.0 { margin } else { max * margin }
            }
            Self::Fixed(value) => value,
        };
        if !sentinel.is_finite() || sentinel <= max {
            return Err(Error::InvalidSentinel { max, sentinel });
        }
        Ok(sentinel)
    }
}

/// A cost grid ready for searching: every cell is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreparedGrid {
    costs: Grid<f64>,
}

impl PreparedGrid {
    #[inline]
    pub fn shape(&self) -> Shape {
        self.costs.shape()
    }

    /// Cost of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cost(&self, p: PixelIndex) -> Option<f64> {
        self.costs.get(p).copied()
    }

    #[inline]
    pub fn as_grid(&self) -> &Grid<f64> {
        &self.costs
    }

    pub fn into_grid(self) -> Grid<f64> {
        self.costs
    }

    /// View the prepared costs as a [`CostGrid`] with no missing cells.
    pub fn to_cost_grid(&self) -> CostGrid {
        self.costs.map(|&v| Cost::Finite(v))
    }
}

/// Prepare `grid` with the default [`Sentinel`].
pub fn prepare(grid: &CostGrid) -> Result<PreparedGrid> {
    prepare_with(grid, Sentinel::default())
}

/// Replace every missing cell of `grid` with the sentinel chosen by
/// `sentinel`, leaving finite cells untouched. `grid` itself is not modified.
///
/// Fails with [`Error::PathCostOverflow`] when a path visiting every cell at
/// the largest prepared cost, each step diagonal, would not sum to a finite
/// value.
pub fn prepare_with(grid: &CostGrid, sentinel: Sentinel) -> Result<PreparedGrid> {
    let mut max: Option<f64> = None;
    for (p, c) in grid.iter() {
        if let Cost::Finite(v) = *c {
            if v < 0.0 {
                return Err(Error::NegativeCost { index: p, value: v });
            }
            max = Some(max.map_or(v, |m| m.max(v)));
        }
    }
    let max = max.ok_or(Error::EmptyOrAllMissingGrid)?;

    let missing = grid.missing_count();
    let fill = if missing == 0 {
        max
    } else {
        let s = sentinel.resolve(max)?;
        log::debug!("replacing {missing} missing cells with sentinel cost {s} (max {max})");
        s
    };

    let cells = grid.shape().len();
    let steps = cells.saturating_sub(1);
    if steps > 0 && !(fill * SQRT_2 * steps as f64).is_finite() {
        return Err(Error::PathCostOverflow { max: fill, cells });
    }

    let costs = grid.map(|c| c.value().unwrap_or(fill));
    Ok(PreparedGrid { costs })
}
