//! Least-cost path search over prepared cost grids.
//!
//! The search is a label-setting (Dijkstra) expansion over the grid viewed
//! as a weighted graph:
//!
//! - **Shortest path** between two pixels ([`PathSearch::least_cost_path`],
//!   or the one-shot [`find_path`] / [`find_path_with`])
//! - **Cost-distance surfaces** from one or more sources
//!   ([`PathSearch::cost_distance`])
//!
//! [`PathSearch`] owns and reuses its internal node cache, so repeated
//! queries on same-sized grids incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration (the connectivity strategy) |
//! | [`WeightedPather`] : [`Pather`] | step weights |
//!
//! [`CostSurface`] implements both for a [`PreparedGrid`](rasterpath_core::PreparedGrid)
//! under a [`SearchConfig`].

mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod search;
mod surface;
mod traits;

pub use distance::{chebyshev, manhattan, step_length};
pub use neighbors::Connectivity;
pub use path::LeastCostPath;
pub use search::{PathSearch, find_path, find_path_with};
pub use surface::{CostMode, CostSurface, SearchConfig, Weighting};
pub use traits::{Pather, WeightedPather};
