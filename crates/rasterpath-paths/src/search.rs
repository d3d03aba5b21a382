use std::cmp::Ordering;

use rasterpath_core::{Error, PixelIndex, PreparedGrid, Result, Shape};

use crate::neighbors::Connectivity;
use crate::path::LeastCostPath;
use crate::surface::{CostSurface, SearchConfig};

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            generation: 0,
            closed: false,
        }
    }
}

/// Reference into the node array, ordered by `g` then by push order for use
/// in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest g first, and
        // among equal g the earliest pushed.
        other
            .g
            .total_cmp(&self.g)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable least-cost search engine for grids of one shape.
///
/// `PathSearch` owns the node array and scratch buffers so that repeated
/// queries on same-sized grids allocate nothing after the first one.
pub struct PathSearch {
    pub(crate) shape: Shape,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<PixelIndex>,
}

impl PathSearch {
    /// Create a search engine for grids of `shape`.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            nodes: vec![Node::default(); shape.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Switch to a new shape, reallocating only if it needs more nodes.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        if shape.len() <= self.nodes.len() {
            // Stale entries are ignored once the generation moves on.
            self.next_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(shape.len(), Node::default());
        self.generation = 0;
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Start a new query, lazily invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: default nodes carry generation 0, so reset them all.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Flat node index of `p`, or `OutOfBoundsIndex`.
    #[inline]
    pub(crate) fn checked_idx(&self, p: PixelIndex) -> Result<usize> {
        self.shape.offset(p).ok_or(Error::OutOfBoundsIndex {
            index: p,
            shape: self.shape,
        })
    }

    #[inline]
    pub(crate) fn idx(&self, p: PixelIndex) -> Option<usize> {
        self.shape.offset(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> PixelIndex {
        self.shape.index(idx)
    }
}

/// Find a least-cost path on `grid` with the default weighting
/// (geometric, destination-cost) under `connectivity`.
pub fn find_path(
    grid: &PreparedGrid,
    start: PixelIndex,
    end: PixelIndex,
    connectivity: Connectivity,
) -> Result<LeastCostPath> {
    find_path_with(grid, start, end, &SearchConfig::new(connectivity))
}

/// Find a least-cost path on `grid` with explicit search settings.
pub fn find_path_with(
    grid: &PreparedGrid,
    start: PixelIndex,
    end: PixelIndex,
    config: &SearchConfig,
) -> Result<LeastCostPath> {
    let surface = CostSurface::new(grid, *config);
    PathSearch::new(grid.shape()).least_cost_path(&surface, start, end)
}
