use std::collections::BinaryHeap;

use rasterpath_core::{Error, Grid, PixelIndex, Result, Shape};

use crate::path::LeastCostPath;
use crate::search::{Node, NodeRef, PathSearch};
use crate::traits::WeightedPather;

impl PathSearch {
    /// Compute the least-cost path from `start` to `end`.
    ///
    /// Both endpoints must lie inside `pather`'s shape; the engine adopts that
    /// shape if it differs from its own. Equal-cost frontier
    /// nodes are settled in the order they were discovered, so the result is
    /// deterministic for fixed inputs.
    pub fn least_cost_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: PixelIndex,
        end: PixelIndex,
    ) -> Result<LeastCostPath> {
        self.fit(pather.shape());
        let start_idx = self.checked_idx(start)?;
        let goal_idx = self.checked_idx(end)?;

        if start_idx == goal_idx {
            return Ok(LeastCostPath::new(vec![start], 0.0));
        }

        let cur_gen = self.next_generation();
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        self.seed(start_idx, cur_gen, &mut open, &mut seq);

        let (found, settled) = self.settle(pather, cur_gen, &mut open, &mut seq, Some(goal_idx));
        log::debug!("search {start} -> {end}: settled {settled} of {} cells", self.shape.len());

        if !found {
            return Err(Error::NoPathFound { start, end });
        }

        // Reconstruct path.
        let total_cost = self.nodes[goal_idx].g;
        let mut indices = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            indices.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        indices.reverse();
        Ok(LeastCostPath::new(indices, total_cost))
    }

    /// Compute a multi-source accumulated-cost surface.
    ///
    /// Every source starts at cost 0. Cells that cannot be reached hold
    /// `f64::INFINITY`.
    pub fn cost_distance<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[PixelIndex],
    ) -> Result<Grid<f64>> {
        self.fit(pather.shape());
        let cur_gen = self.next_generation();
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        for &src in sources {
            let si = self.checked_idx(src)?;
            if self.nodes[si].generation != cur_gen {
                self.seed(si, cur_gen, &mut open, &mut seq);
            }
        }

        let (_, settled) = self.settle(pather, cur_gen, &mut open, &mut seq, None);
        log::debug!("cost distance from {} sources: settled {settled} cells", sources.len());

        let shape = self.shape;
        let nodes = &self.nodes;
        Ok(Grid::from_fn(shape, |p| {
            shape
                .offset(p)
                .map(|i| &nodes[i])
                .filter(|n| n.generation == cur_gen && n.closed)
                .map_or(f64::INFINITY, |n| n.g)
        }))
    }

    fn fit(&mut self, shape: Shape) {
        if shape != self.shape {
            log::debug!("search engine resized from {} to {shape}", self.shape);
            self.set_shape(shape);
        }
    }

    fn seed(&mut self, idx: usize, cur_gen: u32, open: &mut BinaryHeap<NodeRef>, seq: &mut u64) {
        self.nodes[idx] = Node {
            g: 0.0,
            generation: cur_gen,
            ..Node::default()
        };
        open.push(NodeRef { idx, g: 0.0, seq: *seq });
        *seq += 1;
    }

    /// Run label-setting expansion until the frontier empties or `goal` is
    /// settled. Returns whether the goal was settled and how many cells were.
    fn settle<P: WeightedPather>(
        &mut self,
        pather: &P,
        cur_gen: u32,
        open: &mut BinaryHeap<NodeRef>,
        seq: &mut u64,
        goal: Option<usize>,
    ) -> (bool, usize) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut settled = 0;

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || cn.closed {
                continue;
            }
            self.nodes[ci].closed = true;
            settled += 1;

            if goal == Some(ci) {
                break true;
            }

            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + pather.cost(cp, np);
                if !tentative.is_finite() {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    *n = Node {
                        generation: cur_gen,
                        ..Node::default()
                    };
                }

                n.g = tentative;
                n.parent = ci;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                    seq: *seq,
                });
                *seq += 1;
            }
        };

        self.nbuf = nbuf;
        (found, settled)
    }
}
