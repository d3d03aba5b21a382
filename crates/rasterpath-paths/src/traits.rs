use rasterpath_core::{PixelIndex, Shape};

/// Minimal search interface: graph extent and neighbor enumeration.
pub trait Pather {
    /// Extent of the graph. Searches reject endpoints outside it.
    fn shape(&self) -> Shape;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: PixelIndex, buf: &mut Vec<PixelIndex>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` to adjacent `to`. Must be finite and
    /// non-negative for reachable steps; `f64::INFINITY` marks a step that
    /// can never be taken.
    fn cost(&self, from: PixelIndex, to: PixelIndex) -> f64;
}
