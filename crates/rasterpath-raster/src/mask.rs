//! Rasterize a path into a binary mask.

use rasterpath_core::{Error, Grid, PixelIndex, Result, Shape};
use rasterpath_paths::LeastCostPath;

/// Value of mask cells on the path.
pub const ON_PATH: u8 = 1;

/// Mark every pixel of `path` with [`ON_PATH`] in a zeroed grid of `shape`.
pub fn to_mask(shape: Shape, path: &LeastCostPath) -> Result<Grid<u8>> {
    to_mask_indices(shape, path.indices())
}

/// Like [`to_mask`] for a bare index sequence. Repeated indices mark the
/// same cell once.
pub fn to_mask_indices(shape: Shape, indices: &[PixelIndex]) -> Result<Grid<u8>> {
    let mut mask = Grid::filled(shape, 0u8);
    for &p in indices {
        if !mask.set(p, ON_PATH) {
            return Err(Error::IndexOutOfShape { index: p, shape });
        }
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterpath_core::{Cost, prepare};
    use rasterpath_paths::{Connectivity, find_path};

    fn ones(mask: &Grid<u8>) -> usize {
        mask.as_slice().iter().filter(|&&v| v == ON_PATH).count()
    }

    #[test]
    fn mask_marks_path_cells() {
        let grid = prepare(&Grid::filled(Shape::new(3, 5), Cost::Finite(1.0))).unwrap();
        let path = find_path(
            &grid,
            PixelIndex::new(0, 0),
            PixelIndex::new(2, 4),
            Connectivity::Eight,
        )
        .unwrap();
        let mask = to_mask(grid.shape(), &path).unwrap();
        assert_eq!(mask.shape(), grid.shape());
        assert_eq!(ones(&mask), path.len());
        let sum: u32 = mask.as_slice().iter().map(|&v| v as u32).sum();
        assert_eq!(sum as usize, path.len());
        for p in path.indices() {
            assert_eq!(mask.get(*p), Some(&ON_PATH));
        }
    }

    #[test]
    fn revisits_are_counted_once() {
        let idx = [
            PixelIndex::new(0, 0),
            PixelIndex::new(0, 1),
            PixelIndex::new(0, 0),
        ];
        let mask = to_mask_indices(Shape::new(2, 2), &idx).unwrap();
        assert_eq!(ones(&mask), 2);
        assert_eq!(mask.as_slice(), &[1, 1, 0, 0]);
    }

    #[test]
    fn index_outside_shape_is_an_error() {
        let idx = [PixelIndex::new(0, 0), PixelIndex::new(2, 0)];
        assert_eq!(
            to_mask_indices(Shape::new(2, 2), &idx),
            Err(Error::IndexOutOfShape {
                index: PixelIndex::new(2, 0),
                shape: Shape::new(2, 2)
            })
        );
        assert!(to_mask_indices(Shape::new(2, 2), &[PixelIndex::new(0, -1)]).is_err());
    }

    #[test]
    fn empty_path_gives_zero_mask() {
        let mask = to_mask_indices(Shape::new(2, 3), &[]).unwrap();
        assert_eq!(ones(&mask), 0);
        assert_eq!(mask.shape(), Shape::new(2, 3));
    }
}
