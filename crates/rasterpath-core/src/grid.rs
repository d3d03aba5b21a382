//! The [`Grid`] type, an owned, row-major 2D array of values.
//!
//! Grids are plain values: cloning copies the cells and no operation in this
//! workspace mutates a grid it was only given by reference.

use crate::error::{Error, Result};
use crate::geom::{PixelIndex, Shape, ShapeIter};

/// A row-major 2D grid of `T` with a fixed [`Shape`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    shape: Shape,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid of the given shape with every cell set to `value`.
    pub fn filled(shape: Shape, value: T) -> Self {
        Self {
            shape,
            cells: vec![value; shape.len()],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for c in self.cells.iter_mut() {
            *c = value.clone();
        }
    }
}

impl<T> Grid<T> {
    /// Wrap row-major `cells` in a grid of the given shape.
    pub fn from_vec(shape: Shape, cells: Vec<T>) -> Result<Self> {
        if cells.len() != shape.len() {
            return Err(Error::ShapeMismatch {
                expected: shape.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = Shape::new(rows.len(), cols);
        let mut cells = Vec::with_capacity(shape.len());
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { shape, cells })
    }

    /// Create a grid by evaluating `f` at every index, row-major.
    pub fn from_fn(shape: Shape, f: impl FnMut(PixelIndex) -> T) -> Self {
        Self {
            shape,
            cells: shape.iter().map(f).collect(),
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Whether `p` is inside this grid.
    #[inline]
    pub fn contains(&self, p: PixelIndex) -> bool {
        self.shape.contains(p)
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: PixelIndex) -> Option<&T> {
        self.shape.offset(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn get_mut(&mut self, p: PixelIndex) -> Option<&mut T> {
        self.shape.offset(p).map(|i| &mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is
    /// outside the grid.
    pub fn set(&mut self, p: PixelIndex, value: T) -> bool {
        match self.get_mut(p) {
            Some(c) => {
                *c = value;
                true
            }
            None => false,
        }
    }

    /// Produce a new grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Row-major cell storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Row-major iterator over `(PixelIndex, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.shape.iter(),
        }
    }

    /// The cells of row `row`. Empty if `row` is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        if row >= self.shape.rows {
            return &[];
        }
        let start = row * self.shape.cols;
        &self.cells[start..start + self.shape.cols]
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(PixelIndex, &T)` pairs in a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: ShapeIter,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (PixelIndex, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let grid: &'a Grid<T> = self.grid;
        grid.get(p).map(|v| (p, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
