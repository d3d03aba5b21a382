//! Pixel geometry primitives: [`PixelIndex`] and [`Shape`].
//!
//! Indices are signed so that a coordinate falling outside a raster still
//! maps to a representable index; bounds are checked against a [`Shape`]
//! by whoever consumes the index.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// PixelIndex
// ---------------------------------------------------------------------------

/// A zero-based `(row, col)` pixel index. Row grows down, col grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelIndex {
    pub row: i64,
    pub col: i64,
}

impl PixelIndex {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new index.
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Return an index shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i64, dcol: i64) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is one of the four orthogonal neighbours.
    #[inline]
    pub fn is_orthogonal_to(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Whether `other` is one of the four diagonal neighbours.
    #[inline]
    pub fn is_diagonal_to(self, other: Self) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for PixelIndex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PixelIndex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for PixelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i64, i64)> for PixelIndex {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl Add for PixelIndex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for PixelIndex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Dimensions of a row-major grid: `rows × cols` cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Create a new shape.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the shape has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies in `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(self, p: PixelIndex) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as u64) < self.rows as u64 && (p.col as u64) < self.cols as u64
    }

    /// Flat row-major offset of `p`, or `None` if out of bounds.
    #[inline]
    pub fn offset(self, p: PixelIndex) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Inverse of [`offset`](Shape::offset).
    #[inline]
    pub fn index(self, offset: usize) -> PixelIndex {
        PixelIndex::new((offset / self.cols) as i64, (offset % self.cols) as i64)
    }

    /// Row-major iterator over every index in the shape.
    #[inline]
    pub fn iter(self) -> ShapeIter {
        ShapeIter {
            shape: self,
            next: 0,
        }
    }
}

impl IntoIterator for Shape {
    type Item = PixelIndex;
    type IntoIter = ShapeIter;
    #[inline]
    fn into_iter(self) -> ShapeIter {
        self.iter()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// ShapeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the indices of a [`Shape`].
#[derive(Clone, Debug)]
pub struct ShapeIter {
    shape: Shape,
    next: usize,
}

impl Iterator for ShapeIter {
    type Item = PixelIndex;

    #[inline]
    fn next(&mut self) -> Option<PixelIndex> {
        if self.next >= self.shape.len() {
            return None;
        }
        let p = self.shape.index(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.shape.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ShapeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_arithmetic() {
        let a = PixelIndex::new(1, 2);
        let b = PixelIndex::new(3, 4);
        assert_eq!(a + b, PixelIndex::new(4, 6));
        assert_eq!(b - a, PixelIndex::new(2, 2));
        assert_eq!(a.shift(-1, 1), PixelIndex::new(0, 3));
    }

    #[test]
    fn index_orders_row_major() {
        let mut v = vec![
            PixelIndex::new(1, 0),
            PixelIndex::new(0, 2),
            PixelIndex::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                PixelIndex::new(0, 1),
                PixelIndex::new(0, 2),
                PixelIndex::new(1, 0)
            ]
        );
    }

    #[test]
    fn adjacency_predicates() {
        let p = PixelIndex::new(2, 2);
        assert!(p.is_orthogonal_to(PixelIndex::new(1, 2)));
        assert!(!p.is_orthogonal_to(PixelIndex::new(1, 1)));
        assert!(p.is_diagonal_to(PixelIndex::new(3, 1)));
        assert!(!p.is_diagonal_to(p));
    }

    #[test]
    fn shape_contains() {
        let s = Shape::new(3, 5);
        assert!(s.contains(PixelIndex::new(0, 0)));
        assert!(s.contains(PixelIndex::new(2, 4)));
        assert!(!s.contains(PixelIndex::new(3, 0)));
        assert!(!s.contains(PixelIndex::new(0, 5)));
        assert!(!s.contains(PixelIndex::new(-1, 0)));
        assert!(!s.contains(PixelIndex::new(0, -1)));
    }

    #[test]
    fn offset_round_trip() {
        let s = Shape::new(3, 5);
        for (i, p) in s.iter().enumerate() {
            assert_eq!(s.offset(p), Some(i));
            assert_eq!(s.index(i), p);
        }
        assert_eq!(s.offset(PixelIndex::new(3, 0)), None);
    }

    #[test]
    fn iter_count_and_order() {
        let s = Shape::new(2, 3);
        let pts: Vec<_> = s.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], PixelIndex::new(0, 0));
        assert_eq!(pts[3], PixelIndex::new(1, 0));
        assert_eq!(pts[5], PixelIndex::new(1, 2));
        assert_eq!(s.iter().len(), 6);
    }

    #[test]
    fn empty_shape() {
        let s = Shape::new(0, 4);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.iter().count(), 0);
        assert!(!s.contains(PixelIndex::ZERO));
    }
}
