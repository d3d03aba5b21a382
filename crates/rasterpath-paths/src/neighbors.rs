use rasterpath_core::{PixelIndex, Shape};

/// Which neighbors a pixel can step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal steps only.
    Four,
    /// Orthogonal and diagonal steps.
    #[default]
    Eight,
}

const ORTHOGONAL: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

const ALL: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Connectivity {
    /// Step offsets `(drow, dcol)` in the order neighbors are enumerated.
    #[inline]
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::Four => &ORTHOGONAL,
            Self::Eight => &ALL,
        }
    }

    /// Whether a step from `from` to `to` is a legal single move.
    #[inline]
    pub fn allows_step(self, from: PixelIndex, to: PixelIndex) -> bool {
        match self {
            Self::Four => from.is_orthogonal_to(to),
            Self::Eight => from.is_orthogonal_to(to) || from.is_diagonal_to(to),
        }
    }
}

/// Append the in-shape neighbors of `p` to `buf`.
pub(crate) fn push_neighbors(
    p: PixelIndex,
    connectivity: Connectivity,
    shape: Shape,
    buf: &mut Vec<PixelIndex>,
) {
    for &(dr, dc) in connectivity.offsets() {
        let n = p.shift(dr, dc);
        if shape.contains(n) {
            buf.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(p: PixelIndex, connectivity: Connectivity, shape: Shape) -> Vec<PixelIndex> {
        let mut buf = Vec::new();
        push_neighbors(p, connectivity, shape, &mut buf);
        buf
    }

    #[test]
    fn corner_neighbors() {
        let shape = Shape::new(3, 3);
        let p = PixelIndex::new(0, 0);
        assert_eq!(
            within(p, Connectivity::Four, shape),
            vec![PixelIndex::new(0, 1), PixelIndex::new(1, 0)]
        );
        assert_eq!(within(p, Connectivity::Eight, shape).len(), 3);
    }

    #[test]
    fn interior_neighbors() {
        let shape = Shape::new(3, 3);
        let p = PixelIndex::new(1, 1);
        assert_eq!(within(p, Connectivity::Four, shape).len(), 4);
        let all = within(p, Connectivity::Eight, shape);
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&p));
    }

    #[test]
    fn step_legality() {
        let p = PixelIndex::new(1, 1);
        let diag = PixelIndex::new(2, 2);
        let ortho = PixelIndex::new(1, 2);
        assert!(Connectivity::Four.allows_step(p, ortho));
        assert!(!Connectivity::Four.allows_step(p, diag));
        assert!(Connectivity::Eight.allows_step(p, diag));
        assert!(!Connectivity::Eight.allows_step(p, p));
        assert!(!Connectivity::Eight.allows_step(p, PixelIndex::new(3, 1)));
    }
}
