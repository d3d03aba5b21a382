use rasterpath_core::PixelIndex;

/// Manhattan (L1) distance between two pixels.
#[inline]
pub fn manhattan(a: PixelIndex, b: PixelIndex) -> i64 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two pixels.
#[inline]
pub fn chebyshev(a: PixelIndex, b: PixelIndex) -> i64 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Length of a single step between adjacent pixels, in pixel units.
///
/// Diagonal steps measure `√2` when `geometric` is set, otherwise every step
/// measures 1.
#[inline]
pub fn step_length(from: PixelIndex, to: PixelIndex, geometric: bool) -> f64 {
    if geometric && from.is_diagonal_to(to) {
        std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = PixelIndex::new(0, 0);
        let b = PixelIndex::new(2, 4);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(chebyshev(b, a), 4);
    }

    #[test]
    fn step_lengths() {
        let p = PixelIndex::new(1, 1);
        assert_eq!(step_length(p, PixelIndex::new(0, 1), true), 1.0);
        assert_eq!(step_length(p, PixelIndex::new(0, 0), true), std::f64::consts::SQRT_2);
        assert_eq!(step_length(p, PixelIndex::new(2, 2), false), 1.0);
    }
}
