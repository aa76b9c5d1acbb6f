/// Single coordinate axis used for field width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Truncated euclidean distance, also used for the discoverable radius.
pub type Distance = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Euclidean distance between two cells, truncated toward zero.
///
/// Uses the integer square root, so the result is exact for every pair of coordinates and never suffers from float
/// rounding near perfect squares.
pub fn distance(a: Coord2, b: Coord2) -> Distance {
    let dx = u32::from(a.0.abs_diff(b.0));
    let dy = u32::from(a.1.abs_diff(b.1));
    // max is isqrt(2 * 255^2) = 360
    (dx * dx + dy * dy).isqrt() as Distance
}

/// Iterates every coordinate of a `size` grid, row by row (`y` outer, `x` inner).
pub fn iter_row_major((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    (0..size_y).flat_map(move |y| (0..size_x).map(move |x| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn distance_truncates_toward_zero() {
        assert_eq!(distance((0, 0), (0, 0)), 0);
        assert_eq!(distance((0, 0), (1, 1)), 1);
        assert_eq!(distance((0, 0), (2, 2)), 2);
        assert_eq!(distance((0, 0), (3, 4)), 5);
        assert_eq!(distance((5, 1), (0, 0)), 5);
        assert_eq!(distance((0, 0), (255, 255)), 360);
    }

    #[test]
    fn row_major_walks_rows_first() {
        let coords: Vec<_> = iter_row_major((2, 3)).collect();
        assert_eq!(coords, [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(3, 4), 12);
        assert_eq!(mult(255, 255), 65025);
    }
}
