use crate::consts;
use rand::Rng;
use std::fmt;

/// A position on the playing field, measured in the same units as the grid's
/// cell size.
///
/// Coordinates are signed so that a head which has stepped past the left or
/// top wall can still be represented (and then rejected by
/// [`Grid::contains()`]).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub(crate) fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of the playing field: `columns` × `rows` cells, each
/// `cell_size` units on a side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    cell_size: u16,
    columns: u16,
    rows: u16,
}

impl Grid {
    /// Returns `None` if any dimension is zero.
    pub(crate) fn new(cell_size: u16, columns: u16, rows: u16) -> Option<Grid> {
        (cell_size > 0 && columns > 0 && rows > 0).then_some(Grid {
            cell_size,
            columns,
            rows,
        })
    }

    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }

    pub(crate) fn columns(self) -> u16 {
        self.columns
    }

    pub(crate) fn rows(self) -> u16 {
        self.rows
    }

    /// Total number of cells on the grid
    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    pub(crate) fn pixel_width(self) -> i32 {
        i32::from(self.columns) * i32::from(self.cell_size)
    }

    pub(crate) fn pixel_height(self) -> i32 {
        i32::from(self.rows) * i32::from(self.cell_size)
    }

    /// Test whether `p` lies within the bounds of the grid
    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.pixel_width()).contains(&p.x) && (0..self.pixel_height()).contains(&p.y)
    }

    /// Return the top-left position of the cell at column `col` and row `row`
    pub(crate) fn cell_at(self, col: u16, row: u16) -> Point {
        let size = i32::from(self.cell_size);
        Point::new(i32::from(col) * size, i32::from(row) * size)
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Point {
        let col = rng.random_range(0..self.columns);
        let row = rng.random_range(0..self.rows);
        self.cell_at(col, row)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            cell_size: consts::DEFAULT_CELL_SIZE,
            columns: consts::DEFAULT_COLUMNS,
            rows: consts::DEFAULT_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    fn grid() -> Grid {
        Grid::default()
    }

    #[test]
    fn zero_dimensions() {
        assert_eq!(Grid::new(0, 40, 25), None);
        assert_eq!(Grid::new(30, 0, 25), None);
        assert_eq!(Grid::new(30, 40, 0), None);
    }

    #[test]
    fn cell_count() {
        assert_eq!(grid().cell_count(), 800);
    }

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(1170, 570), true)]
    #[case(Point::new(90, 60), true)]
    #[case(Point::new(-30, 60), false)]
    #[case(Point::new(60, -30), false)]
    #[case(Point::new(1200, 60), false)]
    #[case(Point::new(60, 600), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(grid().contains(p), inside);
    }

    #[test]
    fn random_cells_are_aligned_and_inside() {
        let grid = grid();
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..500 {
            let p = grid.random_cell(&mut rng);
            assert!(grid.contains(p), "{p} is outside the grid");
            assert_eq!(p.x % 30, 0);
            assert_eq!(p.y % 30, 0);
        }
    }
}
