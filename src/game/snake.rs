use super::direction::Direction;
use super::grid::{Grid, Point};
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// Segments are stored head first.  The snake has no fixed capacity; it grows
/// by skipping the drop of its tail on a tick where it eats.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of all of the cells in the snake, with the head at the
    /// front and the tail at the back
    pub(super) segments: VecDeque<Point>,

    /// The direction in which the snake last moved (or, before its first move,
    /// is facing)
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a snake of `len` segments lying along the middle row of `grid`,
    /// tail in the leftmost column, facing right.
    ///
    /// `len` is clamped to the number of columns.
    pub(super) fn new(grid: Grid, len: usize) -> Snake {
        let row = grid.rows() / 2;
        let segments = (0..grid.columns())
            .take(len.max(1))
            .rev()
            .map(|col| grid.cell_at(col, row))
            .collect();
        Snake {
            segments,
            heading: Direction::Right,
        }
    }

    #[cfg(test)]
    pub(super) fn from_segments<I: IntoIterator<Item = Point>>(
        segments: I,
        heading: Direction,
    ) -> Snake {
        Snake {
            segments: segments.into_iter().collect(),
            heading,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        self.segments.front().copied().unwrap_or_default()
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    /// Return all segments, head first
    pub(crate) fn segments(&self) -> &VecDeque<Point> {
        &self.segments
    }

    /// Return the segments behind the head
    pub(crate) fn body(&self) -> impl Iterator<Item = &Point> + '_ {
        self.segments.iter().skip(1)
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Push a new head one cell of size `step` away in `direction` and return
    /// it.  The tail is left in place; call [`Snake::drop_tail()`] unless the
    /// snake is growing.
    pub(super) fn advance(&mut self, direction: Direction, step: u16) -> Point {
        let head = direction.advance(self.head(), step);
        self.segments.push_front(head);
        self.heading = direction;
        head
    }

    /// Remove the last segment and return the position it vacated
    pub(super) fn drop_tail(&mut self) -> Option<Point> {
        if self.segments.len() > 1 {
            self.segments.pop_back()
        } else {
            None
        }
    }

    /// Test whether the head overlaps any other segment or `vacated`, the cell
    /// the tail left on this same move.
    pub(super) fn bites_itself(&self, vacated: Option<Point>) -> bool {
        let head = self.head();
        vacated == Some(head) || self.body().any(|&p| p == head)
    }
}
