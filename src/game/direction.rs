use super::grid::Point;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Return the position one cell of size `step` away from `pos` in this
    /// direction.  No bounds checking is done.
    pub(crate) fn advance(self, pos: Point, step: u16) -> Point {
        let step = i32::from(step);
        match self {
            Direction::Up => pos.offset(0, -step),
            Direction::Down => pos.offset(0, step),
            Direction::Left => pos.offset(-step, 0),
            Direction::Right => pos.offset(step, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
