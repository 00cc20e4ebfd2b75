use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `grid`
    pub(super) fn advance(self, pos: Position, grid: Grid) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Left => x = x.saturating_sub(1),
            Direction::Right => x = x.saturating_add(1),
            Direction::Up => y = y.saturating_sub(1),
            Direction::Down => y = y.saturating_add(1),
        }
        grid.wrap(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
