use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The playable area of the board.
///
/// Cells are 1-indexed: the top-left cell is `(1, 1)` and the bottom-right
/// cell is `(width, height)`.  Both dimensions are expected to be at least 3
/// and less than `u16::MAX`; smaller boards make wraparound meaningless and
/// are not guarded against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    pub(super) width: u16,
    pub(super) height: u16,
}

impl Grid {
    /// The board every game is played on
    pub(super) const STANDARD: Grid = Grid {
        width: consts::WIDTH,
        height: consts::HEIGHT,
    };

    /// Return the cell at which a new snake starts
    pub(super) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(super) fn contains(self, pos: Position) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    pub(super) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Every cell of the board in row-major order
    #[cfg(test)]
    pub(super) fn positions(self) -> ratatui::layout::Positions {
        ratatui::layout::Rect::new(1, 1, self.width, self.height).positions()
    }

    /// Wrap a position that has stepped at most one cell past an edge back
    /// onto the board
    pub(super) fn wrap(self, pos: Position) -> Position {
        Position {
            x: wrap(pos.x, 1, self.width),
            y: wrap(pos.y, 1, self.height),
        }
    }

    /// Pick a cell uniformly at random
    pub(super) fn random_position<R: Rng>(self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(1..=self.width),
            y: rng.random_range(1..=self.height),
        }
    }
}

/// Wrap a single coordinate into `min..=max`: anything past `max` reappears at
/// `min` and anything before `min` reappears at `max`.
pub(super) fn wrap(coord: u16, min: u16, max: u16) -> u16 {
    if coord > max {
        min
    } else if coord < min {
        max
    } else {
        coord
    }
}
