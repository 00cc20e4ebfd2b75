use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;

/// Pick a random cell of `grid` for which `occupied` returns `false`.
///
/// At most one sample per cell of the board is drawn.  If every sample turns
/// out to be occupied (as when the snake fills the board), the last sample is
/// returned anyway.
pub(super) fn place<R, F>(rng: &mut R, grid: Grid, occupied: F) -> Position
where
    R: Rng,
    F: Fn(Position) -> bool,
{
    let mut pos = grid.random_position(rng);
    for _ in 1..grid.cell_count() {
        if !occupied(pos) {
            break;
        }
        pos = grid.random_position(rng);
    }
    pos
}
