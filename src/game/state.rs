use super::direction::Direction;
use super::food;
use super::grid::Grid;
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The state of a single playthrough
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct GameState {
    pub(super) grid: Grid,
    pub(super) score: u32,
    /// `None` until the player first picks a direction
    pub(super) heading: Option<Direction>,
    pub(super) snake: Snake,
    pub(super) food: Position,
    pub(super) over: bool,
}

impl GameState {
    /// Set up a fresh playthrough on the standard board
    pub(super) fn new<R: Rng>(rng: &mut R) -> GameState {
        GameState::with_grid(Grid::STANDARD, rng)
    }

    pub(super) fn with_grid<R: Rng>(grid: Grid, rng: &mut R) -> GameState {
        let snake = Snake::new(grid.center());
        let food = food::place(rng, grid, |p| snake.occupies(p));
        GameState {
            grid,
            score: 0,
            heading: None,
            snake,
            food,
            over: false,
        }
    }

    pub(super) fn phase(&self) -> Phase {
        if self.over {
            Phase::GameOver
        } else if self.heading.is_none() {
            Phase::Idle
        } else {
            Phase::Playing
        }
    }

    /// Ask the snake to change direction as of the next tick.  Reversing
    /// straight into the snake's own neck is refused.  Returns `true` if the
    /// heading was accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if self.over || self.heading == Some(direction.reverse()) {
            return false;
        }
        self.heading = Some(direction);
        true
    }

    /// End the playthrough at the player's request
    pub(super) fn quit(&mut self) {
        self.over = true;
    }

    /// Run one tick of game logic
    pub(super) fn update<R: Rng>(&mut self, rng: &mut R) -> Tick {
        if self.over {
            return Tick::Idle;
        }
        let Some(heading) = self.heading else {
            return Tick::Idle;
        };
        let new_head = heading.advance(self.snake.head(), self.grid);
        debug_assert!(self.grid.contains(new_head), "{new_head} is off the board");
        let will_eat = new_head == self.food;
        self.snake.advance(new_head);
        if self.snake.self_collides(new_head) {
            self.over = true;
            return Tick::Collided;
        }
        if will_eat {
            self.score += consts::FOOD_POINTS;
            self.snake.grow();
            let snake = &self.snake;
            self.food = food::place(rng, self.grid, |p| snake.occupies(p));
            Tick::Ate
        } else {
            Tick::Moved
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Phase {
    /// Waiting for the first directional input
    Idle,
    Playing,
    GameOver,
}

/// What happened during a call to [`GameState::update()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Tick {
    /// The snake didn't move
    Idle,
    Moved,
    Ate,
    Collided,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::{HashSet, VecDeque};

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> (GameState, ChaCha12Rng) {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let state = GameState::new(&mut rng);
        (state, rng)
    }

    #[test]
    fn setup() {
        let (state, _) = new_game();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position::new(20, 10));
        assert_eq!(state.snake.len(), 0);
        assert!(state.grid.contains(state.food));
        assert_ne!(state.food, state.snake.head());
    }

    #[test]
    fn idle_does_not_move() {
        let (mut state, mut rng) = new_game();
        let before = state.clone();
        assert_eq!(state.update(&mut rng), Tick::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn first_direction_starts_play() {
        let (mut state, _) = new_game();
        assert!(state.turn(Direction::Down));
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.heading, Some(Direction::Down));
    }

    #[rstest]
    #[case(Direction::Right, Direction::Left)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    fn reverse_rejected(#[case] heading: Direction, #[case] input: Direction) {
        let (mut state, _) = new_game();
        state.heading = Some(heading);
        assert!(!state.turn(input));
        assert_eq!(state.heading, Some(heading));
    }

    #[rstest]
    #[case(Direction::Right, Direction::Right)]
    #[case(Direction::Right, Direction::Up)]
    #[case(Direction::Right, Direction::Down)]
    #[case(Direction::Up, Direction::Left)]
    fn other_turns_accepted(#[case] heading: Direction, #[case] input: Direction) {
        let (mut state, _) = new_game();
        state.heading = Some(heading);
        assert!(state.turn(input));
        assert_eq!(state.heading, Some(input));
    }

    #[test]
    fn last_turn_before_tick_wins() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(1, 1);
        state.heading = Some(Direction::Right);
        state.turn(Direction::Up);
        state.turn(Direction::Left);
        state.update(&mut rng);
        assert_eq!(state.snake.head(), Position::new(19, 10));
    }

    #[test]
    fn no_turns_after_game_over() {
        let (mut state, _) = new_game();
        state.heading = Some(Direction::Right);
        state.quit();
        assert!(!state.turn(Direction::Up));
        assert_eq!(state.heading, Some(Direction::Right));
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn plain_move() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(5, 5);
        assert!(state.turn(Direction::Right));
        assert_eq!(state.update(&mut rng), Tick::Moved);
        assert_eq!(state.snake.head(), Position::new(21, 10));
        assert_eq!(state.snake.segments().count(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.food, Position::new(5, 5));
    }

    #[test]
    fn eat_food() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(21, 10);
        assert!(state.turn(Direction::Right));
        assert_eq!(state.update(&mut rng), Tick::Ate);
        assert_eq!(state.snake.head(), Position::new(21, 10));
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 1);
        assert!(!state.snake.occupies(state.food));
        assert!(state.grid.contains(state.food));
        state.food = Position::new(5, 5);
        assert_eq!(state.update(&mut rng), Tick::Moved);
        assert_eq!(
            state.snake.segments().collect::<Vec<_>>(),
            [Position::new(21, 10)]
        );
    }

    #[test]
    fn wrap_around_right_edge() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(5, 5);
        state.snake.head = Position::new(40, 7);
        state.heading = Some(Direction::Right);
        state.update(&mut rng);
        assert_eq!(state.snake.head(), Position::new(1, 7));
        assert!(!state.over);
    }

    #[test]
    fn wrap_around_top_edge() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(5, 5);
        state.snake.head = Position::new(9, 1);
        state.heading = Some(Direction::Up);
        state.update(&mut rng);
        assert_eq!(state.snake.head(), Position::new(9, 20));
    }

    #[test]
    fn collide_with_tail() {
        let (mut state, mut rng) = new_game();
        state.food = Position::new(5, 5);
        state.score = 40;
        // A hook whose tail curls back in front of the head:
        //   t t t
        //   t H t
        //     t t  <- head at (10,10) moving down hits (10,11)
        state.snake.head = Position::new(10, 10);
        state.snake.tail = VecDeque::from([
            Position::new(11, 10),
            Position::new(11, 11),
            Position::new(10, 11),
            Position::new(10, 12),
        ]);
        state.snake.len = 4;
        state.heading = Some(Direction::Down);
        assert_eq!(state.update(&mut rng), Tick::Collided);
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.score, 40);
        assert_eq!(state.snake.head(), Position::new(10, 11));
        assert_eq!(state.update(&mut rng), Tick::Idle);
    }

    #[test]
    fn collision_beats_eating() {
        let (mut state, mut rng) = new_game();
        state.score = 40;
        state.snake.head = Position::new(10, 10);
        state.snake.tail = VecDeque::from([
            Position::new(11, 10),
            Position::new(11, 11),
            Position::new(10, 11),
            Position::new(10, 12),
        ]);
        state.snake.len = 4;
        state.food = Position::new(10, 11);
        state.heading = Some(Direction::Down);
        assert_eq!(state.update(&mut rng), Tick::Collided);
        assert_eq!(state.score, 40);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.food, Position::new(10, 11));
    }

    #[test]
    fn follow_own_tail_end() {
        // The oldest segment moves out of the way as the head moves in.
        let (mut state, mut rng) = new_game();
        state.food = Position::new(5, 5);
        state.score = 30;
        state.snake.head = Position::new(10, 10);
        state.snake.tail = VecDeque::from([
            Position::new(11, 10),
            Position::new(11, 11),
            Position::new(10, 11),
        ]);
        state.snake.len = 3;
        state.heading = Some(Direction::Down);
        assert_eq!(state.update(&mut rng), Tick::Moved);
        assert_eq!(
            state.snake.segments().collect::<Vec<_>>(),
            [
                Position::new(10, 10),
                Position::new(11, 10),
                Position::new(11, 11)
            ]
        );
    }

    #[test]
    fn random_play_invariants() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut choices = ChaCha12Rng::seed_from_u64(!RNG_SEED);
        let grid = Grid {
            width: 6,
            height: 5,
        };
        let directions = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        let mut meals = 0;
        for _ in 0..20 {
            let mut state = GameState::with_grid(grid, &mut rng);
            state.turn(Direction::Right);
            for _ in 0..500 {
                if choices.random_ratio(1, 3) {
                    state.turn(directions[choices.random_range(0..directions.len())]);
                }
                let tick = state.update(&mut rng);
                assert_eq!(
                    state.snake.len() * 10,
                    usize::try_from(state.score).unwrap()
                );
                assert!(grid.contains(state.snake.head()));
                if tick == Tick::Collided {
                    assert!(state.snake.self_collides(state.snake.head()));
                    break;
                }
                assert!(!state.snake.self_collides(state.snake.head()));
                let cells = state.snake.segments().collect::<HashSet<_>>();
                assert_eq!(cells.len(), state.snake.segments().count());
                // Placement can only fail once most of the board is taken
                if state.snake.len() < grid.cell_count() / 2 {
                    assert!(!state.snake.occupies(state.food));
                }
                if tick == Tick::Ate {
                    meals += 1;
                }
            }
        }
        assert!(meals > 0, "no food was eaten in any game");
    }
}
