//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Number of playable columns on the board
pub(crate) const WIDTH: u16 = 40;

/// Number of playable rows on the board
pub(crate) const HEIGHT: u16 = 20;

/// Default time between movements of the snake, in milliseconds
pub(crate) const TICK_MILLIS: u64 = 100;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(TICK_MILLIS);

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.  This is also the smallest terminal the game will run in:
/// the board plus its border, a blank line, the score line, the instructions
/// line, and a status line.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: WIDTH + 2,
    height: HEIGHT + 6,
};

/// Glyph for the snake's head before the game has started
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = 'O';

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the segments of the snake's tail
pub(crate) const SNAKE_TAIL_SYMBOL: char = 'o';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it has run into its own tail
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and tail
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
