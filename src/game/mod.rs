mod direction;
mod food;
mod grid;
mod snake;
mod state;
use self::direction::Direction;
use self::state::{GameState, Phase, Tick};
use crate::app::Exit;
use crate::command::Command;
use crate::consts;
use crate::events::EventSource;
use crate::ticker::Ticker;
use crate::util::get_display_area;
use crossterm::event::Event;
use log::{debug, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    ticker: Ticker,
    playthrough: u32,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(tick_period: Duration, mut rng: R) -> Game<R> {
        let state = GameState::new(&mut rng);
        info!(
            "Starting game; tick period {}ms",
            tick_period.as_millis()
        );
        Game {
            rng,
            state,
            ticker: Ticker::new(tick_period, Instant::now()),
            playthrough: 1,
        }
    }

    pub(crate) fn process_input<E: EventSource>(
        &mut self,
        events: &mut E,
    ) -> io::Result<Option<Exit>> {
        self.process_input_at(events, Instant::now)
    }

    /// Wait for input until the next tick is due, act on every event that
    /// has arrived, and then run the tick if its time has come.  Once the
    /// game is over, block until the player decides what to do next.
    fn process_input_at<E, C>(&mut self, events: &mut E, mut clock: C) -> io::Result<Option<Exit>>
    where
        E: EventSource,
        C: FnMut() -> Instant,
    {
        if self.state.over {
            let event = events.read()?;
            return Ok(self.handle_event(event, clock()));
        }
        if events.poll(self.ticker.remaining(clock()))? {
            while let Some(event) = events.try_read()? {
                if let exit @ Some(_) = self.handle_event(event, clock()) {
                    return Ok(exit);
                }
                if self.state.over {
                    return self.discard_pending(events);
                }
            }
        }
        let now = clock();
        if self.ticker.is_due(now) {
            self.tick();
            self.ticker.reset(now);
        }
        Ok(None)
    }

    /// Throw away input that arrived before the game-over prompt was shown,
    /// so that only keys pressed in response to it count.  `Ctrl-C` still
    /// exits.
    fn discard_pending<E: EventSource>(&mut self, events: &mut E) -> io::Result<Option<Exit>> {
        while let Some(event) = events.try_read()? {
            let cmd = event
                .as_key_press_event()
                .and_then(Command::from_key_event);
            if cmd == Some(Command::Interrupt) {
                info!("Interrupted with score {}", self.state.score);
                return Ok(Some(Exit));
            }
        }
        Ok(None)
    }

    fn tick(&mut self) {
        match self.state.update(&mut self.rng) {
            Tick::Idle | Tick::Moved => (),
            Tick::Ate => debug!(
                "Ate food at {}; score is now {}, tail length {}; next food at {}",
                self.state.snake.head(),
                self.state.score,
                self.state.snake.len(),
                self.state.food
            ),
            Tick::Collided => info!(
                "Snake ran into itself at {}; final score {}",
                self.state.snake.head(),
                self.state.score
            ),
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> Option<Exit> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if cmd == Command::Interrupt {
            info!("Interrupted with score {}", self.state.score);
            return Some(Exit);
        }
        match self.state.phase() {
            Phase::Idle | Phase::Playing => match cmd {
                Command::Up => self.turn(Direction::Up),
                Command::Down => self.turn(Direction::Down),
                Command::Left => self.turn(Direction::Left),
                Command::Right => self.turn(Direction::Right),
                Command::Quit => {
                    info!("Player quit with score {}", self.state.score);
                    self.state.quit();
                }
                Command::Restart | Command::Interrupt => (),
            },
            Phase::GameOver => match cmd {
                Command::Restart => self.restart(now),
                Command::Quit => return Some(Exit),
                _ => (),
            },
        }
        None
    }

    fn turn(&mut self, direction: Direction) {
        if self.state.turn(direction) {
            debug!("Heading {direction:?}");
        }
    }

    fn restart(&mut self, now: Instant) {
        self.playthrough += 1;
        info!("Restarting; playthrough #{}", self.playthrough);
        self.state = GameState::new(&mut self.rng);
        self.ticker.reset(now);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.score
    }

    fn head_symbol(&self) -> char {
        match self.state.heading {
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
            Some(Direction::Up) => consts::SNAKE_HEAD_UP_SYMBOL,
            Some(Direction::Down) => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Some(Direction::Left) => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Some(Direction::Right) => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [board_area, _, score_area, instructions_area, status_area] = Layout::vertical([
            Constraint::Length(self.state.grid.height.saturating_add(2)),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Block::bordered().render(board_area, buf);
        // Board cells are 1-indexed, so they line up with the bordered area
        // directly.
        let mut board = Canvas {
            area: board_area,
            buf,
        };
        board.draw_cell(self.state.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for pos in self.state.snake.segments() {
            board.draw_cell(pos, consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite the
        // segment it ran into
        let head = self.state.snake.head();
        if self.state.over && self.state.snake.self_collides(head) {
            board.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            board.draw_cell(head, self.head_symbol(), consts::SNAKE_STYLE);
        }

        Line::from(format!("Score: {}", self.state.score)).render(score_area, buf);
        Line::from_iter([
            Span::raw("Use "),
            Span::styled("WASD", consts::KEY_STYLE),
            Span::raw(" or Arrow keys. Press '"),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw("' to quit."),
        ])
        .render(instructions_area, buf);

        match self.state.phase() {
            Phase::Idle => Line::from("Press a direction key to start").render(status_area, buf),
            Phase::Playing => (),
            Phase::GameOver => {
                let mid = board_area.y.saturating_add(self.state.grid.height / 2);
                Line::from("GAME OVER").centered().render(
                    Rect {
                        y: mid,
                        height: 1,
                        ..board_area
                    },
                    buf,
                );
                Line::from_iter([
                    Span::raw("Press '"),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw("' to Restart or '"),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw("' to Quit"),
                ])
                .centered()
                .render(
                    Rect {
                        y: mid.saturating_add(2),
                        height: 1,
                        ..board_area
                    },
                    buf,
                );
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
