use crate::events::EventSource;
use crate::game::Game;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Returned from input processing when the player wants to leave the program
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Exit;

#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: Game<R>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App { game }
    }

    /// Run the game until the player quits.  Returns the score of the last
    /// playthrough.
    pub(crate) fn run<B: Backend, E: EventSource>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<u32> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if let Some(Exit) = self.game.process_input(events)? {
                return Ok(self.game.score());
            }
        }
    }
}
