use crossterm::event::Event;
use std::io;
use std::time::Duration;

/// Where terminal input events come from
pub(crate) trait EventSource {
    /// Wait up to `timeout` for an event to become available.  Returns
    /// `true` if [`EventSource::read()`] will not block.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Wait for the next event
    fn read(&mut self) -> io::Result<Event>;

    /// Return an event if one is already waiting
    fn try_read(&mut self) -> io::Result<Option<Event>> {
        if self.poll(Duration::ZERO)? {
            self.read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Events read from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}
