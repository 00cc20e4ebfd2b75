use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Ctrl-C: leave immediately
    Interrupt,
    Up,
    Down,
    Left,
    Right,
    Quit,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Interrupt),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                match c.to_ascii_lowercase() {
                    'w' => Some(Command::Up),
                    's' => Some(Command::Down),
                    'a' => Some(Command::Left),
                    'd' => Some(Command::Right),
                    'q' => Some(Command::Quit),
                    'r' => Some(Command::Restart),
                    _ => None,
                }
            }
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Right),
            _ => None,
        }
    }
}
