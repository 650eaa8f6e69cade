use crate::game::SessionState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A discrete command decoded from a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Resume,
    Restart,
    ToggleTheme,
    Quit,
}

impl Command {
    /// Decode a key press.  The pause keys mean "pause" while the game is
    /// running and "resume" while it is paused, so the current session state
    /// is needed to pick between them.
    pub(crate) fn from_key_event(ev: KeyEvent, state: SessionState) -> Option<Command> {
        let toggle_pause = match state {
            SessionState::Running => Some(Command::Pause),
            SessionState::Paused => Some(Command::Resume),
            SessionState::Ended => None,
        };
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::MoveUp),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::MoveDown)
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::MoveLeft)
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::MoveRight)
            }
            (KeyModifiers::NONE, KeyCode::Char('p' | ' ') | KeyCode::Esc) => toggle_pause,
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('r')) => {
                Some(Command::Restart)
            }
            (KeyModifiers::NONE, KeyCode::Char('t')) => Some(Command::ToggleTheme),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}
