//! Input handling: terminal events to game actions.

use crate::core::session::GameSession;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;
use ratatui::layout::Rect;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    /// Space.
    Jump,
    /// Enter, activating the retry control from the keyboard.
    Retry,
    /// Left mouse button press, in terminal cells.
    Click { column: u16, row: u16 },
    /// q, Esc or Ctrl-C.
    Quit,
    /// Any other key or mouse event.
    Other,
}

/// What the main loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn map_key(key: KeyEvent) -> RunnerInput {
    if key.kind == KeyEventKind::Release {
        return RunnerInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') => RunnerInput::Jump,
        KeyCode::Enter => RunnerInput::Retry,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => RunnerInput::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => RunnerInput::Quit,
        _ => RunnerInput::Other,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> RunnerInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => RunnerInput::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => RunnerInput::Other,
    }
}

/// Apply an input to the session.
///
/// `retry_button` is where the retry control was last drawn, if it is
/// showing. The control only exists while the session is over.
pub fn process_input(
    session: &mut GameSession,
    input: RunnerInput,
    retry_button: Option<Rect>,
) -> InputResult {
    match input {
        RunnerInput::Quit => return InputResult::Quit,
        RunnerInput::Jump => session.jump(),
        RunnerInput::Retry => {
            if session.game_over {
                session.reset();
            }
        }
        RunnerInput::Click { column, row } => {
            let hit = retry_button.is_some_and(|area| contains(area, column, row));
            if session.game_over && hit {
                session.reset();
            } else {
                debug!("click at ({}, {}) ignored", column, row);
            }
        }
        RunnerInput::Other => {}
    }
    InputResult::Continue
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
