//! Keyboard input handling for the native player.
//!
//! Maps key presses to player actions:
//! Right/Left move between slides, Space toggles playback, Home/End jump to
//! the first/last slide. Space is always consumed here, never passed through.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::PlayerAction;

/// Translate a key event into an action.
///
/// While the help overlay is open, any key press closes it.
pub fn action_for_key(key: KeyEvent, help_open: bool) -> Option<PlayerAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if help_open {
        return Some(PlayerAction::ToggleHelp);
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => Some(PlayerAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PlayerAction::Quit)
        }

        // === Slides ===
        KeyCode::Right => Some(PlayerAction::NextSlide),
        KeyCode::Left => Some(PlayerAction::PrevSlide),
        KeyCode::Home => Some(PlayerAction::FirstSlide),
        KeyCode::End => Some(PlayerAction::LastSlide),
        KeyCode::Char('r') => Some(PlayerAction::ReplaySlide),

        // === Playback ===
        KeyCode::Char(' ') => Some(PlayerAction::TogglePlay),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(PlayerAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(PlayerAction::SpeedDown),

        KeyCode::Char('?') => Some(PlayerAction::ToggleHelp),

        _ => None,
    }
}
