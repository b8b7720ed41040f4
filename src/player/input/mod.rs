//! Input handling for the native player.
//!
//! Keyboard and mouse events are first translated into a `PlayerAction`, then
//! applied to the controller and view state. Keeping the two steps apart lets
//! buttons, keys and clicks share one code path.

mod keyboard;
mod mouse;

pub use keyboard::action_for_key;
pub use mouse::action_for_mouse;

use crossterm::event::Event;

use crate::player::controller::PlaybackController;
use crate::player::engine::ClockPlayer;
use crate::player::state::{InputResult, ViewState};

/// User intent, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    ReplaySlide,
    GoToSlide(usize),
    TogglePlay,
    SpeedUp,
    SpeedDown,
    ToggleHelp,
    Quit,
}

/// Apply an action to the controller and view.
pub fn apply_action(
    action: PlayerAction,
    controller: &mut PlaybackController<ClockPlayer>,
    view: &mut ViewState,
) -> InputResult {
    match action {
        PlayerAction::Quit => return InputResult::Quit,
        PlayerAction::ToggleHelp => view.toggle_help(),
        PlayerAction::NextSlide => {
            controller.next_slide();
        }
        PlayerAction::PrevSlide => {
            controller.prev_slide();
        }
        PlayerAction::FirstSlide => {
            controller.first_slide();
        }
        PlayerAction::LastSlide => {
            controller.last_slide();
        }
        PlayerAction::ReplaySlide => {
            controller.replay_slide();
        }
        PlayerAction::GoToSlide(index) => {
            controller.seek_to_slide(index);
        }
        PlayerAction::TogglePlay => controller.toggle_play(),
        PlayerAction::SpeedUp => {
            if let Some(player) = controller.player_mut() {
                player.speed_up();
            }
        }
        PlayerAction::SpeedDown => {
            if let Some(player) = controller.player_mut() {
                player.speed_down();
            }
        }
    }
    view.needs_render = true;
    InputResult::Continue
}

/// Handle any terminal event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    controller: &mut PlaybackController<ClockPlayer>,
    view: &mut ViewState,
) -> InputResult {
    let action = match event {
        Event::Key(key) => action_for_key(key, view.show_help),
        Event::Mouse(mouse) => action_for_mouse(
            mouse,
            view,
            controller.timeline(),
            controller.is_playing(),
        ),
        Event::Resize(cols, rows) => {
            view.handle_resize(cols, rows);
            None
        }
        _ => None, // Ignore focus and paste events
    };

    match action {
        Some(action) => apply_action(action, controller, view),
        None => InputResult::Continue,
    }
}
