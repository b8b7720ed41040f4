//! Mouse input handling for the native player.
//!
//! Left clicks on the control-bar buttons act like their keys; a click on the
//! progress bar jumps to the slide under the cursor.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::PlayerAction;
use crate::player::render::{control_bar_layout, frame_at_column, ControlButton};
use crate::player::state::ViewState;
use crate::timeline::TimelineIndex;

/// Translate a mouse event into an action.
pub fn action_for_mouse(
    mouse: MouseEvent,
    view: &ViewState,
    timeline: &TimelineIndex,
    is_playing: bool,
) -> Option<PlayerAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if mouse.row == view.control_row() {
        return control_bar_layout(is_playing)
            .hit_test(mouse.column)
            .map(|button| match button {
                ControlButton::Prev => PlayerAction::PrevSlide,
                ControlButton::TogglePlay => PlayerAction::TogglePlay,
                ControlButton::Next => PlayerAction::NextSlide,
            });
    }

    if mouse.row == view.progress_row() {
        let frame = frame_at_column(mouse.column, view.term_cols, timeline.total_duration())?;
        return timeline
            .slide_index_at_frame(frame)
            .map(PlayerAction::GoToSlide);
    }

    None
}
