//! Rendering components for the native player.
//!
//! This module contains the UI rendering functions for the player:
//! slide area, progress bar, control bar and help overlay.

mod help;
mod progress;
mod slide;
mod status;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    bar_width, build_progress_bar_chars, format_timestamp, frame_at_column, render_progress_bar,
};
pub use slide::{center_column, render_slide, slide_progress_line, truncate_to_width, SlideView};
pub use status::{
    control_bar_layout, render_control_bar, render_separator_line, slide_indicator,
    ControlBarInfo, ControlBarLayout, ControlButton,
};
