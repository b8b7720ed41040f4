//! Player view state
//!
//! Holds the terminal-facing state of the native player (dimensions, overlays,
//! redraw flag) and the shared types passed between input and render modules.
//! Playback state itself lives in the `PlaybackController`.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Boundary marker shown on the progress bar.
#[derive(Debug, Clone)]
pub struct SlideMarker {
    /// First frame of the slide
    pub frame: u32,
    /// Slide title
    pub label: String,
}

/// Terminal-facing state of the native player.
#[derive(Debug)]
pub struct ViewState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Number of rows available to the slide area (term_rows - chrome)
    pub view_rows: usize,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Number of chrome lines (separator + progress + control bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            view_rows: term_rows.saturating_sub(Self::STATUS_LINES) as usize,
            show_help: false,
            needs_render: true,
        }
    }

    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.view_rows = new_rows.saturating_sub(Self::STATUS_LINES) as usize;
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Row of the progress bar (0-indexed).
    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    /// Row of the control bar (0-indexed).
    pub fn control_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }
}
