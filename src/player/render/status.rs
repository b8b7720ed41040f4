//! Control bar rendering for the native player.
//!
//! The bottom row carries the Prev / play-pause / Next buttons, the
//! "Slide X / N" indicator with the slide title, the playback speed and the
//! key hints. Button positions come from `control_bar_layout`, which the mouse
//! handler shares for hit testing.

use std::io::Write;
use std::ops::Range;

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use super::slide::truncate_to_width;

const PREV_LABEL: &str = "[◀ Prev]";
const NEXT_LABEL: &str = "[Next ▶]";
const PLAY_LABEL: &str = "[▶ Play ]";
const PAUSE_LABEL: &str = "[⏸ Pause]";
const KEY_HINTS: &str = "space:play ←/→:slide ?:help q:quit";

/// A clickable control-bar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Prev,
    TogglePlay,
    Next,
}

/// Column ranges of the control-bar buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBarLayout {
    pub prev: Range<u16>,
    pub toggle: Range<u16>,
    pub next: Range<u16>,
}

impl ControlBarLayout {
    /// Button under a column, if any.
    pub fn hit_test(&self, column: u16) -> Option<ControlButton> {
        if self.prev.contains(&column) {
            Some(ControlButton::Prev)
        } else if self.toggle.contains(&column) {
            Some(ControlButton::TogglePlay)
        } else if self.next.contains(&column) {
            Some(ControlButton::Next)
        } else {
            None
        }
    }

    /// First column after the buttons.
    fn end(&self) -> u16 {
        self.next.end
    }
}

fn toggle_label(is_playing: bool) -> &'static str {
    if is_playing {
        PAUSE_LABEL
    } else {
        PLAY_LABEL
    }
}

/// Compute button positions: one column of padding, buttons separated by a space.
pub fn control_bar_layout(is_playing: bool) -> ControlBarLayout {
    let mut col = 1u16;
    let mut place = |label: &str| {
        let start = col;
        col += label.width() as u16;
        let range = start..col;
        col += 1;
        range
    };
    let prev = place(PREV_LABEL);
    let toggle = place(toggle_label(is_playing));
    let next = place(NEXT_LABEL);
    ControlBarLayout { prev, toggle, next }
}

/// What the control bar shows.
#[derive(Debug, Clone)]
pub struct ControlBarInfo<'a> {
    pub is_playing: bool,
    /// Zero-based current slide
    pub current_slide: usize,
    pub slide_count: usize,
    pub title: &'a str,
    pub rate: f64,
}

/// Text of the "Slide X / N" indicator (one-based).
pub fn slide_indicator(current_slide: usize, slide_count: usize) -> String {
    format!("Slide {} / {}", current_slide + 1, slide_count)
}

/// Render a separator line.
pub fn render_separator_line(out: &mut impl Write, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    output.push_str(&"─".repeat(width as usize));
    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the control bar.
pub fn render_control_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    info: &ControlBarInfo<'_>,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";
    const DARK_GREY: &str = "\x1b[90m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let layout = control_bar_layout(info.is_playing);
    let mut output = String::with_capacity(256);
    output.push_str(&format!("\x1b[{};1H ", row + 1));

    output.push_str(WHITE);
    output.push_str(PREV_LABEL);
    output.push(' ');
    output.push_str(GREEN);
    output.push_str(toggle_label(info.is_playing));
    output.push(' ');
    output.push_str(WHITE);
    output.push_str(NEXT_LABEL);
    let mut visible = layout.end() as usize;

    let indicator = format!("  {}", slide_indicator(info.current_slide, info.slide_count));
    output.push_str(CYAN);
    output.push_str(&indicator);
    visible += indicator.width();

    let speed = format!("  {:.2}x", info.rate);
    let hints = format!(" │ {}", KEY_HINTS);
    let tail_width = speed.width() + hints.width();

    // Title gets whatever is left before the speed/hints tail
    let room = (width as usize).saturating_sub(visible + tail_width + 2);
    if room > 0 && !info.title.is_empty() {
        let title = truncate_to_width(info.title, room);
        output.push_str(WHITE);
        output.push_str("  ");
        output.push_str(&title);
        visible += 2 + title.width();
    }

    if visible + tail_width <= width as usize {
        output.push_str(DARK_GREY);
        output.push_str(&speed);
        output.push_str(&hints);
        visible += tail_width;
    }

    output.push_str(&" ".repeat((width as usize).saturating_sub(visible)));
    output.push_str(RESET);
    write!(out, "{}", output)?;
    Ok(())
}
