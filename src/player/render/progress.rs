//! Progress bar rendering for the native player.
//!
//! Displays the playback cursor over the whole timeline with a `◆` at every
//! slide boundary.

use std::io::Write;

use anyhow::Result;

use crate::player::state::SlideMarker;

/// Columns the progress row spends outside the bar (padding + time display).
pub const PROGRESS_CHROME: usize = 14;

/// Format a frame position as MM:SS at the given frame rate.
pub fn format_timestamp(frame: u32, fps: u32) -> String {
    let total_secs = frame / fps.max(1);
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Width of the bar itself for a terminal width.
pub fn bar_width(term_cols: u16) -> usize {
    (term_cols as usize).saturating_sub(PROGRESS_CHROME)
}

/// Frame under a column of the progress row, if the column is on the bar.
///
/// The bar starts at column 1 (after one column of padding).
pub fn frame_at_column(column: u16, term_cols: u16, total_frames: u32) -> Option<u32> {
    let width = bar_width(term_cols);
    let offset = (column as usize).checked_sub(1)?;
    if offset >= width || total_frames == 0 {
        return None;
    }
    let ratio = offset as f64 / width as f64;
    Some(((ratio * total_frames as f64) as u32).min(total_frames - 1))
}

/// Build the progress bar character array.
///
/// Returns `(bar_chars, filled_count)`. The playhead `⏺` wins over a marker
/// in the same cell.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_frame: u32,
    total_frames: u32,
    markers: &[SlideMarker],
) -> (Vec<char>, usize) {
    let progress = if total_frames > 0 {
        (current_frame as f64 / total_frames as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar = vec!['─'; bar_width];
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for marker in markers {
        let pos = if total_frames > 0 {
            ((marker.frame as f64 / total_frames as f64) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != '⏺' {
            bar[pos] = '◆';
        }
    }

    (bar, filled)
}

/// Render the progress row.
///
/// # Arguments
/// * `out` - Output sink
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `current_frame` - Playback cursor
/// * `total_frames` - Timeline length
/// * `fps` - Frame rate for the time display
/// * `markers` - Slide boundaries
pub fn render_progress_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    current_frame: u32,
    total_frames: u32,
    fps: u32,
    markers: &[SlideMarker],
) -> Result<()> {
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let width_chars = bar_width(width);
    let (bar, filled) = build_progress_bar_chars(width_chars, current_frame, total_frames, markers);
    let time_display = format!(
        " {}/{}",
        format_timestamp(current_frame, fps),
        format_timestamp(total_frames, fps)
    );

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    for (i, &c) in bar.iter().enumerate() {
        let color = match (i.cmp(&filled), c) {
            (_, '◆') => YELLOW,
            (std::cmp::Ordering::Less, _) => GREEN,
            (std::cmp::Ordering::Equal, _) => WHITE,
            _ => DARK_GREY,
        };
        output.push_str(color);
        output.push(if i < filled && c == '─' { '━' } else { c });
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used = 1 + width_chars + time_display.len();
    output.push_str(&" ".repeat((width as usize).saturating_sub(used)));
    output.push_str("\x1b[0m");

    write!(out, "{}", output)?;
    Ok(())
}
