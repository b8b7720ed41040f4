//! Slide area rendering for the native player.
//!
//! Draws the active slide's title and subtitle centered in the rows above the
//! chrome, with a thin per-slide progress line underneath. Widths are measured
//! in terminal cells so CJK titles center correctly.

use std::io::Write;

use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::current_theme;

/// What the slide area shows.
#[derive(Debug, Clone)]
pub struct SlideView<'a> {
    pub deck_title: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    /// Frames elapsed since the slide's first frame
    pub local_frame: u32,
    /// Frame length of the slide
    pub slide_frames: u32,
}

/// Cut `text` to at most `max_width` cells, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Starting column (0-indexed) that centers `text_width` cells.
pub fn center_column(text_width: usize, term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(text_width) / 2) as u16
}

/// Build the per-slide progress line of `width` cells.
pub fn slide_progress_line(local_frame: u32, slide_frames: u32, width: usize) -> String {
    let ratio = if slide_frames > 0 {
        (local_frame as f64 / slide_frames as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let filled = (width as f64 * ratio).round() as usize;
    format!("{}{}", "━".repeat(filled), "─".repeat(width - filled))
}

fn write_centered(out: &mut String, row: usize, term_width: u16, text: &str, styled: String) {
    let col = center_column(text.width(), term_width);
    out.push_str(&format!("\x1b[{};{}H{}", row + 1, col + 1, styled));
}

/// Render the slide area into rows `0..view_rows`.
pub fn render_slide(
    out: &mut impl Write,
    width: u16,
    view_rows: usize,
    view: &SlideView<'_>,
) -> Result<()> {
    let theme = current_theme();
    let mut output = String::with_capacity(view_rows * 8 + 256);

    for row in 0..view_rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    let max = (width as usize).saturating_sub(4);
    if view_rows >= 1 && !view.deck_title.is_empty() {
        let deck_title = truncate_to_width(view.deck_title, max);
        write_centered(
            &mut output,
            0,
            width,
            &deck_title,
            theme.secondary_text(&deck_title),
        );
    }

    let middle = view_rows / 2;
    let title = truncate_to_width(view.title, max);
    if middle < view_rows {
        write_centered(
            &mut output,
            middle,
            width,
            &title,
            format!("\x1b[1m{}", theme.accent_text(&title)),
        );
    }

    if middle + 2 < view_rows && !view.subtitle.is_empty() {
        let subtitle = truncate_to_width(view.subtitle, max);
        write_centered(
            &mut output,
            middle + 2,
            width,
            &subtitle,
            theme.primary_text(&subtitle),
        );
    }

    if middle + 4 < view_rows {
        let line_width = (width as usize / 3).max(1);
        let line = slide_progress_line(view.local_frame, view.slide_frames, line_width);
        write_centered(
            &mut output,
            middle + 4,
            width,
            &line,
            theme.secondary_text(&line),
        );
    }

    write!(out, "{}", output)?;
    Ok(())
}
