//! Check command handler

use std::path::Path;

use anyhow::{Context, Result};

use slidecast::deck::composition_length;
use slidecast::theme::current_theme;
use slidecast::Deck;

use super::slides::format_duration;

/// Validate a deck file and print a one-line summary.
pub fn handle(path: &Path) -> Result<()> {
    let deck = Deck::load(path).with_context(|| format!("{} is not a valid deck", path.display()))?;
    let timeline = deck.timeline()?;
    let theme = current_theme();

    println!(
        "{}",
        theme.success_text(&format!(
            "{}: {} slides, {} interactive, {} rendered at {} fps",
            path.display(),
            timeline.len(),
            format_duration(timeline.total_duration(), deck.fps),
            format_duration(composition_length(&timeline), deck.fps),
            deck.fps
        ))
    );

    // Zero-length slides are legal but unreachable by frame lookup
    for index in 0..timeline.len() {
        let Some(range) = timeline.slide_range(index) else {
            continue;
        };
        if range.is_empty() {
            tracing::warn!(slide = index + 1, frame = range.start, "slide has no frames");
            println!(
                "{}",
                theme.error_text(&format!(
                    "warning: slide {} starts and ends at frame {}",
                    index + 1,
                    range.start
                ))
            );
        }
    }
    Ok(())
}
