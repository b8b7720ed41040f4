//! Play command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use slidecast::player::{play_deck, PlaybackResult, PlayerOptions};
use slidecast::theme::current_theme;
use slidecast::Config;

use super::resolve_deck;

/// Merge command-line flags over the configured player defaults.
///
/// `slide` is one-based, as typed by the user.
pub fn player_options(
    config: &Config,
    slide: Option<u32>,
    autoplay: bool,
    speed: Option<f64>,
) -> PlayerOptions {
    PlayerOptions {
        start_slide: slide.map(|n| n.saturating_sub(1) as usize).unwrap_or(0),
        autoplay: autoplay || config.player.autoplay,
        speed: speed.unwrap_or(config.player.speed),
        show_help: config.player.show_help_on_start,
    }
}

/// Play a deck in the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    deck: Option<PathBuf>,
    slide: Option<u32>,
    autoplay: bool,
    speed: Option<f64>,
) -> Result<()> {
    let deck = resolve_deck(config, deck)?;
    let options = player_options(config, slide, autoplay, speed);

    if options.start_slide >= deck.slides.len() {
        bail!(
            "Slide {} does not exist (deck has {} slides)",
            options.start_slide + 1,
            deck.slides.len()
        );
    }

    let theme = current_theme();
    match play_deck(&deck, &options)? {
        PlaybackResult::Quit { last_slide } => {
            println!(
                "{}",
                theme.secondary_text(&format!(
                    "Stopped on slide {} / {}",
                    last_slide + 1,
                    deck.slides.len()
                ))
            );
        }
    }
    Ok(())
}
