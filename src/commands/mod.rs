//! Subcommand handlers

pub mod check;
pub mod config;
pub mod play;
pub mod slides;

use std::path::PathBuf;

use anyhow::{Context, Result};

use slidecast::{Config, Deck};

/// Load the deck named on the command line, else the configured one, else the
/// built-in deck.
pub fn resolve_deck(config: &Config, deck: Option<PathBuf>) -> Result<Deck> {
    let path = deck.or_else(|| config.player.deck_path().map(PathBuf::from));
    let deck = Deck::load_or_builtin(path.as_deref());
    match &path {
        Some(path) => deck.with_context(|| format!("Cannot load deck {}", path.display())),
        None => deck.context("Cannot load built-in deck"),
    }
}
