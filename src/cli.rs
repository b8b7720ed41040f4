//! Command-line interface definition
//!
//! Kept in the library so the xtask man-page generator and shell completions
//! see the same clap model as the binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::player::engine::{is_valid_rate, MAX_RATE, MIN_RATE};

/// Version string: `0.1.0 (2026-01-01 abc1234)` for dev builds, the build date
/// only for release builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SLIDECAST_BUILD_DATE"),
    " ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SLIDECAST_BUILD_DATE"),
    ")"
);

/// Parse a `--speed` value, rejecting NaN and anything outside the rate limits.
fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if is_valid_rate(speed) {
        Ok(speed)
    } else {
        Err(format!(
            "speed must be between {} and {}",
            MIN_RATE, MAX_RATE
        ))
    }
}

#[derive(Debug, Parser)]
#[command(name = "slidecast")]
#[command(version = VERSION)]
#[command(about = "Play frame-timed slide decks in the terminal")]
#[command(
    long_about = "Play frame-timed slide decks in the terminal.\n\n\
    Each slide plays once and stops on its last frame. Use the arrow keys \
    to move between slides and Space to resume free playback."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a deck interactively
    Play {
        /// Deck file (TOML); defaults to the configured deck or the built-in one
        #[arg(short, long)]
        deck: Option<PathBuf>,

        /// Slide to start on (1-based)
        #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        slide: Option<u32>,

        /// Start playing immediately
        #[arg(short, long)]
        autoplay: bool,

        /// Playback speed multiplier (0.25 - 4.0)
        #[arg(long, value_name = "X", value_parser = parse_speed)]
        speed: Option<f64>,
    },

    /// List the slides of a deck with their frame ranges
    Slides {
        /// Deck file (TOML); defaults to the configured deck or the built-in one
        #[arg(short, long)]
        deck: Option<PathBuf>,

        /// Print the sequence plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a deck file
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open the configuration file in $EDITOR
    Edit,

    /// Add fields missing from the configuration file
    Migrate {
        /// Apply changes without asking
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Play { .. })
    }
}
