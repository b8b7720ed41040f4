//! Slide decks
//!
//! A deck is the static configuration behind a presentation: slide start
//! frames, titles, and the frame rate. Decks are read from TOML or taken from
//! the built-in deck, and are never mutated after loading.
//!
//! ```toml
//! title = "My talk"
//! fps = 30
//! trailing_frames = 300
//!
//! [[slides]]
//! start = 0
//! title = "Cover"
//!
//! [[slides]]
//! start = 90
//! title = "Agenda"
//! subtitle = "What we'll cover"
//! ```

mod builtin;
pub mod composition;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::timeline::{Frame, TimelineError, TimelineIndex, DEFAULT_FALLBACK_FRAMES};

pub use composition::{composition_length, sequence_plan, Sequence};

/// Default frame rate.
pub const DEFAULT_FPS: u32 = 30;
/// Default length of the last slide in the interactive player.
pub const DEFAULT_TRAILING_FRAMES: Frame = 300;

/// Errors raised while loading a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid deck file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid slide timeline: {0}")]
    Timeline(#[from] TimelineError),

    #[error("Frame rate must be at least 1")]
    ZeroFps,
}

/// One slide of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// First frame of the slide
    pub start: Frame,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
}

/// A presentation: ordered slides on a frame timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Frames the last slide plays in the interactive player
    #[serde(default = "default_trailing_frames")]
    pub trailing_frames: Frame,
    /// Declared length of the last slide in the sequence plan
    #[serde(default = "default_fallback_frames")]
    pub fallback_frames: Frame,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_trailing_frames() -> Frame {
    DEFAULT_TRAILING_FRAMES
}

fn default_fallback_frames() -> Frame {
    DEFAULT_FALLBACK_FRAMES
}

impl Deck {
    /// The built-in C/C++ unit-testing framework comparison deck.
    pub fn builtin() -> Self {
        builtin::unit_testing_frameworks()
    }

    /// Parse and validate a deck from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Load and validate a deck file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), slides = deck.slides.len(), "deck loaded");
        Ok(deck)
    }

    /// Load `path` if given, otherwise the built-in deck.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.fps == 0 {
            return Err(DeckError::ZeroFps);
        }
        self.timeline()?;
        Ok(())
    }

    /// Slide start frames, in order.
    pub fn boundaries(&self) -> Vec<Frame> {
        self.slides.iter().map(|slide| slide.start).collect()
    }

    /// Build the playback timeline for this deck.
    pub fn timeline(&self) -> Result<TimelineIndex, DeckError> {
        let timeline = TimelineIndex::new(self.boundaries(), self.trailing_frames)?
            .with_fallback_duration(self.fallback_frames);
        Ok(timeline)
    }

    pub fn slide(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }
}
