//! Slidecast - terminal player for frame-timed slide decks
//!
//! A deck is a list of slides, each starting at a frame on one shared
//! timeline. Navigating to a slide plays it and stops on its last frame;
//! pressing play again continues freely.

pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod player;
pub mod theme;
pub mod timeline;

pub use config::Config;
pub use deck::{Deck, DeckError};
pub use player::{ClockPlayer, PlaybackController, PlayerHandle};
pub use timeline::{Frame, TimelineError, TimelineIndex};
