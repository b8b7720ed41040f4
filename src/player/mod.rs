//! Slide deck player
//!
//! Drives playback of a deck whose slides are frame ranges on one timeline:
//!
//! - `handle`: the `PlayerHandle` seam and its event queue
//! - `engine`: `ClockPlayer`, a wall-clock frame cursor
//! - `controller`: `PlaybackController`, slide navigation and auto-stop
//! - `native`: the interactive terminal loop
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: ViewState and shared types (SlideMarker, InputResult)
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (slide, progress bar, control bar, help)
//!
//! # Usage
//!
//! ```no_run
//! use slidecast::deck::Deck;
//! use slidecast::player::{play_deck, PlaybackResult, PlayerOptions};
//!
//! let deck = Deck::builtin();
//! match play_deck(&deck, &PlayerOptions::default()).unwrap() {
//!     PlaybackResult::Quit { last_slide } => println!("Stopped on slide {}", last_slide + 1),
//! }
//! ```

pub mod controller;
pub mod engine;
pub mod handle;
pub mod input;
mod native;
pub mod render;
pub mod state;

pub use controller::{PlaybackController, PlaybackPhase};
pub use engine::ClockPlayer;
pub use handle::{EventBus, ListenerId, PlayerEvent, PlayerHandle};
pub use native::{build_controller, collect_markers, play_deck, PlaybackResult, PlayerOptions};
pub use state::{InputResult, SlideMarker, ViewState};
