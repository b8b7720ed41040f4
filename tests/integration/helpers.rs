//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use slidecast::player::{EventBus, ListenerId, PlayerEvent, PlayerHandle};
use slidecast::Frame;

/// Directory holding the TOML deck fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir and return both.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).unwrap();
    (dir, path)
}

/// Command issued to a `MockPlayer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issued {
    Seek(Frame),
    Play,
    Pause,
}

/// Player that records every command and echoes play/pause transitions as
/// events, the way a real player notifies its listeners.
#[derive(Debug, Default)]
pub struct MockPlayer {
    pub issued: Vec<Issued>,
    pub playing: bool,
    pub events: EventBus,
}

impl MockPlayer {
    pub fn pauses(&self) -> usize {
        self.issued.iter().filter(|c| **c == Issued::Pause).count()
    }
}

impl PlayerHandle for MockPlayer {
    fn seek_to(&mut self, frame: Frame) {
        self.issued.push(Issued::Seek(frame));
    }

    fn play(&mut self) {
        self.issued.push(Issued::Play);
        if !self.playing {
            self.playing = true;
            self.events.emit(PlayerEvent::Play);
        }
    }

    fn pause(&mut self) {
        self.issued.push(Issued::Pause);
        if self.playing {
            self.playing = false;
            self.events.emit(PlayerEvent::Pause);
        }
    }

    fn add_listener(&mut self) -> ListenerId {
        self.events.add_listener()
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    fn next_event(&mut self, id: ListenerId) -> Option<PlayerEvent> {
        self.events.next_event(id)
    }
}
